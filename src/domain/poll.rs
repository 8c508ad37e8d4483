//! Poll recount. Summarises a session's own votes; the stored `yesPercent`
//! aggregates are display-only and never change.

use crate::domain::entities::{Poll, Vote};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemVerdict {
    pub item_id: u32,
    pub text: String,
    /// Stored aggregate, shown as "N% agree".
    pub yes_percent: u8,
    /// `None` when the session never voted on this item.
    pub vote: Option<Vote>,
}

impl ItemVerdict {
    pub fn marker(&self) -> &'static str {
        match self.vote {
            Some(Vote::Yes) => "🚩",
            Some(Vote::No) => "✓",
            None => "·",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSummary {
    /// Items voted "yes" (red flag).
    pub flagged: usize,
    /// Items in the poll, voted or not.
    pub total: usize,
    pub verdicts: Vec<ItemVerdict>,
}

/// Recounts `votes` (keyed by item id) over the poll's items, in poll order.
pub fn summarize(poll: &Poll, votes: &HashMap<u32, Vote>) -> PollSummary {
    let verdicts: Vec<ItemVerdict> = poll
        .items
        .iter()
        .map(|item| ItemVerdict {
            item_id: item.id,
            text: item.text.clone(),
            yes_percent: item.yes_percent,
            vote: votes.get(&item.id).copied(),
        })
        .collect();
    let flagged = verdicts
        .iter()
        .filter(|v| v.vote == Some(Vote::Yes))
        .count();
    PollSummary {
        flagged,
        total: poll.items.len(),
        verdicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PollItem;

    #[test]
    fn test_summarize_ignores_votes_for_unknown_items() {
        let poll = Poll {
            id: "p".to_string(),
            title: "P".to_string(),
            emoji: String::new(),
            description: String::new(),
            items: vec![PollItem {
                id: 1,
                text: "a".to_string(),
                yes_percent: 70,
            }],
        };
        let votes = HashMap::from([(1, Vote::Yes), (99, Vote::Yes)]);
        let summary = summarize(&poll, &votes);
        assert_eq!(summary.flagged, 1);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.verdicts.len(), 1);
        assert_eq!(summary.verdicts[0].marker(), "🚩");
        assert_eq!(summary.verdicts[0].yes_percent, 70);
    }
}

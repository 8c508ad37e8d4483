//! Session-local poll voting. Votes live only here and are never written back.

use crate::domain::poll::{self, PollSummary};
use crate::domain::{DomainError, Poll, Vote};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Shown right after a vote: the stored aggregate for that statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReveal {
    pub item_id: u32,
    pub vote: Vote,
    pub yes_percent: u8,
    pub no_percent: u8,
    /// True when this vote completed the poll.
    pub complete: bool,
}

pub struct PollSession {
    poll: Arc<Poll>,
    current: usize,
    votes: HashMap<u32, Vote>,
    complete: bool,
}

impl PollSession {
    pub fn new(poll: Arc<Poll>) -> Self {
        Self {
            current: 0,
            complete: poll.items.is_empty(),
            poll,
            votes: HashMap::new(),
        }
    }

    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// A poll without items has nothing to vote on and counts as complete.
    pub fn is_empty(&self) -> bool {
        self.poll.items.is_empty()
    }

    /// Record `vote` for item `item_index` and move past it.
    ///
    /// Only the session's own vote map changes; the poll's `yesPercent`
    /// figures are returned for display as-is.
    pub fn record_vote(&mut self, item_index: usize, vote: Vote) -> Result<VoteReveal, DomainError> {
        if self.complete {
            return Err(DomainError::InvalidInput("poll already complete".to_string()));
        }
        let item = self.poll.items.get(item_index).ok_or_else(|| {
            DomainError::InvalidInput(format!(
                "item {} out of range for poll {}",
                item_index, self.poll.id
            ))
        })?;
        self.votes.insert(item.id, vote);
        self.current = item_index + 1;
        self.complete = self.current >= self.poll.items.len();
        debug!(poll = %self.poll.id, item = item.id, ?vote, complete = self.complete, "vote recorded");

        Ok(VoteReveal {
            item_id: item.id,
            vote,
            yes_percent: item.yes_percent,
            no_percent: item.no_percent(),
            complete: self.complete,
        })
    }

    /// Recount of this session's votes.
    pub fn summary(&self) -> PollSummary {
        poll::summarize(&self.poll, &self.votes)
    }

    /// "Vote again": forget every vote and go back to the first item.
    pub fn restart(&mut self) {
        self.current = 0;
        self.votes.clear();
        self.complete = self.poll.items.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PollItem;

    fn poll(n: u32) -> Arc<Poll> {
        Arc::new(Poll {
            id: "dating".to_string(),
            title: "Dating Red Flags".to_string(),
            emoji: "🚩".to_string(),
            description: String::new(),
            items: (1..=n)
                .map(|id| PollItem {
                    id,
                    text: format!("Statement {}", id),
                    yes_percent: 60 + id as u8,
                })
                .collect(),
        })
    }

    #[test]
    fn test_yes_no_yes_flags_two_of_three() {
        let mut session = PollSession::new(poll(3));
        assert!(!session.record_vote(0, Vote::Yes).unwrap().complete);
        assert!(!session.record_vote(1, Vote::No).unwrap().complete);
        assert!(session.record_vote(2, Vote::Yes).unwrap().complete);

        let summary = session.summary();
        assert_eq!((summary.flagged, summary.total), (2, 3));
        let markers: Vec<_> = summary.verdicts.iter().map(|v| v.marker()).collect();
        assert_eq!(markers, vec!["🚩", "✓", "🚩"]);
    }

    #[test]
    fn test_reveal_uses_stored_aggregate_and_leaves_poll_untouched() {
        let p = poll(2);
        let mut session = PollSession::new(Arc::clone(&p));
        let reveal = session.record_vote(0, Vote::No).unwrap();
        assert_eq!((reveal.yes_percent, reveal.no_percent), (61, 39));
        assert_eq!(session.poll().items[0].yes_percent, 61);
        assert_eq!(p.items[0].yes_percent, 61);
    }

    #[test]
    fn test_vote_after_completion_rejected() {
        let mut session = PollSession::new(poll(1));
        session.record_vote(0, Vote::Yes).unwrap();
        assert!(session.is_complete());
        assert!(matches!(
            session.record_vote(0, Vote::No),
            Err(DomainError::InvalidInput(_))
        ));
        assert_eq!(session.summary().verdicts[0].vote, Some(Vote::Yes));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mut session = PollSession::new(poll(2));
        assert!(session.record_vote(5, Vote::Yes).is_err());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.summary().flagged, 0);
    }

    #[test]
    fn test_revote_same_item_overwrites() {
        let mut session = PollSession::new(poll(3));
        session.record_vote(0, Vote::Yes).unwrap();
        session.record_vote(0, Vote::No).unwrap();
        assert_eq!(session.summary().flagged, 0);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_poll_without_items_is_complete() {
        let mut session = PollSession::new(poll(0));
        assert!(session.is_empty());
        assert!(session.is_complete());
        assert!(session.record_vote(0, Vote::Yes).is_err());
        session.restart();
        assert!(session.is_complete());
        assert_eq!((session.summary().flagged, session.summary().total), (0, 0));
    }

    #[test]
    fn test_restart() {
        let mut session = PollSession::new(poll(2));
        session.record_vote(0, Vote::Yes).unwrap();
        session.record_vote(1, Vote::Yes).unwrap();
        session.restart();
        assert!(!session.is_complete());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.summary().flagged, 0);
        assert_eq!(session.summary().total, 2);
    }
}

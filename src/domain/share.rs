//! Share messages for results, poll summaries and flag cards.

use crate::domain::entities::{Flag, FlagKind, Poll, Quiz, ResultBucket};
use crate::domain::poll::PollSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    QuizResult,
    PollSummary,
    FlagCard,
}

/// Ready-to-post share payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    pub kind: ShareKind,
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareMessage {
    /// Clipboard form. One-line shares keep the link on the same line;
    /// the multi-line flag card puts it after a blank line.
    pub fn to_clipboard(&self) -> String {
        match self.kind {
            ShareKind::FlagCard => format!("{}\n\n{}", self.text, self.url),
            ShareKind::QuizResult | ShareKind::PollSummary => {
                format!("{} {}", self.text, self.url)
            }
        }
    }
}

pub const FLAGS_SHARE_TITLE: &str = "My Flags - Truth In Signals";
const MY_FLAGS_PATH: &str = "redflags/my-flags";

pub fn quiz_url(site: &str, quiz_id: &str) -> String {
    format!("{}/quiz/{}", site.trim_end_matches('/'), quiz_id)
}

pub fn poll_url(site: &str, poll_id: &str) -> String {
    format!("{}/redflags/{}", site.trim_end_matches('/'), poll_id)
}

pub fn my_flags_url(site: &str, token: &str) -> String {
    format!("{}/{}/{}", site.trim_end_matches('/'), MY_FLAGS_PATH, token)
}

pub fn quiz_result(site: &str, quiz: &Quiz, result: &ResultBucket) -> ShareMessage {
    ShareMessage {
        kind: ShareKind::QuizResult,
        title: quiz.title.clone(),
        text: format!("I got \"{}\" on {}", result.title, quiz.title),
        url: quiz_url(site, &quiz.id),
    }
}

pub fn poll_summary(site: &str, poll: &Poll, summary: &PollSummary) -> ShareMessage {
    ShareMessage {
        kind: ShareKind::PollSummary,
        title: poll.title.clone(),
        text: format!(
            "I flagged {}/{} in \"{}\"",
            summary.flagged, summary.total, poll.title
        ),
        url: poll_url(site, &poll.id),
    }
}

/// Flag card. Empty sections are left out.
pub fn flag_card(site: &str, token: &str, red: &[Flag], green: &[Flag]) -> ShareMessage {
    let mut text = String::from("My Flags:\n\n");
    if !red.is_empty() {
        text.push_str(&section(FlagKind::Red, red));
        text.push_str("\n\n");
    }
    if !green.is_empty() {
        text.push_str(&section(FlagKind::Green, green));
    }
    ShareMessage {
        kind: ShareKind::FlagCard,
        title: FLAGS_SHARE_TITLE.to_string(),
        text: text.trim_end().to_string(),
        url: my_flags_url(site, token),
    }
}

fn section(kind: FlagKind, flags: &[Flag]) -> String {
    let lines: Vec<String> = flags
        .iter()
        .map(|f| format!("{} {}", kind.marker(), f.text))
        .collect();
    format!("{}:\n{}", kind, lines.join("\n"))
}

/// Pulls the token out of a pasted share link; bare tokens pass through.
pub fn token_from_link(input: &str) -> &str {
    let input = input.trim();
    let path = input.split(['?', '#']).next().unwrap_or(input);
    match path.rfind(MY_FLAGS_PATH) {
        Some(pos) => path[pos + MY_FLAGS_PATH.len()..].trim_matches('/'),
        None => path,
    }
}

//! Domain entities. Pure data structures for the content documents.
//!
//! Field names follow the JSON documents (camelCase); everything here is
//! read-only once loaded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `quizzes.json` root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizCatalog {
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

/// `redflags.json` root: polls plus the two "my flags" catalogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedFlagCatalog {
    #[serde(default)]
    pub polls: Vec<Poll>,
    #[serde(default)]
    pub my_red_flags: Vec<Flag>,
    #[serde(default)]
    pub my_green_flags: Vec<Flag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub hook: Option<String>,
    pub category: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub results: Vec<ResultBucket>,
    /// Declared scoring mode. When absent it is inferred from the options.
    #[serde(default)]
    pub scoring: Option<ScoringMode>,
}

impl Quiz {
    /// Scoring mode for the whole quiz, decided once.
    ///
    /// Declared mode wins; otherwise any option carrying a `type` makes it a
    /// category quiz, any option carrying `correct` makes it a correctness
    /// quiz, and everything else sums `points`.
    pub fn scoring_mode(&self) -> ScoringMode {
        if let Some(mode) = self.scoring {
            return mode;
        }
        let options = || self.questions.iter().flat_map(|q| q.options.iter());
        if options().any(|o| o.category.is_some()) {
            ScoringMode::Category
        } else if options().any(|o| o.correct.is_some()) {
            ScoringMode::Correctness
        } else {
            ScoringMode::Numeric
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

/// A selectable option. Which optional field matters depends on the quiz's
/// [`ScoringMode`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Sum of option `points`.
    #[serde(rename = "points")]
    Numeric,
    /// Majority of option `type` labels.
    #[serde(rename = "type")]
    Category,
    /// Count of options with `correct: true`.
    #[serde(rename = "correct")]
    Correctness,
}

impl ScoringMode {
    /// Turns a chosen option into the tagged answer this mode scores.
    pub fn answer_for(self, option: &AnswerOption) -> Answer {
        match self {
            ScoringMode::Numeric => Answer::Numeric(option.points.unwrap_or(0)),
            ScoringMode::Category => Answer::Category(option.category.clone()),
            ScoringMode::Correctness => Answer::Correctness(option.correct.unwrap_or(false)),
        }
    }
}

/// One recorded answer, already reduced to what its quiz scores on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Numeric(i64),
    Category(Option<String>),
    Correctness(bool),
}

/// A result bucket: either an inclusive score range or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultBucket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ResultBucket {
    pub const DEFAULT_MIN: i64 = 0;
    pub const DEFAULT_MAX: i64 = 100;

    /// Inclusive range check; missing bounds default to 0..=100.
    pub fn contains(&self, score: i64) -> bool {
        let min = self.min_score.unwrap_or(Self::DEFAULT_MIN);
        let max = self.max_score.unwrap_or(Self::DEFAULT_MAX);
        (min..=max).contains(&score)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<PollItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollItem {
    pub id: u32,
    pub text: String,
    /// Precomputed share of people who call this a red flag (0-100).
    pub yes_percent: u8,
}

impl PollItem {
    pub fn no_percent(&self) -> u8 {
        100u8.saturating_sub(self.yes_percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    /// "Red flag".
    Yes,
    /// "Not a flag".
    No,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flag {
    /// Catalog id: `r<n>` for red flags, `g<n>` for green flags.
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub emoji: String,
}

impl Flag {
    /// The numeric part of the id, which is what share tokens carry.
    pub fn number(&self) -> Option<u32> {
        self.id
            .trim_start_matches(|c: char| c.is_ascii_alphabetic())
            .parse()
            .ok()
    }

    /// Number carried in share tokens, only when the id is exactly
    /// `<prefix><n>` for `kind` (so it resolves back to this flag).
    pub fn share_number(&self, kind: FlagKind) -> Option<u32> {
        self.number().filter(|&n| self.id == kind.flag_id(n))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Red,
    Green,
}

impl FlagKind {
    pub fn id_prefix(self) -> char {
        match self {
            FlagKind::Red => 'r',
            FlagKind::Green => 'g',
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            FlagKind::Red => "🚩",
            FlagKind::Green => "💚",
        }
    }

    /// Catalog id for the numeric part `n`.
    pub fn flag_id(self, n: u32) -> String {
        format!("{}{}", self.id_prefix(), n)
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::Red => write!(f, "Red Flags"),
            FlagKind::Green => write!(f, "Green Flags"),
        }
    }
}

//! Content catalog. Loads both documents once and answers lookups.

use crate::domain::{
    DomainError, Flag, FlagKind, Poll, Quiz, QuizCatalog, RedFlagCatalog, ScoringMode,
};
use crate::ports::ContentPort;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Home-page category filters: (id, label). `all` disables filtering.
pub const CATEGORY_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("relationship", "Relationships"),
    ("psychology", "Psychology"),
    ("iq", "IQ & Logic"),
    ("personality", "Personality"),
];

pub const ALL_CATEGORIES: &str = "all";

/// Read-only view over the loaded content. Shared by every session.
pub struct CatalogService {
    quizzes: Vec<Arc<Quiz>>,
    polls: Vec<Arc<Poll>>,
    red_flags: Vec<Flag>,
    green_flags: Vec<Flag>,
}

impl CatalogService {
    /// Load both documents through `content`. A missing or malformed
    /// document is an error; content oddities are only logged.
    pub async fn load(content: Arc<dyn ContentPort>) -> Result<Self, DomainError> {
        let quizzes = content.load_quizzes().await?;
        let red_flags = content.load_red_flags().await?;
        let catalog = Self::from_documents(quizzes, red_flags);
        info!(
            quizzes = catalog.quizzes.len(),
            polls = catalog.polls.len(),
            red_flags = catalog.red_flags.len(),
            green_flags = catalog.green_flags.len(),
            "content loaded"
        );
        Ok(catalog)
    }

    pub fn from_documents(quizzes: QuizCatalog, red_flags: RedFlagCatalog) -> Self {
        check_quizzes(&quizzes.quizzes);
        check_polls(&red_flags.polls);
        check_flags(FlagKind::Red, &red_flags.my_red_flags);
        check_flags(FlagKind::Green, &red_flags.my_green_flags);
        Self {
            quizzes: quizzes.quizzes.into_iter().map(Arc::new).collect(),
            polls: red_flags.polls.into_iter().map(Arc::new).collect(),
            red_flags: red_flags.my_red_flags,
            green_flags: red_flags.my_green_flags,
        }
    }

    /// Quizzes in document order, filtered by category (`"all"` keeps everything).
    pub fn quizzes(&self, category: &str) -> Vec<Arc<Quiz>> {
        self.quizzes
            .iter()
            .filter(|q| category == ALL_CATEGORIES || q.category == category)
            .cloned()
            .collect()
    }

    pub fn quiz(&self, id: &str) -> Result<Arc<Quiz>, DomainError> {
        self.quizzes
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| DomainError::quiz_not_found(id))
    }

    pub fn polls(&self) -> &[Arc<Poll>] {
        &self.polls
    }

    pub fn poll(&self, id: &str) -> Result<Arc<Poll>, DomainError> {
        self.polls
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DomainError::poll_not_found(id))
    }

    pub fn flags(&self, kind: FlagKind) -> &[Flag] {
        match kind {
            FlagKind::Red => &self.red_flags,
            FlagKind::Green => &self.green_flags,
        }
    }

    /// Flag with numeric part `n` in the given catalog.
    pub fn find_flag(&self, kind: FlagKind, n: u32) -> Option<&Flag> {
        let id = kind.flag_id(n);
        self.flags(kind).iter().find(|f| f.id == id)
    }
}

fn check_quizzes(quizzes: &[Quiz]) {
    let mut seen = HashSet::new();
    for quiz in quizzes {
        if !seen.insert(quiz.id.as_str()) {
            warn!(quiz = %quiz.id, "duplicate quiz id; only the first is reachable");
        }
        if quiz.results.is_empty() {
            warn!(quiz = %quiz.id, "quiz has no results");
        }
        if quiz.questions.iter().any(|q| q.options.is_empty()) {
            warn!(quiz = %quiz.id, "quiz has a question without options");
        }
        if quiz.scoring_mode() != ScoringMode::Category {
            for r in &quiz.results {
                if let (Some(min), Some(max)) = (r.min_score, r.max_score) {
                    if min > max {
                        warn!(quiz = %quiz.id, result = %r.title, min, max, "empty score range");
                    }
                }
            }
        }
    }
}

fn check_polls(polls: &[Poll]) {
    let mut seen = HashSet::new();
    for poll in polls {
        if !seen.insert(poll.id.as_str()) {
            warn!(poll = %poll.id, "duplicate poll id; only the first is reachable");
        }
        for item in poll.items.iter().filter(|i| i.yes_percent > 100) {
            warn!(poll = %poll.id, item = item.id, yes_percent = item.yes_percent, "yesPercent above 100");
        }
    }
}

fn check_flags(kind: FlagKind, flags: &[Flag]) {
    for flag in flags {
        if flag.share_number(kind).is_none() {
            warn!(flag = %flag.id, catalog = %kind, "flag id cannot be shared (expected {}<n>)", kind.id_prefix());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::InMemoryContent;

    async fn catalog() -> CatalogService {
        let content: Arc<dyn ContentPort> = Arc::new(InMemoryContent::bundled().unwrap());
        CatalogService::load(content).await.unwrap()
    }

    #[tokio::test]
    async fn test_category_filter() {
        let catalog = catalog().await;
        let all = catalog.quizzes(ALL_CATEGORIES);
        assert!(all.len() >= 3);
        let relationship = catalog.quizzes("relationship");
        assert!(!relationship.is_empty());
        assert!(relationship.iter().all(|q| q.category == "relationship"));
        assert!(catalog.quizzes("astrology").is_empty());
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let catalog = catalog().await;
        assert!(matches!(
            catalog.quiz("nope"),
            Err(DomainError::NotFound { kind: "Quiz", .. })
        ));
        assert!(matches!(
            catalog.poll("nope"),
            Err(DomainError::NotFound { kind: "Poll", .. })
        ));
    }

    #[tokio::test]
    async fn test_find_flag_by_number() {
        let catalog = catalog().await;
        let red = catalog.find_flag(FlagKind::Red, 1).unwrap();
        assert_eq!(red.id, "r1");
        let green = catalog.find_flag(FlagKind::Green, 1).unwrap();
        assert_eq!(green.id, "g1");
        assert!(catalog.find_flag(FlagKind::Red, 9999).is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let doc: QuizCatalog = serde_json::from_str(
            r#"{"quizzes": [
                {"id": "dup", "title": "First", "category": "iq"},
                {"id": "dup", "title": "Second", "category": "iq"}
            ]}"#,
        )
        .unwrap();
        let catalog = CatalogService::from_documents(doc, RedFlagCatalog::default());
        assert_eq!(catalog.quiz("dup").unwrap().title, "First");
    }
}

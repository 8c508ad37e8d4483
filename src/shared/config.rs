//! Application configuration. Content location, share links, UI pacing.

use serde::Deserialize;

/// Public site the share links point at.
pub const DEFAULT_SITE_URL: &str = "https://www.truthinsignals.com";

/// Pause before the next quiz question is shown (cosmetic).
pub const DEFAULT_QUIZ_TRANSITION_MS: u64 = 150;

/// How long a poll's aggregate stays on screen after a vote (cosmetic).
pub const DEFAULT_POLL_REVEAL_MS: u64 = 1500;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding the content documents. When unset the content
    /// compiled into the binary is used. Read from TRUTH_SIGNALS_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Quiz document file name inside `data_dir` (default "quizzes.json").
    #[serde(default)]
    pub quizzes_file: Option<String>,

    /// Polls/flags document file name inside `data_dir` (default "redflags.json").
    #[serde(default)]
    pub redflags_file: Option<String>,

    /// Base URL for share links. Read from TRUTH_SIGNALS_SITE_URL.
    #[serde(default)]
    pub site_url: Option<String>,

    /// Delay in ms between answering and the next question. 0 disables it.
    #[serde(default)]
    pub quiz_transition_ms: Option<u64>,

    /// Delay in ms the poll aggregate is shown after each vote. 0 disables it.
    #[serde(default)]
    pub poll_reveal_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TRUTH_SIGNALS"));
        if let Ok(path) = std::env::var("TRUTH_SIGNALS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn quizzes_file_or_default(&self) -> &str {
        self.quizzes_file
            .as_deref()
            .unwrap_or(crate::adapters::content::json_repo::DEFAULT_QUIZZES_FILE)
    }

    pub fn redflags_file_or_default(&self) -> &str {
        self.redflags_file
            .as_deref()
            .unwrap_or(crate::adapters::content::json_repo::DEFAULT_REDFLAGS_FILE)
    }

    /// Returns the share base URL without a trailing slash.
    pub fn site_url_or_default(&self) -> String {
        self.site_url
            .as_deref()
            .unwrap_or(DEFAULT_SITE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn quiz_transition_ms_or_default(&self) -> u64 {
        self.quiz_transition_ms
            .unwrap_or(DEFAULT_QUIZ_TRANSITION_MS)
    }

    pub fn poll_reveal_ms_or_default(&self) -> u64 {
        self.poll_reveal_ms.unwrap_or(DEFAULT_POLL_REVEAL_MS)
    }
}

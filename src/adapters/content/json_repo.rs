//! Implements ContentPort over JSON files in a data directory.
//!
//! Files are read whole; nothing is ever written back.

use crate::domain::{DomainError, QuizCatalog, RedFlagCatalog};
use crate::ports::ContentPort;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub const DEFAULT_QUIZZES_FILE: &str = "quizzes.json";
pub const DEFAULT_REDFLAGS_FILE: &str = "redflags.json";

/// File-system content source.
pub struct JsonContentRepo {
    quizzes_path: PathBuf,
    redflags_path: PathBuf,
}

impl JsonContentRepo {
    /// Default file names inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_files(data_dir, DEFAULT_QUIZZES_FILE, DEFAULT_REDFLAGS_FILE)
    }

    pub fn with_files(
        data_dir: impl AsRef<Path>,
        quizzes_file: impl AsRef<Path>,
        redflags_file: impl AsRef<Path>,
    ) -> Self {
        let dir = data_dir.as_ref();
        Self {
            quizzes_path: dir.join(quizzes_file),
            redflags_path: dir.join(redflags_file),
        }
    }

    async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
        let raw = match fs::read_to_string(path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::Content(format!(
                    "{} not found",
                    path.display()
                )));
            }
            Err(e) => {
                return Err(DomainError::Content(format!(
                    "read {}: {}",
                    path.display(),
                    e
                )));
            }
        };
        let doc = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Content(format!("parse {}: {}", path.display(), e)))?;
        info!(path = %path.display(), bytes = raw.len(), "content document loaded");
        Ok(doc)
    }
}

#[async_trait::async_trait]
impl ContentPort for JsonContentRepo {
    async fn load_quizzes(&self) -> Result<QuizCatalog, DomainError> {
        Self::read_document(&self.quizzes_path).await
    }

    async fn load_red_flags(&self) -> Result<RedFlagCatalog, DomainError> {
        Self::read_document(&self.redflags_path).await
    }
}

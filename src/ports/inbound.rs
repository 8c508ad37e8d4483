//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI invokes application use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive main menu until the user quits.
    async fn run(&self) -> Result<(), DomainError>;

    /// Play one quiz picked by id. An unknown id is shown as "not found".
    async fn open_quiz(&self, id: &str) -> Result<(), DomainError>;

    /// Vote through one poll picked by id. An unknown id is shown as "not found".
    async fn open_poll(&self, id: &str) -> Result<(), DomainError>;

    /// Render the flag card behind a shared token or link, then return.
    async fn open_shared(&self, link: &str) -> Result<(), DomainError>;
}

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::release::Release;

/// Lists the published releases of a repository.
///
/// Fetching, pagination, and authentication are the implementation's
/// concern; the evaluator only consumes the returned sequence.
#[async_trait]
pub trait ReleaseProvider: Send + Sync {
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>, ProviderError>;
}

/// Renders release-note markdown to displayable text.
#[async_trait]
pub trait NotesRenderer: Send + Sync {
    async fn render_markdown(&self, body: &str) -> Result<String, ProviderError>;
}

use async_trait::async_trait;
use relcheck_core::{NotesRenderer, ProviderError};

use crate::client::{GitHubClient, ensure_success};

#[async_trait]
impl NotesRenderer for GitHubClient {
    async fn render_markdown(&self, body: &str) -> Result<String, ProviderError> {
        let url = format!("{}/markdown/raw", self.api_base);
        let response = self
            .http
            .post(&url)
            .header("User-Agent", &self.user_agent)
            .header("Content-Type", "text/x-markdown")
            .body(body.to_string())
            .send()
            .await
            .map_err(|error| ProviderError::request_from("markdown render", error))?;

        let response = ensure_success(response, "markdown render").await?;
        response
            .text()
            .await
            .map_err(|error| ProviderError::parse_from("markdown render", error))
    }
}

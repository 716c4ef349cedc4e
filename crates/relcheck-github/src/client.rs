use async_trait::async_trait;
use log::debug;
use relcheck_core::{ProviderError, Release, ReleaseProvider};

const GITHUB_API_BASE: &str = "https://api.github.com";
const RELEASES_PER_PAGE: u32 = 100;

/// GitHub REST client implementing the relcheck collaborator traits.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_base: String,
    pub(crate) user_agent: String,
}

impl GitHubClient {
    /// Wrap `http` for requests against the public GitHub API, identifying
    /// as `{repo}-update-check`.
    #[must_use]
    pub fn new(http: reqwest::Client, repo: &str) -> Self {
        Self {
            http,
            api_base: GITHUB_API_BASE.to_string(),
            user_agent: format!("{repo}-update-check"),
        }
    }

    /// Point the client at a different API base, for GitHub Enterprise
    /// installations.
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    async fn releases_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<Vec<Release>, ProviderError> {
        let url = format!("{}/repos/{owner}/{repo}/releases", self.api_base);
        let response = self
            .http
            .get(&url)
            .query(&[("per_page", RELEASES_PER_PAGE), ("page", page)])
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|error| ProviderError::request_from("release listing", error))?;

        let response = ensure_success(response, "release listing").await?;
        response
            .json()
            .await
            .map_err(|error| ProviderError::parse_from("release listing", error))
    }
}

#[async_trait]
impl ReleaseProvider for GitHubClient {
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>, ProviderError> {
        let mut releases = Vec::new();
        let mut page = 1;
        loop {
            let batch = self.releases_page(owner, repo, page).await?;
            let short_page = batch.len() < RELEASES_PER_PAGE as usize;
            releases.extend(batch);
            if short_page {
                break;
            }
            page += 1;
        }
        debug!("listed {} releases for {owner}/{repo}", releases.len());
        Ok(releases)
    }
}

pub(crate) async fn ensure_success(
    response: reqwest::Response,
    operation: &'static str,
) -> Result<reqwest::Response, ProviderError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let snippet = response
        .text()
        .await
        .ok()
        .map(|body| response_snippet(&body, 160))
        .unwrap_or_default();
    Err(ProviderError::status(operation, status, snippet))
}

fn response_snippet(body: &str, max_chars: usize) -> String {
    let snippet: String = body.chars().take(max_chars).collect();
    if snippet.is_empty() {
        String::new()
    } else {
        format!(": {snippet}")
    }
}

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::error::NotesError;
use crate::evaluate::{CheckContext, UpdateCheck, UpdateLock, evaluate};
use crate::traits::{NotesRenderer, ReleaseProvider};

/// Ties a [`CheckContext`] to a release provider and runs update checks
/// against it.
#[derive(Debug, Clone)]
pub struct UpdateChecker<C> {
    context: CheckContext,
    client: C,
}

impl<C> UpdateChecker<C> {
    #[must_use]
    pub fn new(context: CheckContext, client: C) -> Self {
        Self { context, client }
    }

    #[must_use]
    pub fn context(&self) -> &CheckContext {
        &self.context
    }
}

impl<C: ReleaseProvider> UpdateChecker<C> {
    /// Fetch the repository's releases and classify the available update.
    ///
    /// Fetch failures never propagate as errors: they are folded into the
    /// returned value as [`crate::UpdateKind::Fail`] with the underlying
    /// message retained for display.
    pub async fn check_for_update(&self, lock: UpdateLock) -> UpdateCheck {
        match self
            .client
            .list_releases(&self.context.owner, &self.context.repo)
            .await
        {
            Ok(releases) => evaluate(&self.context, &releases, lock),
            Err(error) => {
                debug!(
                    "release listing for {}/{} failed: {error}",
                    self.context.owner, self.context.repo
                );
                UpdateCheck::failed(error.to_string())
            }
        }
    }

    /// Like [`Self::check_for_update`], giving up when `cancel` fires.
    /// Cancellation is reported as a failed check, not as "no update".
    pub async fn check_for_update_with_cancel(
        &self,
        lock: UpdateLock,
        cancel: &CancellationToken,
    ) -> UpdateCheck {
        tokio::select! {
            () = cancel.cancelled() => UpdateCheck::failed("update check cancelled"),
            check = self.check_for_update(lock) => check,
        }
    }
}

impl<C: NotesRenderer> UpdateChecker<C> {
    /// Render the notes of the release selected by a previous check.
    ///
    /// # Errors
    /// Returns [`NotesError::NoSelectedRelease`] when `check` carries no
    /// release, and a render error when the markdown collaborator fails.
    pub async fn render_release_notes(&self, check: &UpdateCheck) -> Result<String, NotesError> {
        let release = check.release.as_ref().ok_or(NotesError::NoSelectedRelease)?;
        match release.body.as_deref() {
            None | Some("") => Ok(String::new()),
            Some(body) => Ok(self.client.render_markdown(body).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::ProviderError;
    use crate::evaluate::UpdateKind;
    use crate::release::Release;

    struct MockClient {
        releases: Result<Vec<Release>, ProviderError>,
        rendered_prefix: &'static str,
    }

    impl MockClient {
        fn with_releases(releases: Vec<Release>) -> Self {
            Self {
                releases: Ok(releases),
                rendered_prefix: "rendered: ",
            }
        }

        fn failing(error: ProviderError) -> Self {
            Self {
                releases: Err(error),
                rendered_prefix: "rendered: ",
            }
        }
    }

    #[async_trait]
    impl ReleaseProvider for MockClient {
        async fn list_releases(
            &self,
            _owner: &str,
            _repo: &str,
        ) -> Result<Vec<Release>, ProviderError> {
            self.releases.clone()
        }
    }

    #[async_trait]
    impl NotesRenderer for MockClient {
        async fn render_markdown(&self, body: &str) -> Result<String, ProviderError> {
            Ok(format!("{}{body}", self.rendered_prefix))
        }
    }

    /// Provider whose fetch never completes, for cancellation tests.
    struct StalledClient;

    #[async_trait]
    impl ReleaseProvider for StalledClient {
        async fn list_releases(
            &self,
            _owner: &str,
            _repo: &str,
        ) -> Result<Vec<Release>, ProviderError> {
            std::future::pending::<()>().await;
            unreachable!("pending future never resolves")
        }
    }

    fn release(tag: &str, body: Option<&str>) -> Release {
        Release {
            tag_name: tag.to_string(),
            target_commitish: "master".to_string(),
            prerelease: false,
            name: None,
            body: body.map(str::to_string),
            html_url: format!("https://github.com/owner/repo/releases/tag/{tag}"),
            published_at: None,
        }
    }

    fn checker<C>(client: C) -> UpdateChecker<C> {
        let context = CheckContext::new("owner", "repo", "1.5.0").expect("valid test context");
        UpdateChecker::new(context, client)
    }

    #[tokio::test]
    async fn check_classifies_against_fetched_releases() {
        let checker = checker(MockClient::with_releases(vec![release("v2.0.0", None)]));

        let check = checker.check_for_update(UpdateLock::None).await;

        assert_eq!(check.kind, UpdateKind::Major);
        assert!(check.is_update_available());
        assert_eq!(check.release.unwrap().tag_name, "v2.0.0");
    }

    #[tokio::test]
    async fn fetch_failure_becomes_fail_with_message() {
        let checker = checker(MockClient::failing(ProviderError::request(
            "release listing",
            "connection refused",
        )));

        let check = checker.check_for_update(UpdateLock::None).await;

        assert_eq!(check.kind, UpdateKind::Fail);
        assert!(check.release.is_none());
        assert_eq!(
            check.error.as_deref(),
            Some("release listing request failed: connection refused")
        );
    }

    #[tokio::test]
    async fn cancellation_is_reported_as_fail() {
        let checker = checker(StalledClient);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let check = checker
            .check_for_update_with_cancel(UpdateLock::None, &cancel)
            .await;

        assert_eq!(check.kind, UpdateKind::Fail);
        assert_eq!(check.error.as_deref(), Some("update check cancelled"));
    }

    #[tokio::test]
    async fn uncancelled_token_does_not_disturb_the_check() {
        let checker = checker(MockClient::with_releases(vec![release("v1.5.1", None)]));
        let cancel = CancellationToken::new();

        let check = checker
            .check_for_update_with_cancel(UpdateLock::None, &cancel)
            .await;

        assert_eq!(check.kind, UpdateKind::Patch);
    }

    #[tokio::test]
    async fn notes_render_through_the_collaborator() {
        let checker = checker(MockClient::with_releases(vec![release(
            "v2.0.0",
            Some("## Changes"),
        )]));

        let check = checker.check_for_update(UpdateLock::None).await;
        let notes = checker.render_release_notes(&check).await.unwrap();

        assert_eq!(notes, "rendered: ## Changes");
    }

    #[tokio::test]
    async fn notes_without_selection_are_an_invalid_state() {
        let checker = checker(MockClient::with_releases(Vec::new()));

        let check = checker.check_for_update(UpdateLock::None).await;
        let result = checker.render_release_notes(&check).await;

        assert!(matches!(result, Err(NotesError::NoSelectedRelease)));
    }

    #[tokio::test]
    async fn missing_body_renders_to_empty_without_collaborator() {
        let checker = checker(MockClient::with_releases(vec![release("v2.0.0", None)]));

        let check = checker.check_for_update(UpdateLock::None).await;
        let notes = checker.render_release_notes(&check).await.unwrap();

        assert!(notes.is_empty());
    }
}

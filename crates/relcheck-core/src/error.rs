use thiserror::Error;

use crate::version::VersionParseError;

/// Construction-time validation failures. These are fatal: a check context
/// is never built from bad input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("{field} must not be empty")]
    EmptyArgument { field: &'static str },

    #[error(transparent)]
    InvalidVersion(#[from] VersionParseError),
}

/// Transport failures reported by release providers and notes renderers.
///
/// Kept string-detailed so the core stays independent of any HTTP client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{operation} request failed: {details}")]
    Request {
        operation: &'static str,
        details: String,
    },

    #[error("{operation} failed with HTTP {status}{snippet}")]
    Status {
        operation: &'static str,
        status: u16,
        snippet: String,
    },

    #[error("failed to parse {operation} response: {details}")]
    Parse {
        operation: &'static str,
        details: String,
    },
}

impl ProviderError {
    pub fn request(operation: &'static str, details: impl Into<String>) -> Self {
        Self::Request {
            operation,
            details: details.into(),
        }
    }

    pub fn request_from<E>(operation: &'static str, error: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::request(operation, error.to_string())
    }

    pub fn status(operation: &'static str, status: u16, snippet: impl Into<String>) -> Self {
        Self::Status {
            operation,
            status,
            snippet: snippet.into(),
        }
    }

    pub fn parse(operation: &'static str, details: impl Into<String>) -> Self {
        Self::Parse {
            operation,
            details: details.into(),
        }
    }

    pub fn parse_from<E>(operation: &'static str, error: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::parse(operation, error.to_string())
    }
}

/// Failures of the notes-rendering step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotesError {
    /// Notes were requested for a check that selected no release.
    #[error("no release was selected by the update check")]
    NoSelectedRelease,

    #[error(transparent)]
    Render(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::{ContextError, NotesError, ProviderError};

    #[test]
    fn empty_argument_display_names_the_field() {
        let error = ContextError::EmptyArgument { field: "owner" };
        assert_eq!(error.to_string(), "owner must not be empty");
    }

    #[test]
    fn provider_helpers_set_expected_variant() {
        let request = ProviderError::request("release listing", "timed out");
        assert!(matches!(
            request,
            ProviderError::Request {
                operation: "release listing",
                ..
            }
        ));

        let parse = ProviderError::parse_from("release listing", "invalid json");
        assert!(matches!(
            parse,
            ProviderError::Parse {
                operation: "release listing",
                ..
            }
        ));
    }

    #[test]
    fn status_display_includes_code_and_snippet() {
        let error = ProviderError::status("release listing", 403, ": rate limit exceeded");
        assert_eq!(
            error.to_string(),
            "release listing failed with HTTP 403: rate limit exceeded"
        );

        let bare = ProviderError::status("release listing", 500, "");
        assert_eq!(bare.to_string(), "release listing failed with HTTP 500");
    }

    #[test]
    fn notes_error_wraps_provider_error_transparently() {
        let error = NotesError::from(ProviderError::request("markdown render", "refused"));
        assert_eq!(error.to_string(), "markdown render request failed: refused");
    }
}

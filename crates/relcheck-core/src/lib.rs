//! Core decision logic for GitHub release update checks.
//!
//! This crate is transport-free. It defines the release model, the check
//! context, the lock policy, and the pure [`evaluate`] function that
//! classifies an available update, plus the async [`UpdateChecker`] that
//! runs the evaluation against a pluggable release provider and renders the
//! selected release's notes.

mod checker;
mod error;
mod evaluate;
mod release;
mod traits;
mod version;

/// Async wrapper that runs checks against a release provider.
pub use checker::UpdateChecker;
/// Error taxonomy for construction, transport, and notes rendering.
pub use error::{ContextError, NotesError, ProviderError};
/// Check parameters, lock policy, classification, and the pure evaluator.
pub use evaluate::{CheckContext, UpdateCheck, UpdateKind, UpdateLock, evaluate};
/// Release model shared with providers.
pub use release::Release;
/// Collaborator seams implemented by concrete providers.
pub use traits::{NotesRenderer, ReleaseProvider};
/// Tag and version parsing helpers.
pub use version::{VersionParseError, parse_tag, parse_version};

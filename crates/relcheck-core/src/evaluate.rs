use std::fmt;

use log::debug;
use semver::Version;
use serde::Serialize;

use crate::error::ContextError;
use crate::release::Release;
use crate::version::parse_version;

/// Immutable parameters of an update check.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub owner: String,
    pub repo: String,
    pub current_version: Version,
    /// Branch a release must target to qualify.
    pub branch: String,
    pub ignore_prereleases: bool,
}

impl CheckContext {
    /// Build a context for checking `owner/repo` against `current_version`.
    /// The branch defaults to `master` and prereleases are ignored.
    ///
    /// # Errors
    /// Returns an error when owner, repo, or version is empty, or when the
    /// version does not parse.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        current_version: &str,
    ) -> Result<Self, ContextError> {
        let owner = owner.into();
        let repo = repo.into();
        if owner.is_empty() {
            return Err(ContextError::EmptyArgument { field: "owner" });
        }
        if repo.is_empty() {
            return Err(ContextError::EmptyArgument { field: "repo" });
        }
        let trimmed = current_version.trim();
        if trimmed.is_empty() {
            return Err(ContextError::EmptyArgument { field: "version" });
        }
        let current_version = parse_version(trimmed.strip_prefix('v').unwrap_or(trimmed))?;

        Ok(Self {
            owner,
            repo,
            current_version,
            branch: "master".to_string(),
            ignore_prereleases: true,
        })
    }

    #[must_use]
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    #[must_use]
    pub fn ignore_prereleases(mut self, ignore: bool) -> Self {
        self.ignore_prereleases = ignore;
        self
    }
}

/// Cap on how large a version jump a check may accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateLock {
    /// Any qualifying release may be selected.
    #[default]
    None,
    /// Stay below the next major version.
    Major,
    /// Stay below the next minor version.
    Minor,
}

impl UpdateLock {
    /// Exclusive upper bound on candidate versions, if this lock imposes one.
    #[must_use]
    pub fn upper_bound(self, current: &Version) -> Option<Version> {
        match self {
            Self::None => None,
            Self::Major => Some(Version::new(current.major + 1, 0, 0)),
            Self::Minor => Some(Version::new(current.major, current.minor + 1, 0)),
        }
    }
}

/// Magnitude of an available update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    /// No qualifying newer release exists.
    #[default]
    None,
    Patch,
    Minor,
    Major,
    /// The release list could not be obtained. Distinct from [`Self::None`].
    Fail,
}

impl UpdateKind {
    #[must_use]
    pub fn is_update(self) -> bool {
        matches!(self, Self::Patch | Self::Minor | Self::Major)
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Patch => write!(f, "patch"),
            Self::Minor => write!(f, "minor"),
            Self::Major => write!(f, "major"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Outcome of a single update check: the classification together with the
/// release it applies to.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCheck {
    pub kind: UpdateKind,
    /// The selected release. Present whenever a candidate passed the
    /// filters, even when it classified as no update (a re-tagged release,
    /// for example).
    pub release: Option<Release>,
    /// Underlying failure message when `kind` is [`UpdateKind::Fail`].
    pub error: Option<String>,
}

impl UpdateCheck {
    #[must_use]
    pub fn is_update_available(&self) -> bool {
        self.kind.is_update()
    }

    pub(crate) fn none() -> Self {
        Self {
            kind: UpdateKind::None,
            release: None,
            error: None,
        }
    }

    pub(crate) fn failed(details: impl Into<String>) -> Self {
        Self {
            kind: UpdateKind::Fail,
            release: None,
            error: Some(details.into()),
        }
    }
}

/// Classify the update available to `context` among `releases`.
///
/// A release qualifies when it targets the context's branch, is not a
/// prerelease (unless the context accepts them), carries a parseable tag,
/// and, under a lock, falls strictly between the current version and the
/// lock's upper bound. Among qualifying candidates the highest version wins;
/// ties keep the earliest-listed release.
#[must_use]
pub fn evaluate(context: &CheckContext, releases: &[Release], lock: UpdateLock) -> UpdateCheck {
    let bound = lock.upper_bound(&context.current_version);

    let mut selected: Option<(&Release, Version)> = None;
    for release in releases {
        if release.target_commitish != context.branch {
            continue;
        }
        if release.prerelease && context.ignore_prereleases {
            continue;
        }
        let Some(version) = release.version() else {
            debug!("skipping release with unparseable tag {:?}", release.tag_name);
            continue;
        };
        if let Some(bound) = &bound
            && (version <= context.current_version || version >= *bound)
        {
            continue;
        }
        match &selected {
            Some((_, best)) if version <= *best => {}
            _ => selected = Some((release, version)),
        }
    }

    let Some((release, version)) = selected else {
        return UpdateCheck::none();
    };

    UpdateCheck {
        kind: classify(&context.current_version, &version),
        release: Some(release.clone()),
        error: None,
    }
}

/// Magnitude of the jump from `current` to `latest`. The arms are
/// priority-ordered, not independent flags: a release rarely increments more
/// than one field at a time.
fn classify(current: &Version, latest: &Version) -> UpdateKind {
    if latest.major > current.major {
        UpdateKind::Major
    } else if latest.minor > current.minor && latest.major == current.major {
        UpdateKind::Minor
    } else if latest.patch > current.patch && latest.minor == current.minor {
        UpdateKind::Patch
    } else {
        UpdateKind::None
    }
}

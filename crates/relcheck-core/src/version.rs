use semver::Version;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid version {input:?}: expected MAJOR.MINOR.PATCH")]
pub struct VersionParseError {
    pub input: String,
}

/// Parse a version string, tolerating a missing minor or patch component
/// ("1.2" is read as "1.2.0"). A prerelease or build suffix is preserved.
///
/// # Errors
/// Returns an error when the string is not a dotted sequence of up to three
/// numeric components.
pub fn parse_version(version: &str) -> Result<Version, VersionParseError> {
    if let Ok(parsed) = Version::parse(version) {
        return Ok(parsed);
    }

    let invalid = || VersionParseError {
        input: version.to_string(),
    };

    let (core, suffix) = split_core_and_suffix(version);
    let mut parts = core.split('.');
    let major = parts
        .next()
        .and_then(|part| part.parse::<u64>().ok())
        .ok_or_else(invalid)?;
    let minor = parts
        .next()
        .map(|part| part.parse::<u64>().map_err(|_| invalid()))
        .transpose()?;
    let patch = parts
        .next()
        .map(|part| part.parse::<u64>().map_err(|_| invalid()))
        .transpose()?;

    if parts.next().is_some() {
        return Err(invalid());
    }

    let normalized = match (minor, patch) {
        (None, None) => format!("{major}.0.0{suffix}"),
        (Some(minor), None) => format!("{major}.{minor}.0{suffix}"),
        (Some(minor), Some(patch)) => format!("{major}.{minor}.{patch}{suffix}"),
        (None, Some(_)) => return Err(invalid()),
    };

    Version::parse(&normalized).map_err(|_| invalid())
}

/// Parse a release tag into a version, stripping one leading `v` if present.
/// Returns `None` for tags that do not carry a parseable version.
#[must_use]
pub fn parse_tag(tag: &str) -> Option<Version> {
    let tag = tag.trim();
    parse_version(tag.strip_prefix('v').unwrap_or(tag)).ok()
}

fn split_core_and_suffix(version: &str) -> (&str, &str) {
    let suffix_idx = version.find(['-', '+']).unwrap_or(version.len());
    (&version[..suffix_idx], &version[suffix_idx..])
}

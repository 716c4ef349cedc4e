use chrono::{DateTime, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::version::parse_tag;

/// A published release as listed by the release provider.
///
/// Field names follow the GitHub REST representation so the type
/// deserializes directly from the API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    /// Branch the release was cut from.
    pub target_commitish: String,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Release {
    /// Version carried by this release's tag, if the tag parses as one.
    #[must_use]
    pub fn version(&self) -> Option<Version> {
        parse_tag(&self.tag_name)
    }
}

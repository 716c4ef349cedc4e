use clap::{Parser, ValueEnum};
use relcheck_core::UpdateLock;

#[derive(Parser, Debug)]
#[command(
    name = "relcheck",
    about = "Check a GitHub repository for a newer release",
    version
)]
pub struct Cli {
    /// Repository to check, as `owner/repo`
    pub repo: String,

    /// Version currently in use, e.g. `1.2.3` or `v1.2.3`
    #[arg(short, long)]
    pub current: String,

    /// Branch releases must target
    #[arg(short, long, default_value = "master")]
    pub branch: String,

    /// Consider prerelease versions as update candidates
    #[arg(long)]
    pub include_prereleases: bool,

    /// Cap how far the selected update may advance
    #[arg(long, value_enum)]
    pub lock: Option<Lock>,

    /// Render the selected release's notes after the check
    #[arg(long)]
    pub notes: bool,

    /// Open the selected release's page in a browser
    #[arg(long)]
    pub open: bool,

    /// Print the check outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Lock {
    /// Stay below the next major version
    Major,
    /// Stay below the next minor version
    Minor,
}

impl From<Lock> for UpdateLock {
    fn from(lock: Lock) -> Self {
        match lock {
            Lock::Major => Self::Major,
            Lock::Minor => Self::Minor,
        }
    }
}

/// Split an `owner/repo` argument into its two parts.
#[must_use]
pub fn split_repo(repo: &str) -> Option<(&str, &str)> {
    let (owner, name) = repo.split_once('/')?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }
    Some((owner, name))
}

mod cli;
mod logging;

use anyhow::{Context as _, bail};
use clap::Parser;
use relcheck_core::{CheckContext, UpdateCheck, UpdateChecker, UpdateKind, UpdateLock};
use relcheck_github::GitHubClient;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (owner, repo) =
        cli::split_repo(&cli.repo).context("repository must be given as owner/repo")?;

    let context = CheckContext::new(owner, repo, &cli.current)?
        .branch(&cli.branch)
        .ignore_prereleases(!cli.include_prereleases);
    let checker = UpdateChecker::new(context, GitHubClient::new(reqwest::Client::new(), repo));

    let lock = cli.lock.map_or(UpdateLock::None, Into::into);
    log::debug!("checking {owner}/{repo} against {} on {}", cli.current, cli.branch);
    let check = checker.check_for_update(lock).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&check)?);
    }

    if check.kind == UpdateKind::Fail {
        bail!(
            check
                .error
                .clone()
                .unwrap_or_else(|| "update check failed".to_string())
        );
    }

    if !cli.json {
        print_summary(&check, &cli.current);
    }

    if cli.notes && check.release.is_some() {
        let notes = checker.render_release_notes(&check).await?;
        if !notes.is_empty() {
            println!();
            println!("{notes}");
        }
    }

    if cli.open
        && let Some(release) = &check.release
    {
        open::that(&release.html_url)
            .with_context(|| format!("failed to open {}", release.html_url))?;
    }

    Ok(())
}

fn print_summary(check: &UpdateCheck, current: &str) {
    let Some(release) = &check.release else {
        println!("{current} is up to date: no qualifying release found");
        return;
    };

    if check.is_update_available() {
        println!(
            "{} update available: {current} -> {} ({})",
            check.kind, release.tag_name, release.html_url
        );
    } else {
        println!(
            "{current} is up to date (latest qualifying release: {})",
            release.tag_name
        );
    }
}

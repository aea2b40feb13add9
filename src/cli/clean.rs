//! Clean command - the single command this tool exposes

use crate::cli::style::Stylize;
use anstream::println;
use branch_maid::clean::{CleanOptions, CleanOutcome, clean_branches};
use branch_maid::error::Result;
use branch_maid::platform::{GitHubMergeStatus, parse_remote_url};
use branch_maid::vcs::{GitRepository, VersionControl};
use std::path::Path;

/// Run the clean: resolve the repository identity, classify every local
/// branch, then delete (or list) the merged ones
#[allow(clippy::future_not_send)]
pub async fn run_clean(
    path: &Path,
    api_base: &str,
    token: &str,
    dry_run: bool,
) -> Result<CleanOutcome> {
    let repo = GitRepository::open(path)?;
    let remote_url = repo.remote_url("origin")?;
    let identity = parse_remote_url(&remote_url)?;

    println!(
        "{} {}",
        "Checking branches of".emphasis(),
        format!("{}/{}", identity.owner, identity.repo).accent()
    );

    let provider = GitHubMergeStatus::new(api_base, identity, token)?;
    let outcome = clean_branches(&repo, &provider, CleanOptions { dry_run }).await?;

    report(&outcome, dry_run);
    Ok(outcome)
}

fn report(outcome: &CleanOutcome, dry_run: bool) {
    if dry_run {
        for branch in &outcome.merged {
            println!("{branch}");
        }
        println!();
        println!(
            "{}",
            "Rerun without '-n' or '--dry-run' to delete the above branches".muted()
        );
        return;
    }

    if outcome.merged.is_empty() {
        println!("{}", "No merged branches found".muted());
    }
    for branch in &outcome.deleted {
        println!("{} {}", "Deleted branch".success(), branch.accent());
    }

    if !outcome.lookup_failures.is_empty() {
        println!(
            "{}",
            format!(
                "Skipped {} branch(es) with failed lookups: {}",
                outcome.lookup_failures.len(),
                outcome.lookup_failures.join(", ")
            )
            .warn()
        );
    }
    if !outcome.deletion_failures.is_empty() {
        println!(
            "{}",
            format!(
                "Failed to delete {} branch(es): {}",
                outcome.deletion_failures.len(),
                outcome.deletion_failures.join(", ")
            )
            .warn()
        );
    }
}

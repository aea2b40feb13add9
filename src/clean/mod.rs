//! The clean engine: scan branches, classify, prune
//!
//! Strictly sequential — one lookup per branch in branch-list order. A
//! failing branch never blocks the rest; failures are recorded in the
//! outcome and turned into a non-zero exit by the caller.

use crate::error::Result;
use crate::platform::{MergeStatusProvider, classify};
use crate::types::MergeStatus;
use crate::vcs::VersionControl;
use tracing::{info, warn};

/// Options for a clean run
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Report merged branches without deleting them
    pub dry_run: bool,
}

/// Report of a single clean run
#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    /// Branches classified merged, in discovery order
    pub merged: Vec<String>,
    /// Branches actually deleted (empty under dry-run)
    pub deleted: Vec<String>,
    /// Branches skipped because the lookup failed
    pub lookup_failures: Vec<String>,
    /// Branches whose deletion failed
    pub deletion_failures: Vec<String>,
}

impl CleanOutcome {
    /// Whether any per-branch step failed during the run
    pub fn had_failures(&self) -> bool {
        !self.lookup_failures.is_empty() || !self.deletion_failures.is_empty()
    }
}

/// Run the clean: classify every local branch, then prune the merged ones
///
/// Under dry-run the prune loop is skipped entirely; `outcome.merged` is
/// what would have been deleted.
#[allow(clippy::future_not_send)]
pub async fn clean_branches(
    vcs: &dyn VersionControl,
    provider: &dyn MergeStatusProvider,
    options: CleanOptions,
) -> Result<CleanOutcome> {
    let branches = vcs.local_branches()?;
    let mut outcome = CleanOutcome::default();

    for branch in &branches {
        let pulls = match provider.closed_pull_requests(branch).await {
            Ok(pulls) => pulls,
            Err(e) => {
                warn!("{branch}: lookup failed, skipping: {e}");
                outcome.lookup_failures.push(branch.clone());
                continue;
            }
        };

        match classify(&pulls) {
            MergeStatus::Merged => {
                // classify only looks at the first entry, so it is present here
                if let Some(pr) = pulls.first() {
                    info!("{branch}: merged (#{})", pr.number);
                }
                outcome.merged.push(branch.clone());
            }
            status @ (MergeStatus::NotMerged | MergeStatus::NoPullRequest) => {
                info!("{branch}: {status}");
            }
        }
    }

    if !options.dry_run {
        for branch in outcome.merged.clone() {
            match vcs.delete_branch(&branch) {
                Ok(()) => {
                    info!("{branch}: deleted");
                    outcome.deleted.push(branch);
                }
                Err(e) => {
                    warn!("{e}");
                    outcome.deletion_failures.push(branch);
                }
            }
        }
    }

    Ok(outcome)
}

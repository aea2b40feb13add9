//! Merge-status lookups against the hosting provider
//!
//! Provides the lookup trait, the GitHub implementation, and the pure
//! classification over the response.

mod detection;
mod github;

pub use detection::parse_remote_url;
pub use github::{DEFAULT_API_BASE, GitHubMergeStatus, normalize_api_base};

use crate::error::Result;
use crate::types::{ClosedPullRequest, MergeStatus};
use async_trait::async_trait;

/// Merge-status lookup for local branches
///
/// Abstracts the hosting API so the clean engine can be tested with canned
/// responses instead of real network calls.
#[async_trait]
pub trait MergeStatusProvider: Send + Sync {
    /// Fetch the closed pull requests whose head is `branch`, most recently
    /// updated first
    ///
    /// Only the provider's first page is consulted; callers classify from the
    /// first element.
    async fn closed_pull_requests(&self, branch: &str) -> Result<Vec<ClosedPullRequest>>;
}

/// Classify a branch from its closed pull requests
///
/// Only the first (most recently updated) entry counts; older closed PRs for
/// the same branch are ignored.
pub fn classify(pulls: &[ClosedPullRequest]) -> MergeStatus {
    match pulls.first() {
        None => MergeStatus::NoPullRequest,
        Some(pr) if pr.merged_at.is_some() => MergeStatus::Merged,
        Some(_) => MergeStatus::NotMerged,
    }
}

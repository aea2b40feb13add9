//! Core types for branch-maid

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Owner/repository pair extracted from the `origin` remote URL
///
/// Resolved once at startup and used to build every API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteIdentity {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

/// The subset of a closed pull request the classifier needs
///
/// Fetched per branch and discarded after classification.
#[derive(Debug, Clone, Deserialize)]
pub struct ClosedPullRequest {
    /// PR number
    pub number: u64,
    /// When the PR was merged; `None` means closed without merging
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// Merge classification for one branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStatus {
    /// The most recently updated closed PR was merged
    Merged,
    /// The most recently updated closed PR was closed without merging
    NotMerged,
    /// No closed PR targets this branch
    NoPullRequest,
}

impl std::fmt::Display for MergeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merged => write!(f, "merged"),
            Self::NotMerged => write!(f, "not merged"),
            Self::NoPullRequest => write!(f, "no closed pull request found"),
        }
    }
}

//! Error types for branch-maid

use thiserror::Error;

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by branch-maid
#[derive(Debug, Error)]
pub enum Error {
    /// Remote URL does not match the expected owner/repo shape
    #[error("malformed remote URL '{0}': expected '<host>:<owner>/<repo>.git'")]
    MalformedRemoteUrl(String),

    /// The named remote is not configured
    #[error("remote '{0}' not found")]
    RemoteNotFound(String),

    /// Repository access or branch enumeration failure
    #[error("version control unavailable: {0}")]
    VersionControl(String),

    /// GitHub API request, status, or response-body failure
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// A single branch could not be deleted
    #[error("failed to delete branch '{branch}': {message}")]
    BranchDeletion {
        /// Branch that failed to delete
        branch: String,
        /// Underlying git message
        message: String,
    },
}

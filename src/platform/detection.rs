//! Remote URL parsing
//!
//! Resolves the `origin` remote URL into an owner/repo pair.

use crate::error::{Error, Result};
use crate::types::RemoteIdentity;
use regex::Regex;
use std::sync::LazyLock;

// git@github.com:acme/widgets.git, user part optional (github.com:acme/widgets.git)
static SCP_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^@]+@)?[^:/]+:([^/]+)/([^/]+?)(?:\.git)?$").expect("valid regex")
});

// https://github.com/acme/widgets(.git)
static HTTP_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/]+/([^/]+)/([^/]+?)(?:\.git)?/?$").expect("valid regex")
});

/// Extract the owner and repository name from a git remote URL
///
/// Accepts scp-like SSH remotes (`git@host:owner/repo.git`) and HTTP(S)
/// remotes (`https://host/owner/repo.git`, `.git` optional).
pub fn parse_remote_url(remote_url: &str) -> Result<RemoteIdentity> {
    let trimmed = remote_url.trim();

    let captures = SCP_LIKE
        .captures(trimmed)
        .or_else(|| HTTP_LIKE.captures(trimmed))
        .ok_or_else(|| Error::MalformedRemoteUrl(trimmed.to_string()))?;

    Ok(RemoteIdentity {
        owner: captures[1].to_string(),
        repo: captures[2].to_string(),
    })
}

//! GitHub merge-status implementation

use crate::error::{Error, Result};
use crate::platform::MergeStatusProvider;
use crate::types::{ClosedPullRequest, RemoteIdentity};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default API base when `--github-api` is not given
pub const DEFAULT_API_BASE: &str = "https://api.github.com/";

/// Per-request timeout; expiry surfaces as a per-branch API error
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Ensure the API base ends with exactly one trailing `/`
///
/// `Url::join` treats a base without a trailing slash as a file path and
/// would drop the last segment.
pub fn normalize_api_base(api_base: &str) -> String {
    format!("{}/", api_base.trim_end_matches('/'))
}

/// Merge-status lookups against the GitHub REST API
pub struct GitHubMergeStatus {
    client: Client,
    api_base: Url,
    identity: RemoteIdentity,
    token: String,
}

impl GitHubMergeStatus {
    /// Create a client for the given API base, repository, and token
    pub fn new(api_base: &str, identity: RemoteIdentity, token: &str) -> Result<Self> {
        let api_base = Url::parse(&normalize_api_base(api_base))
            .map_err(|e| Error::GitHubApi(format!("invalid API base '{api_base}': {e}")))?;

        let client = Client::builder()
            .user_agent("branch-maid")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::GitHubApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base,
            identity,
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl MergeStatusProvider for GitHubMergeStatus {
    async fn closed_pull_requests(&self, branch: &str) -> Result<Vec<ClosedPullRequest>> {
        let endpoint = format!(
            "repos/{}/{}/pulls",
            self.identity.owner, self.identity.repo
        );
        let url = self
            .api_base
            .join(&endpoint)
            .map_err(|e| Error::GitHubApi(format!("invalid endpoint '{endpoint}': {e}")))?;
        let head = format!("{}:{branch}", self.identity.owner);

        let response = self
            .client
            .get(url)
            .query(&[
                ("state", "closed"),
                ("sort", "updated"),
                ("direction", "desc"),
                ("head", head.as_str()),
            ])
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("request for '{branch}' failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::GitHubApi(format!(
                "GET {endpoint} for '{branch}' returned {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::GitHubApi(format!("failed to read response for '{branch}': {e}")))?;
        debug!(branch, body = %body, "closed pull request response");

        serde_json::from_str(&body)
            .map_err(|e| Error::GitHubApi(format!("malformed response for '{branch}': {e}")))
    }
}

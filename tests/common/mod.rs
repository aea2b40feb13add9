//! Test doubles and fixtures for branch-maid tests
//!
//! These are test utilities - not all may be used in every test file but are
//! shared between the unit and integration suites.

#![allow(dead_code)]

use async_trait::async_trait;
use branch_maid::error::{Error, Result};
use branch_maid::platform::MergeStatusProvider;
use branch_maid::types::{ClosedPullRequest, RemoteIdentity};
use branch_maid::vcs::VersionControl;
use chrono::{DateTime, Utc};
use git2::{Repository, Signature};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tempfile::TempDir;

/// The identity used throughout the fixtures
pub fn acme_identity() -> RemoteIdentity {
    RemoteIdentity {
        owner: "acme".to_string(),
        repo: "widgets".to_string(),
    }
}

/// A closed PR that was merged
pub fn merged_pr(number: u64) -> ClosedPullRequest {
    ClosedPullRequest {
        number,
        merged_at: Some(
            "2021-01-01T00:00:00Z"
                .parse::<DateTime<Utc>>()
                .expect("valid timestamp"),
        ),
    }
}

/// Init a repository with an initial commit, the given extra branches, and
/// an `origin` remote pointing at the acme fixture
pub fn repo_with_branches(branches: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let sig = Signature::now("test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    for branch in branches {
        repo.branch(branch, &head, false).unwrap();
    }
    repo.remote("origin", "git@github.com:acme/widgets.git")
        .unwrap();
    dir
}

/// A closed PR that was closed without merging
pub fn closed_pr(number: u64) -> ClosedPullRequest {
    ClosedPullRequest {
        number,
        merged_at: None,
    }
}

/// Fake repository with a fixed branch list
///
/// Features:
/// - Call tracking for `delete_branch`
/// - Error injection per branch and for branch listing
pub struct MockVersionControl {
    remote_url: String,
    branches: Vec<String>,
    delete_calls: Mutex<Vec<String>>,
    fail_deletes: Mutex<HashSet<String>>,
    fail_listing: Mutex<Option<String>>,
}

impl MockVersionControl {
    /// Create a mock listing the given branches, remote set to the acme fixture
    pub fn with_branches(branches: &[&str]) -> Self {
        Self {
            remote_url: "git@github.com:acme/widgets.git".to_string(),
            branches: branches.iter().map(ToString::to_string).collect(),
            delete_calls: Mutex::new(Vec::new()),
            fail_deletes: Mutex::new(HashSet::new()),
            fail_listing: Mutex::new(None),
        }
    }

    /// Make `delete_branch` fail for a specific branch
    pub fn fail_delete(&self, branch: &str) {
        self.fail_deletes.lock().unwrap().insert(branch.to_string());
    }

    /// Make `local_branches` return an error
    pub fn fail_listing(&self, msg: &str) {
        *self.fail_listing.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all branches `delete_branch` was called with, in call order
    pub fn get_delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    /// Assert that `delete_branch` was never called
    pub fn assert_no_deletes(&self) {
        let calls = self.get_delete_calls();
        assert!(calls.is_empty(), "Expected no deletions but got: {calls:?}");
    }
}

impl VersionControl for MockVersionControl {
    fn remote_url(&self, name: &str) -> Result<String> {
        if name == "origin" {
            Ok(self.remote_url.clone())
        } else {
            Err(Error::RemoteNotFound(name.to_string()))
        }
    }

    fn local_branches(&self) -> Result<Vec<String>> {
        if let Some(msg) = self.fail_listing.lock().unwrap().as_ref() {
            return Err(Error::VersionControl(msg.clone()));
        }
        Ok(self.branches.clone())
    }

    fn delete_branch(&self, name: &str) -> Result<()> {
        self.delete_calls.lock().unwrap().push(name.to_string());
        if self.fail_deletes.lock().unwrap().contains(name) {
            return Err(Error::BranchDeletion {
                branch: name.to_string(),
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

/// Mock merge-status provider with canned responses per branch
///
/// Features:
/// - Configurable responses per branch (missing branch = empty list)
/// - Call tracking for verification
/// - Error injection per branch for failure path testing
pub struct MockMergeStatus {
    responses: Mutex<HashMap<String, Vec<ClosedPullRequest>>>,
    errors: Mutex<HashSet<String>>,
    lookup_calls: Mutex<Vec<String>>,
}

impl MockMergeStatus {
    /// Create a mock with no configured responses
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            errors: Mutex::new(HashSet::new()),
            lookup_calls: Mutex::new(Vec::new()),
        }
    }

    /// Set the response for a specific branch
    pub fn set_response(&self, branch: &str, pulls: Vec<ClosedPullRequest>) {
        self.responses
            .lock()
            .unwrap()
            .insert(branch.to_string(), pulls);
    }

    /// Make the lookup for a specific branch return an error
    pub fn fail_lookup(&self, branch: &str) {
        self.errors.lock().unwrap().insert(branch.to_string());
    }

    /// Get all branches looked up, in call order
    pub fn get_lookup_calls(&self) -> Vec<String> {
        self.lookup_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MergeStatusProvider for MockMergeStatus {
    async fn closed_pull_requests(&self, branch: &str) -> Result<Vec<ClosedPullRequest>> {
        self.lookup_calls.lock().unwrap().push(branch.to_string());

        if self.errors.lock().unwrap().contains(branch) {
            return Err(Error::GitHubApi(format!(
                "injected failure for '{branch}'"
            )));
        }

        let responses = self.responses.lock().unwrap();
        Ok(responses.get(branch).cloned().unwrap_or_default())
    }
}

//! git2-backed repository access

use crate::error::{Error, Result};
use crate::vcs::VersionControl;
use git2::{BranchType, Repository};
use std::path::Path;

/// A local git repository
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing `path`, searching parent directories
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| Error::VersionControl(format!("failed to open repository: {}", e.message())))?;
        Ok(Self { repo })
    }
}

impl VersionControl for GitRepository {
    fn remote_url(&self, name: &str) -> Result<String> {
        let remote = self
            .repo
            .find_remote(name)
            .map_err(|_| Error::RemoteNotFound(name.to_string()))?;
        remote
            .url()
            .map(str::to_string)
            .ok_or_else(|| Error::VersionControl(format!("remote '{name}' URL is not valid UTF-8")))
    }

    fn local_branches(&self) -> Result<Vec<String>> {
        let branches = self
            .repo
            .branches(Some(BranchType::Local))
            .map_err(|e| Error::VersionControl(e.message().to_string()))?;

        let mut names = Vec::new();
        for entry in branches {
            let (branch, _) = entry.map_err(|e| Error::VersionControl(e.message().to_string()))?;
            if branch.is_head() {
                continue;
            }
            let name = branch
                .name()
                .map_err(|e| Error::VersionControl(e.message().to_string()))?
                .ok_or_else(|| Error::VersionControl("branch name is not valid UTF-8".to_string()))?;
            names.push(name.to_string());
        }
        Ok(names)
    }

    fn delete_branch(&self, name: &str) -> Result<()> {
        let mut branch = self
            .repo
            .find_branch(name, BranchType::Local)
            .map_err(|e| Error::BranchDeletion {
                branch: name.to_string(),
                message: e.message().to_string(),
            })?;
        // git2 deletes without the merged-into-HEAD check, i.e. `git branch -D`
        branch.delete().map_err(|e| Error::BranchDeletion {
            branch: name.to_string(),
            message: e.message().to_string(),
        })
    }
}

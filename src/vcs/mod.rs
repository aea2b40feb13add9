//! Local version control access
//!
//! A small capability trait over the repository operations the tool needs,
//! with a git2-backed implementation. Tests substitute a fake.

mod git;

pub use git::GitRepository;

use crate::error::Result;

/// Repository operations used by the clean engine
pub trait VersionControl {
    /// URL of the named remote (typically `origin`)
    fn remote_url(&self, name: &str) -> Result<String>;

    /// All local branch names except the currently checked-out one, in
    /// enumeration order
    fn local_branches(&self) -> Result<Vec<String>>;

    /// Force-delete a local branch
    fn delete_branch(&self, name: &str) -> Result<()>;
}

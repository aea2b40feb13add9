//! branch-maid: delete local git branches whose pull requests were merged
//!
//! The library side holds everything the binary orchestrates: parsing the
//! remote URL into an owner/repo pair, enumerating and deleting local
//! branches, querying GitHub for the most recently updated closed pull
//! request per branch, and the sequential clean engine that ties them
//! together.
//!
//! Scope limits: one lookup per branch, first response page only, no retries.

pub mod clean;
pub mod error;
pub mod platform;
pub mod types;
pub mod vcs;

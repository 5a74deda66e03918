//! Source-hosting abstraction layer
//!
//! This module provides a trait-based abstraction over the source-hosting
//! backend that stores the files a release plan touches, allowing for
//! multiple implementations including local git clones and mock
//! implementations for testing.
//!
//! The primary abstraction is the [SourceHost] trait. The concrete
//! implementations include:
//!
//! - [repository::GitHost]: a real implementation over a local clone using
//!   the `git2` crate
//! - [mock::MockHost]: an in-memory implementation for testing
//!
//! Most code should depend on the [SourceHost] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod mock;
pub mod repository;

pub use mock::MockHost;
pub use repository::GitHost;

use async_trait::async_trait;

use crate::error::Result;

/// Read-only access to files on a branch of the hosted repository.
///
/// All implementors must be `Send + Sync` so a strategy holding one can be
/// driven from an async runtime. Both operations are I/O suspension points;
/// no retry or timeout policy lives at this layer.
#[async_trait]
pub trait SourceHost: Send + Sync {
    /// Fetch the contents of one file on a branch.
    ///
    /// # Arguments
    /// * `path` - File path relative to the repository root
    /// * `branch` - Branch name (e.g. "main")
    ///
    /// # Returns
    /// * `Ok(String)` - The file contents
    /// * `Err(ReleaseError::FileNotFound)` - If no such file exists on the
    ///   branch; any other failure is passed through unchanged
    async fn get_file_contents(&self, path: &str, branch: &str) -> Result<String>;

    /// Find all files with the given filename on a branch, under a root path.
    ///
    /// # Arguments
    /// * `filename` - Exact file name to match (e.g. "pom.xml")
    /// * `branch` - Branch name
    /// * `root` - Directory to search under; empty or "." means the
    ///   repository root
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Matching paths relative to the repository root
    async fn find_files_by_filename(
        &self,
        filename: &str,
        branch: &str,
        root: &str,
    ) -> Result<Vec<String>>;
}

/// Normalizes a search root into a path prefix ("" for the repository root).
pub(crate) fn root_prefix(root: &str) -> String {
    let trimmed = root.trim_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        String::new()
    } else {
        format!("{}/", trimmed)
    }
}

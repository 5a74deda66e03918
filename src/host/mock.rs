use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{ReleaseError, Result};
use crate::host::{root_prefix, SourceHost};

/// Mock source host for testing without a real repository.
///
/// Files are keyed by branch and path; fetches are counted so tests can
/// assert the fetch-at-most-once contract of the registry access.
pub struct MockHost {
    files: HashMap<String, HashMap<String, String>>,
    fetches: AtomicUsize,
}

impl MockHost {
    /// Create a new empty mock host
    pub fn new() -> Self {
        MockHost {
            files: HashMap::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Add a file on a branch
    pub fn add_file(
        &mut self,
        branch: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.files
            .entry(branch.into())
            .or_default()
            .insert(path.into(), content.into());
    }

    /// Number of `get_file_contents` calls served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceHost for MockHost {
    async fn get_file_contents(&self, path: &str, branch: &str) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(branch)
            .and_then(|files| files.get(path))
            .cloned()
            .ok_or_else(|| ReleaseError::FileNotFound(path.to_string()))
    }

    async fn find_files_by_filename(
        &self,
        filename: &str,
        branch: &str,
        root: &str,
    ) -> Result<Vec<String>> {
        let Some(files) = self.files.get(branch) else {
            return Ok(Vec::new());
        };

        let prefix = root_prefix(root);
        let mut paths: Vec<String> = files
            .keys()
            .filter(|path| {
                path.rsplit('/').next() == Some(filename)
                    && (prefix.is_empty() || path.starts_with(&prefix))
            })
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; discovery order must not be
        paths.sort();
        Ok(paths)
    }
}

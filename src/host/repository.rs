use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use git2::{BranchType, ObjectType, TreeWalkMode, TreeWalkResult};

use crate::domain::Version;
use crate::error::{ReleaseError, Result};
use crate::host::{root_prefix, SourceHost};

/// Source host backed by a local git clone via the `git2` crate.
///
/// All lookups read committed state on a branch, never the working tree.
/// `git2::Repository` is not `Sync`, so it sits behind a mutex; operations
/// hold the lock only for the duration of one call.
pub struct GitHost {
    repo: Mutex<git2::Repository>,
}

impl GitHost {
    /// Opens the repository at (or above) the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(path)?;
        Ok(GitHost {
            repo: Mutex::new(repo),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, git2::Repository>> {
        self.repo
            .lock()
            .map_err(|_| ReleaseError::host("git repository lock poisoned"))
    }

    fn branch_commit<'r>(
        repo: &'r git2::Repository,
        branch: &str,
    ) -> Result<git2::Commit<'r>> {
        match repo.find_branch(branch, BranchType::Local) {
            Ok(b) => Ok(b.into_reference().peel_to_commit()?),
            Err(_) => Ok(repo.revparse_single(branch)?.peel_to_commit()?),
        }
    }

    /// The highest tag that parses as a semantic version, if any.
    pub fn latest_version_tag(&self) -> Result<Option<String>> {
        let repo = self.lock()?;
        let names = repo.tag_names(None)?;

        let mut best: Option<(Version, String)> = None;
        for name in names.iter().flatten() {
            if let Ok(version) = Version::parse(name) {
                let better = best.as_ref().map(|(v, _)| version > *v).unwrap_or(true);
                if better {
                    best = Some((version, name.to_string()));
                }
            }
        }
        Ok(best.map(|(_, name)| name))
    }

    /// Commits on a branch since a ref (exclusive), oldest first.
    ///
    /// Returns `(sha, full message)` pairs ready for the conventional-commit
    /// parser. With `since` unset the whole branch history is returned.
    pub fn commits_since(
        &self,
        branch: &str,
        since: Option<&str>,
    ) -> Result<Vec<(String, String)>> {
        let repo = self.lock()?;
        let head = Self::branch_commit(&repo, branch)?;

        let mut revwalk = repo.revwalk()?;
        revwalk.push(head.id())?;
        if let Some(reference) = since {
            let boundary = repo.revparse_single(reference)?.peel_to_commit()?;
            revwalk.hide(boundary.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = repo.find_commit(oid)?;
            let message = commit.message().unwrap_or("").to_string();
            commits.push((oid.to_string(), message));
        }

        // revwalk yields newest first
        commits.reverse();
        Ok(commits)
    }
}

#[async_trait]
impl SourceHost for GitHost {
    async fn get_file_contents(&self, path: &str, branch: &str) -> Result<String> {
        let repo = self.lock()?;
        let tree = Self::branch_commit(&repo, branch)?.tree()?;

        let entry = match tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                return Err(ReleaseError::FileNotFound(path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let object = entry.to_object(&repo)?;
        let blob = object
            .as_blob()
            .ok_or_else(|| ReleaseError::host(format!("'{}' is not a regular file", path)))?;
        String::from_utf8(blob.content().to_vec())
            .map_err(|_| ReleaseError::host(format!("'{}' is not valid UTF-8", path)))
    }

    async fn find_files_by_filename(
        &self,
        filename: &str,
        branch: &str,
        root: &str,
    ) -> Result<Vec<String>> {
        let repo = self.lock()?;
        let tree = Self::branch_commit(&repo, branch)?.tree()?;
        let prefix = root_prefix(root);

        let mut matches = Vec::new();
        tree.walk(TreeWalkMode::PreOrder, |dir, entry| {
            if entry.kind() == Some(ObjectType::Blob) && entry.name() == Some(filename) {
                let path = format!("{}{}", dir, filename);
                if prefix.is_empty() || path.starts_with(&prefix) {
                    matches.push(path);
                }
            }
            TreeWalkResult::Ok
        })?;

        Ok(matches)
    }
}

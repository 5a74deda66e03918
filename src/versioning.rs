//! Pluggable versioning strategies mapping commit history onto version bumps.

use crate::domain::{ConventionalCommit, Version};

/// First recorded version for an artifact with no prior release.
///
/// Seeded at 0.1.0 by convention: never 0.0.0 (would imply no release at
/// all) nor 1.0.0 (would imply pre-existing stability).
pub fn initial_version() -> Version {
    Version::new(0, 1, 0)
}

/// Encapsulates the rules deriving the next version from the current one and
/// the commits since the last release.
pub trait Versioning: Send + Sync {
    fn bump(&self, current: &Version, commits: &[ConventionalCommit]) -> Version;
}

/// Conventional-commit bump rules: breaking changes bump major, features
/// bump minor, fixes bump patch, and a history with no qualifying commit
/// leaves the version unchanged.
#[derive(Debug, Default)]
pub struct DefaultVersioning;

impl Versioning for DefaultVersioning {
    fn bump(&self, current: &Version, commits: &[ConventionalCommit]) -> Version {
        let mut has_features = false;
        let mut has_fixes = false;

        for commit in commits {
            if commit.breaking {
                return current.bump_major();
            }

            match commit.r#type.as_str() {
                "feat" | "feature" => has_features = true,
                "fix" | "perf" | "refactor" => has_fixes = true,
                _ => {}
            }
        }

        if has_features {
            current.bump_minor()
        } else if has_fixes {
            current.bump_patch()
        } else {
            current.clone()
        }
    }
}

/// Versioning for intermediate builds: next patch with the SNAPSHOT
/// qualifier, independent of commit content.
#[derive(Debug, Default)]
pub struct SnapshotVersioning;

impl Versioning for SnapshotVersioning {
    fn bump(&self, current: &Version, _commits: &[ConventionalCommit]) -> Version {
        current.bump_patch().as_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commit::ensure_non_empty;

    fn commit_of(r#type: &str, breaking: bool) -> ConventionalCommit {
        ConventionalCommit {
            sha: "abc123".to_string(),
            r#type: r#type.to_string(),
            scope: None,
            breaking,
            message: format!("{}: something", r#type),
            notes: Vec::new(),
            files: Vec::new(),
        }
    }

    #[test]
    fn test_breaking_bumps_major() {
        let commits = vec![commit_of("feat", false), commit_of("fix", true)];
        let next = DefaultVersioning.bump(&Version::new(1, 2, 3), &commits);
        assert_eq!(next, Version::new(2, 0, 0));
    }

    #[test]
    fn test_feature_bumps_minor() {
        let commits = vec![commit_of("feat", false), commit_of("fix", false)];
        let next = DefaultVersioning.bump(&Version::new(1, 2, 3), &commits);
        assert_eq!(next, Version::new(1, 3, 0));
    }

    #[test]
    fn test_fix_bumps_patch() {
        let commits = vec![commit_of("fix", false), commit_of("docs", false)];
        let next = DefaultVersioning.bump(&Version::new(1, 2, 3), &commits);
        assert_eq!(next, Version::new(1, 2, 4));
    }

    #[test]
    fn test_no_qualifying_commit_leaves_version_unchanged() {
        let commits = vec![commit_of("docs", false), commit_of("chore", false)];
        let next = DefaultVersioning.bump(&Version::new(1, 2, 3), &commits);
        assert_eq!(next, Version::new(1, 2, 3));
    }

    #[test]
    fn test_synthetic_commit_does_not_bump() {
        let commits = ensure_non_empty(Vec::new());
        let next = DefaultVersioning.bump(&Version::new(0, 3, 0), &commits);
        assert_eq!(next, Version::new(0, 3, 0));
    }

    #[test]
    fn test_snapshot_versioning() {
        let commits = vec![commit_of("feat", true)];
        let next = SnapshotVersioning.bump(&Version::new(1, 2, 3), &commits);
        assert_eq!(next.to_string(), "1.2.4-SNAPSHOT");
    }

    #[test]
    fn test_initial_version() {
        assert_eq!(initial_version(), Version::new(0, 1, 0));
    }
}

/// Sentinel sha carried by the synthetic commit; impossible as a real object id
pub const SYNTHETIC_COMMIT_SHA: &str = "0000000000000000000000000000000000000000";

/// Commit type of the synthetic commit injected for empty histories
pub const SYNTHETIC_COMMIT_TYPE: &str = "fake";

/// Note title of the maintainer-authored promotion override
pub const PROMOTION_NOTE_TITLE: &str = "RELEASE AS";

/// Note text of the promotion override
pub const PROMOTION_VERSION: &str = "1.0.0";

/// Structured note attached to a commit body (e.g. "BREAKING CHANGE: ...")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub text: String,
}

/// Structured commit record driving automatic version bumps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalCommit {
    pub sha: String,
    pub r#type: String,
    pub scope: Option<String>,
    pub breaking: bool,
    pub message: String,
    pub notes: Vec<Note>,
    pub files: Vec<String>,
}

impl ConventionalCommit {
    /// The synthetic commit standing in for an empty history.
    ///
    /// Downstream bump and snapshot logic must never observe "no commits";
    /// this forces at least a baseline release to be computed instead of
    /// silently skipping the artifact.
    pub fn synthetic() -> Self {
        ConventionalCommit {
            sha: SYNTHETIC_COMMIT_SHA.to_string(),
            r#type: SYNTHETIC_COMMIT_TYPE.to_string(),
            scope: None,
            breaking: false,
            message: String::new(),
            notes: Vec::new(),
            files: Vec::new(),
        }
    }
}

/// Guarantees a non-empty commit set before bumping.
///
/// An empty input yields exactly one synthetic commit; otherwise the input
/// is returned unchanged.
pub fn ensure_non_empty(commits: Vec<ConventionalCommit>) -> Vec<ConventionalCommit> {
    if commits.is_empty() {
        vec![ConventionalCommit::synthetic()]
    } else {
        commits
    }
}

fn is_promotion_note(note: &Note) -> bool {
    note.title == PROMOTION_NOTE_TITLE && note.text == PROMOTION_VERSION
}

/// True iff the commit carries the explicit "promote to 1.0.0" override note.
pub fn is_promotion_commit(commit: &ConventionalCommit) -> bool {
    commit.notes.iter().any(is_promotion_note)
}

/// Copies of the commits with promotion notes removed.
///
/// The override must not also be reinterpreted by the generic bump strategy
/// as an ordinary semantic signal.
pub fn strip_promotion_notes(commits: &[ConventionalCommit]) -> Vec<ConventionalCommit> {
    commits
        .iter()
        .map(|commit| {
            let mut commit = commit.clone();
            commit.notes.retain(|note| !is_promotion_note(note));
            commit
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feat_commit() -> ConventionalCommit {
        ConventionalCommit {
            sha: "abc123".to_string(),
            r#type: "feat".to_string(),
            scope: Some("auth".to_string()),
            breaking: false,
            message: "feat(auth): add login".to_string(),
            notes: Vec::new(),
            files: vec!["src/auth.rs".to_string()],
        }
    }

    fn promotion_commit() -> ConventionalCommit {
        ConventionalCommit {
            notes: vec![Note {
                title: PROMOTION_NOTE_TITLE.to_string(),
                text: PROMOTION_VERSION.to_string(),
            }],
            ..feat_commit()
        }
    }

    #[test]
    fn test_ensure_non_empty_injects_synthetic() {
        let commits = ensure_non_empty(Vec::new());
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].sha, SYNTHETIC_COMMIT_SHA);
        assert_eq!(commits[0].r#type, SYNTHETIC_COMMIT_TYPE);
        assert!(commits[0].notes.is_empty());
        assert!(commits[0].files.is_empty());
        assert!(!commits[0].breaking);
    }

    #[test]
    fn test_ensure_non_empty_passthrough() {
        let input = vec![feat_commit(), promotion_commit()];
        let output = ensure_non_empty(input.clone());
        assert_eq!(output, input);
    }

    #[test]
    fn test_promotion_detection() {
        assert!(is_promotion_commit(&promotion_commit()));
        assert!(!is_promotion_commit(&feat_commit()));
    }

    #[test]
    fn test_promotion_requires_exact_note() {
        let mut commit = feat_commit();
        commit.notes.push(Note {
            title: PROMOTION_NOTE_TITLE.to_string(),
            text: "2.0.0".to_string(),
        });
        assert!(!is_promotion_commit(&commit));
    }

    #[test]
    fn test_strip_promotion_notes() {
        let mut commit = promotion_commit();
        commit.notes.push(Note {
            title: "BREAKING CHANGE".to_string(),
            text: "api redesign".to_string(),
        });

        let stripped = strip_promotion_notes(&[commit]);
        assert_eq!(stripped[0].notes.len(), 1);
        assert_eq!(stripped[0].notes[0].title, "BREAKING CHANGE");
    }
}

use regex::Regex;

use crate::domain::{ConventionalCommit, Note};

/// Parse a raw commit message into a structured commit record.
///
/// Supported header formats:
/// - `type(scope)!: description`
/// - `type(scope): description`
/// - `type!: description`
/// - `type: description`
/// - non-conventional text (falls back to type "chore")
///
/// A `BREAKING CHANGE:` marker in the body sets the breaking flag and is
/// captured as a note. A `Release-As: <version>` footer (any case) is
/// normalized into a `RELEASE AS` note, the override signal the promotion
/// protocol looks for.
pub fn parse_commit(sha: &str, message: &str) -> ConventionalCommit {
    let (r#type, scope, mut breaking) = parse_header(message);
    let notes = parse_notes(message);

    if notes.iter().any(|note| note.title == "BREAKING CHANGE") {
        breaking = true;
    }

    ConventionalCommit {
        sha: sha.to_string(),
        r#type,
        scope,
        breaking,
        message: message.to_string(),
        notes,
        files: Vec::new(),
    }
}

fn parse_header(message: &str) -> (String, Option<String>, bool) {
    // Try format: type(scope)!: description
    if let Some(captures) = Regex::new(r"^([a-z]+)\(([^)]+)\)(!?):\s*")
        .ok()
        .and_then(|re| re.captures(message))
    {
        let r#type = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let scope = captures.get(2).map(|m| m.as_str().to_string());
        let breaking = captures.get(3).map(|m| m.as_str()) == Some("!");
        return (r#type, scope, breaking);
    }

    // Try format: type!: description
    if let Some(captures) = Regex::new(r"^([a-z]+)!:\s*")
        .ok()
        .and_then(|re| re.captures(message))
    {
        let r#type = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        return (r#type, None, true);
    }

    // Try format: type: description
    if let Some(captures) = Regex::new(r"^([a-z]+):\s*")
        .ok()
        .and_then(|re| re.captures(message))
    {
        let r#type = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        return (r#type, None, false);
    }

    // Default: non-conventional commit
    ("chore".to_string(), None, false)
}

fn parse_notes(message: &str) -> Vec<Note> {
    let mut notes = Vec::new();
    let release_as = Regex::new(r"(?i)^release-as:\s*(.+)$").ok();

    for line in message.lines() {
        if let Some(text) = line.strip_prefix("BREAKING CHANGE:") {
            notes.push(Note {
                title: "BREAKING CHANGE".to_string(),
                text: text.trim().to_string(),
            });
            continue;
        }

        if let Some(captures) = release_as.as_ref().and_then(|re| re.captures(line)) {
            if let Some(version) = captures.get(1) {
                notes.push(Note {
                    title: "RELEASE AS".to_string(),
                    text: version.as_str().trim().to_string(),
                });
            }
        }
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_scope() {
        let commit = parse_commit("abc123", "feat(auth): add login");
        assert_eq!(commit.r#type, "feat");
        assert_eq!(commit.scope, Some("auth".to_string()));
        assert!(!commit.breaking);
        assert!(commit.notes.is_empty());
    }

    #[test]
    fn test_parse_with_breaking_marker() {
        let commit = parse_commit("abc123", "feat(auth)!: redesign login");
        assert_eq!(commit.r#type, "feat");
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_breaking_without_scope() {
        let commit = parse_commit("abc123", "refactor!: drop old api");
        assert_eq!(commit.r#type, "refactor");
        assert_eq!(commit.scope, None);
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_breaking_change_footer() {
        let commit = parse_commit("abc123", "fix: something\n\nBREAKING CHANGE: desc");
        assert!(commit.breaking);
        assert_eq!(commit.notes.len(), 1);
        assert_eq!(commit.notes[0].title, "BREAKING CHANGE");
        assert_eq!(commit.notes[0].text, "desc");
    }

    #[test]
    fn test_parse_release_as_footer() {
        let commit = parse_commit("abc123", "chore: prepare stable line\n\nRelease-As: 1.0.0");
        assert_eq!(commit.notes.len(), 1);
        assert_eq!(commit.notes[0].title, "RELEASE AS");
        assert_eq!(commit.notes[0].text, "1.0.0");
    }

    #[test]
    fn test_parse_release_as_case_insensitive() {
        let commit = parse_commit("abc123", "chore: promote\n\nRELEASE-AS: 1.0.0");
        assert_eq!(commit.notes[0].title, "RELEASE AS");
    }

    #[test]
    fn test_parse_non_conventional() {
        let commit = parse_commit("abc123", "Random commit message");
        assert_eq!(commit.r#type, "chore");
        assert!(!commit.breaking);
    }
}

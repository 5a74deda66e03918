//! User-facing output formatting for the CLI.
//!
//! Pure display functions separated from orchestration; everything here
//! prints and returns, no decisions are made.

use console::style;

use crate::domain::{commit, ConventionalCommit, Version};
use crate::registry::VersionsMap;
use crate::updater::{UpdateDescriptor, Updater};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the per-artifact version transitions of the computed release.
pub fn display_version_changes(current: &VersionsMap, next: &VersionsMap) {
    println!("\n{}", style("Version changes:").bold());
    for (key, version) in next {
        match current.get(key) {
            Some(previous) if previous != version => {
                println!(
                    "  {}: {} -> {}",
                    key,
                    style(previous).red(),
                    style(version).green()
                );
            }
            Some(previous) => {
                println!("  {}: {} (unchanged)", key, previous);
            }
            None => {
                println!("  {}: {}", key, style(version).green());
            }
        }
    }
}

/// Display the ordered update plan.
pub fn display_plan(updates: &[UpdateDescriptor]) {
    println!("\n{}", style("Planned updates:").bold());
    for (i, update) in updates.iter().enumerate() {
        let label = match &update.updater {
            Updater::VersionsManifest { .. } => "versions manifest",
            Updater::BuildMetadata { kind, .. } => kind.filename(),
            Updater::Generic { .. } => "extra file",
            Updater::Changelog { .. } => "changelog",
        };
        let creation = if update.create_if_missing {
            " (created if missing)"
        } else {
            ""
        };
        println!("  {}. {} [{}]{}", i + 1, update.path, label, creation);
    }
}

/// Render a minimal changelog entry for the release.
///
/// Synthetic commits injected for empty histories are left out; a release
/// with nothing to list still gets its version heading.
pub fn format_changelog_entry(version: &Version, commits: &[ConventionalCommit]) -> String {
    let mut entry = format!("## {}\n", version);

    for commit in commits {
        if commit.r#type == commit::SYNTHETIC_COMMIT_TYPE {
            continue;
        }
        let summary = commit.message.lines().next().unwrap_or("");
        if !summary.is_empty() {
            entry.push_str(&format!("* {}\n", summary));
        }
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commit::ensure_non_empty;

    #[test]
    fn test_changelog_entry_lists_commits() {
        let commits = vec![ConventionalCommit {
            sha: "abc123".to_string(),
            r#type: "feat".to_string(),
            scope: None,
            breaking: false,
            message: "feat: add login\n\nbody".to_string(),
            notes: Vec::new(),
            files: Vec::new(),
        }];

        let entry = format_changelog_entry(&Version::new(1, 3, 0), &commits);
        assert!(entry.starts_with("## 1.3.0\n"));
        assert!(entry.contains("* feat: add login"));
        assert!(!entry.contains("body"));
    }

    #[test]
    fn test_changelog_entry_skips_synthetic_commit() {
        let commits = ensure_non_empty(Vec::new());
        let entry = format_changelog_entry(&Version::new(0, 1, 0), &commits);
        assert_eq!(entry, "## 0.1.0\n");
    }
}

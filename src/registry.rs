//! Codec for the versions manifest, the flat `key=version` file that is the
//! source of truth for every artifact's current version.

use indexmap::IndexMap;
use tracing::warn;

use crate::domain::Version;

/// File name of the versions manifest, relative to the module root
pub const VERSIONS_MANIFEST: &str = "versions.txt";

/// Ordered mapping from artifact key to current version.
///
/// Insertion order follows manifest line order; a bump never adds or removes
/// keys, only replaces values.
pub type VersionsMap = IndexMap<String, Version>;

/// Parses manifest content into a [VersionsMap].
///
/// Blank lines and `#` comments are ignored. An entry whose version does not
/// parse is skipped with a warning rather than failing the whole manifest;
/// that artifact simply receives no update this cycle.
pub fn parse_versions(content: &str) -> VersionsMap {
    let mut versions = VersionsMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            warn!(line, "skipping malformed manifest line");
            continue;
        };

        let key = key.trim();
        match Version::parse(value.trim()) {
            Ok(version) => {
                versions.insert(key.to_string(), version);
            }
            Err(e) => {
                warn!(artifact = key, error = %e, "skipping manifest entry without a resolvable version");
            }
        }
    }

    versions
}

/// Serializes a [VersionsMap] back into manifest content, one entry per line.
pub fn serialize_versions(versions: &VersionsMap) -> String {
    let mut out = String::new();
    for (key, version) in versions {
        out.push_str(key);
        out.push('=');
        out.push_str(&version.to_string());
        out.push('\n');
    }
    out
}

/// The registry's snapshot predicate.
///
/// True iff any tracked version currently carries a pre-release/snapshot
/// qualifier, meaning the upcoming release must be produced as an
/// intermediate build rather than a final release.
pub fn needs_snapshot(content: &str) -> bool {
    parse_versions(content).values().any(Version::is_prerelease)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_versions_preserves_order() {
        let content = "util=0.4.0\ncore=1.2.3\n";
        let versions = parse_versions(content);
        let keys: Vec<&String> = versions.keys().collect();
        assert_eq!(keys, ["util", "core"]);
        assert_eq!(versions["core"], Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_versions_ignores_comments_and_blanks() {
        let content = "# managed by release tooling\n\ncore=1.0.0\n";
        let versions = parse_versions(content);
        assert_eq!(versions.len(), 1);
    }

    #[test]
    fn test_parse_versions_skips_unresolvable_entries() {
        let content = "core=1.0.0\nbroken=not-a-version\nmalformed line\nutil=0.2.0\n";
        let versions = parse_versions(content);
        assert_eq!(versions.len(), 2);
        assert!(versions.contains_key("core"));
        assert!(versions.contains_key("util"));
    }

    #[test]
    fn test_serialize_versions() {
        let mut versions = VersionsMap::new();
        versions.insert("core".to_string(), Version::new(1, 2, 3));
        versions.insert("util".to_string(), Version::parse("0.4.0-SNAPSHOT").unwrap());
        assert_eq!(
            serialize_versions(&versions),
            "core=1.2.3\nutil=0.4.0-SNAPSHOT\n"
        );
    }

    #[test]
    fn test_needs_snapshot() {
        assert!(needs_snapshot("core=1.2.3\nutil=0.4.0-SNAPSHOT\n"));
        assert!(!needs_snapshot("core=1.2.3\nutil=0.4.0\n"));
        assert!(!needs_snapshot(""));
    }
}

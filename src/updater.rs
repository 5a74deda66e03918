//! The update plan vocabulary: planned file edits handed to the external
//! edit-application system. Descriptors are produced here and never applied;
//! the `updater` field names the external text-rewriting strategy and the
//! context it needs.

use crate::domain::Version;
use crate::registry::VersionsMap;

/// The three supported build-metadata file kinds, in fixed plan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildFileKind {
    /// Dependency descriptor files (pom.xml)
    DependencyDescriptor,
    /// Build script files (build.gradle)
    BuildScript,
    /// Dependency lock files (dependencies.properties)
    DependencyLock,
}

impl BuildFileKind {
    /// Plan order is fixed by kind, not by search arrival order.
    pub const ALL: [BuildFileKind; 3] = [
        BuildFileKind::DependencyDescriptor,
        BuildFileKind::BuildScript,
        BuildFileKind::DependencyLock,
    ];

    /// The filename searched for on the target branch.
    pub fn filename(&self) -> &'static str {
        match self {
            BuildFileKind::DependencyDescriptor => "pom.xml",
            BuildFileKind::BuildScript => "build.gradle",
            BuildFileKind::DependencyLock => "dependencies.properties",
        }
    }
}

/// Reference to the external update strategy for one planned edit, together
/// with the context that strategy needs to rewrite the file.
#[derive(Debug, Clone, PartialEq)]
pub enum Updater {
    /// Rewrite of the versions manifest itself
    VersionsManifest { versions: VersionsMap },
    /// Rewrite of a discovered build-metadata file
    BuildMetadata {
        kind: BuildFileKind,
        version: Version,
        versions: VersionsMap,
        snapshot: bool,
    },
    /// Plain version-string rewrite of a statically configured extra file
    Generic { version: Version },
    /// Prepend of the rendered changelog entry
    Changelog { entry: String },
}

/// One planned file edit. Ownership transfers to the edit-application
/// system; never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDescriptor {
    pub path: String,
    pub create_if_missing: bool,
    /// Original content, when already fetched this cycle; lets the updater
    /// produce a minimal diff-style rewrite instead of regenerating the file.
    pub cached_content: Option<String>,
    pub updater: Updater,
}

impl UpdateDescriptor {
    pub fn new(path: impl Into<String>, create_if_missing: bool, updater: Updater) -> Self {
        UpdateDescriptor {
            path: path.into(),
            create_if_missing,
            cached_content: None,
            updater,
        }
    }

    pub fn with_cached_content(mut self, content: impl Into<String>) -> Self {
        self.cached_content = Some(content.into());
        self
    }
}

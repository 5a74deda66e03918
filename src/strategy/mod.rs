//! Release strategies: the capability interface a release cycle is driven
//! through, and the manifest-backed implementation.
//!
//! A strategy is composed by injection — a [crate::host::SourceHost] for
//! file access, a [crate::versioning::Versioning] for bump rules and a
//! [crate::config::Config] for the repository layout — rather than by
//! specialization.

pub mod manifest;

pub use manifest::ManifestStrategy;

use async_trait::async_trait;

use crate::domain::{ConventionalCommit, Version};
use crate::error::Result;
use crate::registry::VersionsMap;
use crate::updater::UpdateDescriptor;

/// One release cycle's worth of decisions.
///
/// The async operations fetch from the source host and memoize per
/// instance; the caller contract is one release cycle in flight per
/// instance at a time, which is why they take `&mut self`.
#[async_trait]
pub trait ReleaseStrategy {
    /// Normalize the commit set before bumping (never yields an empty set).
    fn post_process_commits(
        &self,
        commits: Vec<ConventionalCommit>,
    ) -> Vec<ConventionalCommit>;

    /// Whether the upcoming release must be an intermediate snapshot build.
    async fn needs_snapshot(&mut self) -> Result<bool>;

    /// Build the current version map from the versions registry.
    async fn build_versions_map(&mut self) -> Result<VersionsMap>;

    /// Compute the next version map from the current one and the commits.
    ///
    /// Postcondition: the key set is identical to the input key set.
    fn update_versions_map(
        &self,
        versions: VersionsMap,
        commits: &[ConventionalCommit],
    ) -> Result<VersionsMap>;

    /// Assemble the ordered update plan for the release.
    async fn build_updates(
        &mut self,
        new_version: &Version,
        versions: &VersionsMap,
        snapshot: bool,
        changelog_entry: &str,
    ) -> Result<Vec<UpdateDescriptor>>;

    /// Seed version for an artifact with no prior release.
    fn initial_release_version(&self) -> Version;
}

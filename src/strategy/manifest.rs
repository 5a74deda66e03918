use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::{Config, ExtraFile};
use crate::domain::{artifact, commit, ConventionalCommit, Version};
use crate::error::{ReleaseError, Result};
use crate::host::SourceHost;
use crate::registry::{self, VersionsMap, VERSIONS_MANIFEST};
use crate::strategy::ReleaseStrategy;
use crate::updater::{BuildFileKind, UpdateDescriptor, Updater};
use crate::versioning::{self, Versioning};

/// Release strategy for projects tracking artifact versions in a flat
/// versions manifest at the module root.
///
/// Holds the raw manifest content memoized for the lifetime of one release
/// cycle: the first access fetches it from the source host, later accesses
/// reuse the cached value. An instance must not be shared across concurrent
/// release cycles.
pub struct ManifestStrategy {
    config: Config,
    host: Arc<dyn SourceHost>,
    versioning: Box<dyn Versioning>,
    versions_content: Option<String>,
}

impl ManifestStrategy {
    /// Strategy name used in diagnostics and addressed errors
    pub const NAME: &'static str = "manifest";

    pub fn new(config: Config, host: Arc<dyn SourceHost>, versioning: Box<dyn Versioning>) -> Self {
        ManifestStrategy {
            config,
            host,
            versioning,
            versions_content: None,
        }
    }

    /// Swap the bump rules, e.g. for a snapshot cycle.
    pub fn set_versioning(&mut self, versioning: Box<dyn Versioning>) {
        self.versioning = versioning;
    }

    /// Resolved manifest path on the target branch.
    pub fn manifest_path(&self) -> String {
        let root = self.config.module_root.trim_matches('/');
        if root.is_empty() || root == "." {
            VERSIONS_MANIFEST.to_string()
        } else {
            format!("{}/{}", root, VERSIONS_MANIFEST)
        }
    }

    /// The raw versions-manifest content, fetched at most once per instance.
    ///
    /// A missing manifest is translated into the addressed
    /// [ReleaseError::MissingRequiredFile]; any other fetch failure
    /// propagates unchanged.
    pub async fn versions_content(&mut self) -> Result<&str> {
        if self.versions_content.is_none() {
            let path = self.manifest_path();
            let content = match self
                .host
                .get_file_contents(&path, &self.config.target_branch)
                .await
            {
                Ok(content) => content,
                Err(e) if e.is_not_found() => {
                    return Err(ReleaseError::missing_required_file(
                        path,
                        Self::NAME,
                        &self.config.repository,
                    ));
                }
                Err(e) => return Err(e),
            };
            debug!(path = %path, "fetched versions manifest");
            self.versions_content = Some(content);
        }

        Ok(self.versions_content.as_deref().unwrap_or_default())
    }
}

#[async_trait]
impl ReleaseStrategy for ManifestStrategy {
    fn post_process_commits(
        &self,
        commits: Vec<ConventionalCommit>,
    ) -> Vec<ConventionalCommit> {
        commit::ensure_non_empty(commits)
    }

    async fn needs_snapshot(&mut self) -> Result<bool> {
        if self.config.skip_snapshot {
            return Ok(false);
        }
        let content = self.versions_content().await?;
        Ok(registry::needs_snapshot(content))
    }

    async fn build_versions_map(&mut self) -> Result<VersionsMap> {
        let content = self.versions_content().await?;
        Ok(registry::parse_versions(content))
    }

    fn update_versions_map(
        &self,
        mut versions: VersionsMap,
        commits: &[ConventionalCommit],
    ) -> Result<VersionsMap> {
        let is_promotion = commits.iter().any(commit::is_promotion_commit);
        let modified = commit::strip_promotion_notes(commits);

        let keys: Vec<String> = versions.keys().cloned().collect();
        for key in keys {
            let Some(current) = versions.get(&key).cloned() else {
                warn!(artifact = %key, "no current version recorded, skipping for this cycle");
                continue;
            };

            let next = if is_promotion && artifact::is_stable_artifact(&key) {
                Version::new(1, 0, 0)
            } else {
                self.versioning.bump(&current, &modified)
            };
            versions.insert(key, next);
        }

        Ok(versions)
    }

    async fn build_updates(
        &mut self,
        new_version: &Version,
        versions: &VersionsMap,
        snapshot: bool,
        changelog_entry: &str,
    ) -> Result<Vec<UpdateDescriptor>> {
        let manifest_path = self.manifest_path();
        let manifest_content = self.versions_content().await?.to_string();

        // The registry leads the plan; carrying its original content lets
        // the updater rewrite it as a minimal diff.
        let mut updates = vec![UpdateDescriptor::new(
            manifest_path,
            false,
            Updater::VersionsManifest {
                versions: versions.clone(),
            },
        )
        .with_cached_content(manifest_content)];

        let branch = &self.config.target_branch;
        let root = &self.config.module_root;
        let [descriptors, scripts, locks] = BuildFileKind::ALL;
        let (descriptor_paths, script_paths, lock_paths) = tokio::join!(
            self.host
                .find_files_by_filename(descriptors.filename(), branch, root),
            self.host
                .find_files_by_filename(scripts.filename(), branch, root),
            self.host
                .find_files_by_filename(locks.filename(), branch, root),
        );

        // Append order is fixed by kind, not by search arrival order.
        for (kind, found) in [
            (descriptors, descriptor_paths?),
            (scripts, script_paths?),
            (locks, lock_paths?),
        ] {
            for path in found {
                updates.push(UpdateDescriptor::new(
                    path,
                    false,
                    Updater::BuildMetadata {
                        kind,
                        version: new_version.clone(),
                        versions: versions.clone(),
                        snapshot,
                    },
                ));
            }
        }

        for extra in &self.config.extra_files {
            match extra {
                ExtraFile::Path(path) => {
                    updates.push(UpdateDescriptor::new(
                        path.clone(),
                        false,
                        Updater::Generic {
                            version: new_version.clone(),
                        },
                    ));
                }
                ExtraFile::Descriptor { r#type, path } => {
                    debug!(kind = %r#type, path = %path, "skipping structured extra-file entry");
                }
            }
        }

        if !snapshot && !self.config.skip_changelog {
            updates.push(UpdateDescriptor::new(
                self.config.changelog_path.clone(),
                true,
                Updater::Changelog {
                    entry: changelog_entry.to_string(),
                },
            ));
        }

        Ok(updates)
    }

    fn initial_release_version(&self) -> Version {
        versioning::initial_version()
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

/// Represents the complete configuration for release-plan.
///
/// Describes where the release lives (repository, module root, target
/// branch) and how the update plan is shaped (changelog, extra files,
/// snapshot handling).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Repository identifier used in diagnostics (e.g. "owner/name")
    #[serde(default)]
    pub repository: String,

    /// Directory within the repository the release is rooted at; empty
    /// means the repository root
    #[serde(default)]
    pub module_root: String,

    #[serde(default = "default_target_branch")]
    pub target_branch: String,

    #[serde(default = "default_changelog_path")]
    pub changelog_path: String,

    /// Suppress changelog generation entirely
    #[serde(default)]
    pub skip_changelog: bool,

    /// Disable snapshot handling; the release is always treated as final
    #[serde(default)]
    pub skip_snapshot: bool,

    /// Additional files to include in every update plan
    #[serde(default)]
    pub extra_files: Vec<ExtraFile>,
}

/// An extra-file entry: either a plain path, or a structured descriptor.
///
/// Only plain paths take part in plan building; structured descriptors are
/// recognized so they can be explicitly skipped rather than misread.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ExtraFile {
    Path(String),
    Descriptor { r#type: String, path: String },
}

fn default_target_branch() -> String {
    "main".to_string()
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository: String::new(),
            module_root: String::new(),
            target_branch: default_target_branch(),
            changelog_path: default_changelog_path(),
            skip_changelog: false,
            skip_snapshot: false,
            extra_files: Vec::new(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-plan.toml` in the current directory
/// 3. `release-plan.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./release-plan.toml").exists() {
        fs::read_to_string("./release-plan.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("release-plan.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| ReleaseError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.target_branch, "main");
        assert_eq!(config.changelog_path, "CHANGELOG.md");
        assert!(!config.skip_changelog);
        assert!(!config.skip_snapshot);
        assert!(config.extra_files.is_empty());
    }

    #[test]
    fn test_parse_extra_file_variants() {
        let config: Config = toml::from_str(
            r#"
repository = "acme/widgets"
extra_files = ["README.md", { type = "xml", path = "pom-parent.xml" }]
"#,
        )
        .unwrap();

        assert_eq!(
            config.extra_files,
            vec![
                ExtraFile::Path("README.md".to_string()),
                ExtraFile::Descriptor {
                    r#type: "xml".to_string(),
                    path: "pom-parent.xml".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("module_root = \"java\"").unwrap();
        assert_eq!(config.module_root, "java");
        assert_eq!(config.target_branch, "main");
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::{ReleaseError, Result};

/// Pre-release qualifier marking an intermediate build
pub const SNAPSHOT_QUALIFIER: &str = "SNAPSHOT";

/// Semantic version value with an optional pre-release qualifier.
///
/// Wraps [semver::Version] so the crate owns parsing, formatting and the
/// bump helpers the versioning strategies need.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    /// Creates a new release version with no pre-release qualifier.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version(semver::Version::new(major, minor, patch))
    }

    /// Parse a version from text (e.g. "1.2.3" or "1.2.3-SNAPSHOT").
    ///
    /// Tolerates a leading 'v' or 'V' prefix as found in git tags.
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text.trim().trim_start_matches('v').trim_start_matches('V');
        semver::Version::parse(clean)
            .map(Version)
            .map_err(|e| ReleaseError::version(format!("invalid version '{}': {}", text, e)))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// The pre-release qualifier, empty for a final release version.
    pub fn prerelease(&self) -> &str {
        self.0.pre.as_str()
    }

    /// Whether this version carries a pre-release/snapshot qualifier.
    pub fn is_prerelease(&self) -> bool {
        !self.0.pre.is_empty()
    }

    /// Next major version; clears the pre-release qualifier.
    pub fn bump_major(&self) -> Self {
        Version(semver::Version::new(self.0.major + 1, 0, 0))
    }

    /// Next minor version; clears the pre-release qualifier.
    pub fn bump_minor(&self) -> Self {
        Version(semver::Version::new(self.0.major, self.0.minor + 1, 0))
    }

    /// Next patch version; clears the pre-release qualifier.
    pub fn bump_patch(&self) -> Self {
        Version(semver::Version::new(self.0.major, self.0.minor, self.0.patch + 1))
    }

    /// The same version carrying the SNAPSHOT qualifier.
    pub fn as_snapshot(&self) -> Self {
        let mut inner = self.0.clone();
        inner.pre =
            semver::Prerelease::new(SNAPSHOT_QUALIFIER).unwrap_or(semver::Prerelease::EMPTY);
        Version(inner)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

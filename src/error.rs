use thiserror::Error;

/// Unified error type for release-plan operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("required file '{path}' not found for strategy '{strategy}' in repository '{repository}'")]
    MissingRequiredFile {
        path: String,
        strategy: String,
        repository: String,
    },

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source host error: {0}")]
    Host(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-plan
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a source host error with context
    pub fn host(msg: impl Into<String>) -> Self {
        ReleaseError::Host(msg.into())
    }

    /// Create the addressed "required file missing" error for a strategy
    pub fn missing_required_file(
        path: impl Into<String>,
        strategy: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        ReleaseError::MissingRequiredFile {
            path: path.into(),
            strategy: strategy.into(),
            repository: repository.into(),
        }
    }

    /// Whether this is the raw not-found signal from the source host
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReleaseError::FileNotFound(_))
    }
}

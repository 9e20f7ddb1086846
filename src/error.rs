use thiserror::Error;

/// Unified error type for commit-kit operations
///
/// Malformed commit messages are never reported through this type; they
/// surface as validation errors instead.
#[derive(Error, Debug)]
pub enum CommitKitError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in commit-kit
pub type Result<T> = std::result::Result<T, CommitKitError>;

impl CommitKitError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CommitKitError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        CommitKitError::Version(msg.into())
    }

    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        CommitKitError::Usage(msg.into())
    }
}

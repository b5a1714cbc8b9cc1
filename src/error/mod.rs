//! Error types for kscale

use thiserror::Error;

/// Main error type for kscale
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Deployment not found: {namespace}/{name}")]
    NotFound { namespace: String, name: String },

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{failed} of {processed} deployments failed to scale")]
    BatchFailed { failed: usize, processed: usize },
}

impl From<serde_json::Error> for ScaleError {
    fn from(e: serde_json::Error) -> Self {
        ScaleError::Serialization(e.to_string())
    }
}

/// Result type alias for kscale
pub type Result<T> = std::result::Result<T, ScaleError>;

//! Error types for source discovery and database generation

use std::fmt;
use std::path::PathBuf;

/// Failures while walking a source tree
#[derive(Debug, Clone)]
pub struct DiscoveryError {
    pub message: String,
    pub path: PathBuf,
}

impl DiscoveryError {
    pub fn new(message: String, path: PathBuf) -> Self {
        Self { message, path }
    }

    pub fn missing_directory(path: PathBuf) -> Self {
        Self::new("source directory does not exist".to_string(), path)
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.path.display())
    }
}

impl std::error::Error for DiscoveryError {}

/// Failure categories outside of discovery
#[derive(Debug, thiserror::Error)]
pub enum GenerateErrorKind {
    #[error("Failed to write {}: {message}", .path.display())]
    Write { message: String, path: PathBuf },

    #[error("JSON serialization error: {message}")]
    Serialize { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl GenerateErrorKind {
    pub fn write(message: String, path: PathBuf) -> Self {
        Self::Write { message, path }
    }

    pub fn serialize(message: String) -> Self {
        Self::Serialize { message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for generation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("{kind}")]
    Generate {
        kind: GenerateErrorKind,
        source: Option<anyhow::Error>,
    },
}

impl GenerateError {
    pub fn generate(kind: GenerateErrorKind) -> Self {
        Self::Generate { kind, source: None }
    }

    pub fn generate_with_source(kind: GenerateErrorKind, source: anyhow::Error) -> Self {
        Self::Generate {
            kind,
            source: Some(source),
        }
    }

    pub fn kind(&self) -> Option<&GenerateErrorKind> {
        match self {
            Self::Generate { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Discovery(err) => format!("Source discovery failed: {}", err),
            Self::Generate { kind, source } => match (kind, source) {
                (GenerateErrorKind::Write { .. }, _) => {
                    format!("{} (check permissions and that the parent directory exists)", kind)
                }
                (_, Some(source)) => format!("{}: {}", kind, source),
                (_, None) => kind.to_string(),
            },
        }
    }
}

/// Result type for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Result type for discovery operations
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

//! Error types for phaseswarm-core

use thiserror::Error;

/// Result type alias using phaseswarm-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for PhaseSwarm
#[derive(Error, Debug)]
pub enum Error {
    /// Registry file exists but is not a valid JSON object
    #[error("Registry file is corrupted: {path}: {message}")]
    CorruptRegistry { path: String, message: String },

    /// Bundled command template is missing from its source
    #[error("Source file not found: {path}")]
    TemplateNotFound { name: String, path: String },

    /// Post-install verification found missing files
    #[error("Installation incomplete, missing: {missing}")]
    InstallIncomplete { missing: String },

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// Path is not valid UTF-8
    #[error("Path is not valid UTF-8: {path}")]
    NonUtf8Path { path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a corrupt registry error
    pub fn corrupt_registry(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptRegistry {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create an install incomplete error from the list of missing paths
    pub fn install_incomplete(missing: Vec<String>) -> Self {
        Self::InstallIncomplete {
            missing: missing.join(", "),
        }
    }

    /// Remediation hint shown to the user alongside the error, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CorruptRegistry { .. } => Some("Recreate with: phaseswarm init"),
            Self::TemplateNotFound { .. } => Some("Package may be corrupted. Try reinstalling."),
            Self::InstallIncomplete { .. } => Some("Please check errors above."),
            _ => None,
        }
    }
}

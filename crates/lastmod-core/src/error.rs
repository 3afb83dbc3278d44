//! Error types and exit codes for lastmod
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/vault error (missing document, invalid frontmatter, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/vault error - missing document, invalid frontmatter (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur outside the pure engine
#[derive(Error, Debug)]
pub enum LastmodError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/vault errors (exit code 3)
    #[error("vault root not found: {root:?}")]
    VaultNotFound { root: PathBuf },

    #[error("document not found: {path:?}")]
    DocumentNotFound { path: PathBuf },

    #[error("invalid frontmatter in {path:?}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    #[error("path {path:?} is outside the vault at {root:?}")]
    OutsideVault { path: PathBuf, root: PathBuf },

    #[error("config already exists: {path:?}")]
    ConfigExists { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl LastmodError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        LastmodError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        LastmodError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LastmodError::UsageError(_)
            | LastmodError::InvalidValue { .. } => ExitCode::Usage,

            LastmodError::VaultNotFound { .. }
            | LastmodError::DocumentNotFound { .. }
            | LastmodError::InvalidFrontmatter { .. }
            | LastmodError::OutsideVault { .. }
            | LastmodError::ConfigExists { .. } => ExitCode::Data,

            LastmodError::Io(_)
            | LastmodError::Yaml(_)
            | LastmodError::Json(_)
            | LastmodError::Toml(_)
            | LastmodError::FailedOperationWithTarget { .. }
            | LastmodError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            LastmodError::UsageError(_) => "usage_error",
            LastmodError::InvalidValue { .. } => "invalid_value",
            LastmodError::VaultNotFound { .. } => "vault_not_found",
            LastmodError::DocumentNotFound { .. } => "document_not_found",
            LastmodError::InvalidFrontmatter { .. } => "invalid_frontmatter",
            LastmodError::OutsideVault { .. } => "outside_vault",
            LastmodError::ConfigExists { .. } => "config_exists",
            LastmodError::Io(_) => "io_error",
            LastmodError::Yaml(_) => "yaml_error",
            LastmodError::Json(_) => "json_error",
            LastmodError::Toml(_) => "toml_error",
            LastmodError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            LastmodError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for lastmod operations
pub type Result<T> = std::result::Result<T, LastmodError>;

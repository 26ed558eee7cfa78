//! CLI-specific error types
//!
//! Every CLI error terminates the invocation with a non-zero exit.

use std::fmt;
use std::io;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// List file I/O error
    IoError,
    /// List file already exists
    AlreadyInitialized,
    /// Registry file error
    RegistryError,
    /// Identifier did not normalize
    InvalidId,
    /// Store refused the mutation
    Rejected,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "VEIL_CLI_CONFIG_ERROR",
            Self::IoError => "VEIL_CLI_IO_ERROR",
            Self::AlreadyInitialized => "VEIL_CLI_ALREADY_INITIALIZED",
            Self::RegistryError => "VEIL_CLI_REGISTRY_ERROR",
            Self::InvalidId => "VEIL_CLI_INVALID_ID",
            Self::Rejected => "VEIL_CLI_REJECTED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// List file already exists
    pub fn already_initialized(path: &str) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("Hidden-block list already exists: {}", path),
        )
    }

    /// Registry file error
    pub fn registry_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::RegistryError, msg)
    }

    /// Identifier did not normalize
    pub fn invalid_id(raw: &str) -> Self {
        Self::new(
            CliErrorCode::InvalidId,
            format!("Not a valid identifier: '{}'", raw),
        )
    }

    /// Store refused the mutation
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::Rejected, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("JSON error: {}", e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::io_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

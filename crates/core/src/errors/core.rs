use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core error type shared by the kiln crates
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown key '{key}' in table '{table}' (available: {})", .available.join(", "))]
    UnknownKey {
        table: String,
        key: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CoreError {
    /// Create a new unknown key error
    pub fn unknown_key(
        table: impl Into<String>,
        key: impl Into<String>,
        available: Vec<String>,
    ) -> Self {
        Self::UnknownKey {
            table: table.into(),
            key: key.into(),
            available,
        }
    }

    /// Check if the error is an unknown key error
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownKey { .. })
    }

    /// Check if the error is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Machine-readable error summary, used by the CLI's JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
    pub hint: Option<String>,
}

impl ErrorReport {
    /// Create a new error report
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Add a hint to the report
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<&CoreError> for ErrorReport {
    fn from(error: &CoreError) -> Self {
        match error {
            CoreError::UnknownKey { available, .. } => {
                Self::new("UNKNOWN_KEY", error.to_string())
                    .with_hint(format!("Use one of: {}", available.join(", ")))
            }
            CoreError::Config(_) => Self::new("CONFIG_ERROR", error.to_string()),
        }
    }
}

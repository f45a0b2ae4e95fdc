//! Build error types

use kiln_core::ErrorReport;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildError>;

/// Settable fields of a [`crate::Computer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputerField {
    Cpu,
    Gpu,
    Ram,
    Storage,
    Motherboard,
    Ssd,
    WiFi,
}

impl ComputerField {
    /// Lowercase identifier, stable for machine-readable output
    pub fn as_key(&self) -> &'static str {
        match self {
            ComputerField::Cpu => "cpu",
            ComputerField::Gpu => "gpu",
            ComputerField::Ram => "ram",
            ComputerField::Storage => "storage",
            ComputerField::Motherboard => "motherboard",
            ComputerField::Ssd => "ssd",
            ComputerField::WiFi => "wifi",
        }
    }
}

impl fmt::Display for ComputerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComputerField::Cpu => "CPU",
            ComputerField::Gpu => "GPU",
            ComputerField::Ram => "RAM",
            ComputerField::Storage => "Storage",
            ComputerField::Motherboard => "Motherboard",
            ComputerField::Ssd => "SSD",
            ComputerField::WiFi => "WiFi",
        };
        f.write_str(label)
    }
}

/// Reasons a builder refuses to produce a value
///
/// Validation stops at the first failing rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{field} is required")]
    MissingRequiredField { field: ComputerField },

    #[error("{field} {constraint}")]
    InvalidFieldValue {
        field: ComputerField,
        constraint: String,
    },
}

impl BuildError {
    pub fn missing(field: ComputerField) -> Self {
        Self::MissingRequiredField { field }
    }

    pub fn invalid(field: ComputerField, constraint: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field,
            constraint: constraint.into(),
        }
    }

    /// The field that failed validation
    pub fn field(&self) -> ComputerField {
        match self {
            Self::MissingRequiredField { field } | Self::InvalidFieldValue { field, .. } => *field,
        }
    }
}

impl From<&BuildError> for ErrorReport {
    fn from(error: &BuildError) -> Self {
        let code = match error {
            BuildError::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            BuildError::InvalidFieldValue { .. } => "INVALID_FIELD_VALUE",
        };
        ErrorReport::new(code, error.to_string())
            .with_hint(format!("Check the '{}' field", error.field().as_key()))
    }
}

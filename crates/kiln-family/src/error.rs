use kiln_core::ErrorReport;
use thiserror::Error;

pub type FamilyResult<T> = Result<T, FamilyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    #[error("Unsupported platform family: {key}")]
    UnsupportedFamily { key: String },
}

impl FamilyError {
    pub fn unsupported(key: impl Into<String>) -> Self {
        Self::UnsupportedFamily { key: key.into() }
    }

    /// The key that failed to resolve
    pub fn key(&self) -> &str {
        match self {
            Self::UnsupportedFamily { key } => key,
        }
    }
}

impl From<&FamilyError> for ErrorReport {
    fn from(error: &FamilyError) -> Self {
        ErrorReport::new("UNSUPPORTED_FAMILY", error.to_string())
            .with_hint(format!("Supported platforms: {}", crate::supported_families().join(", ")))
    }
}

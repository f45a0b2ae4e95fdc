use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired { field: String, hint: String },

    #[error("Invalid value for field '{field}': '{value}'. Expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

impl ConfigError {
    /// Create a missing required field error
    pub fn missing_required(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into(),
            hint: hint.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}

/// Trait for validating configuration values
pub trait ConfigValidator<T: ?Sized> {
    /// Validate a configuration value
    fn validate(&self, value: &T) -> Result<(), ConfigError>;
}

/// Accepts only the level names understood by `tracing`
pub struct LogLevelValidator;

impl LogLevelValidator {
    pub const LEVELS: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];
}

impl ConfigValidator<str> for LogLevelValidator {
    fn validate(&self, value: &str) -> Result<(), ConfigError> {
        if Self::LEVELS.contains(&value.to_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConfigError::invalid_value(
                "log_level",
                value,
                Self::LEVELS.join(", "),
            ))
        }
    }
}

/// Rejects values that are empty after trimming
pub struct NonBlankValidator {
    pub field: &'static str,
}

impl ConfigValidator<str> for NonBlankValidator {
    fn validate(&self, value: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::missing_required(
                self.field,
                "Value must not be blank",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_validator() {
        let validator = LogLevelValidator;
        assert!(validator.validate("info").is_ok());
        assert!(validator.validate("DEBUG").is_ok());
        assert!(validator.validate("verbose").is_err());
    }

    #[test]
    fn test_non_blank_validator() {
        let validator = NonBlankValidator { field: "platform" };
        assert!(validator.validate("mac").is_ok());

        let err = validator.validate("   ").unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired { ref field, .. } if field == "platform"));
    }
}

use crate::config::{ConfigError, ConfigValidator, LogLevelValidator, NonBlankValidator};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::str::FromStr;

pub const ENV_VAR: &str = "KILN_ENV";
pub const LOG_LEVEL_VAR: &str = "KILN_LOG_LEVEL";
pub const LOG_JSON_VAR: &str = "KILN_LOG_JSON";
pub const PLATFORM_VAR: &str = "KILN_PLATFORM";

/// Configuration trait for process-level configuration
pub trait AppConfigTrait: Sized {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self, ConfigError>;

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError>;

    /// Get configuration source information for debugging
    fn config_sources(&self) -> HashMap<String, ConfigSource>;
}

/// Where a configuration value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    EnvVar(String),
    Default(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::EnvVar(name) => write!(f, "env:{}", name),
            ConfigSource::Default(value) => write!(f, "default:{}", value),
        }
    }
}

/// Environment enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::invalid_value(
                "environment",
                s,
                "development, testing, or production",
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env_str = match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        };
        write!(f, "{}", env_str)
    }
}

/// Process configuration for the kiln tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KilnConfig {
    pub environment: Environment,
    /// Explicit log level; `None` leaves it to the environment's logging preset
    pub log_level: Option<String>,
    /// Explicit output format; `None` leaves it to the environment's logging preset
    pub json_logs: Option<bool>,
    /// Raw platform descriptor used instead of the host OS name
    pub platform_override: Option<String>,
}

impl KilnConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            environment: Environment::Development,
            log_level: None,
            json_logs: None,
            platform_override: None,
        }
    }

    /// Configuration used by test suites
    pub fn testing() -> Self {
        Self {
            environment: Environment::Testing,
            log_level: None,
            json_logs: None,
            platform_override: None,
        }
    }

    /// Set the platform override
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform_override = Some(platform.into());
        self
    }

    /// Check if a platform override is configured
    pub fn has_platform_override(&self) -> bool {
        self.platform_override.is_some()
    }
}

impl Default for KilnConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfigTrait for KilnConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Ok(env_str) = env::var(ENV_VAR) {
            config.environment = env_str.parse()?;
        }

        if let Ok(log_level) = env::var(LOG_LEVEL_VAR) {
            config.log_level = Some(log_level.to_lowercase());
        }

        if let Ok(json_str) = env::var(LOG_JSON_VAR) {
            let json_logs = json_str
                .parse()
                .map_err(|_| ConfigError::invalid_value("json_logs", json_str, "true or false"))?;
            config.json_logs = Some(json_logs);
        }

        config.platform_override = env::var(PLATFORM_VAR).ok();

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.log_level {
            LogLevelValidator.validate(level.as_str())?;
        }

        if let Some(platform) = &self.platform_override {
            NonBlankValidator { field: "platform" }.validate(platform.as_str())?;
        }

        Ok(())
    }

    fn config_sources(&self) -> HashMap<String, ConfigSource> {
        let source = |var: &str, default: &str| {
            if env::var(var).is_ok() {
                ConfigSource::EnvVar(var.to_string())
            } else {
                ConfigSource::Default(default.to_string())
            }
        };

        let mut sources = HashMap::new();
        sources.insert("environment".to_string(), source(ENV_VAR, "development"));
        sources.insert("log_level".to_string(), source(LOG_LEVEL_VAR, "environment preset"));
        sources.insert("json_logs".to_string(), source(LOG_JSON_VAR, "environment preset"));
        sources.insert("platform".to_string(), source(PLATFORM_VAR, "host os"));
        sources
    }
}

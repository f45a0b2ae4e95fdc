//! # kiln-core
//!
//! Shared foundation for the kiln crates: the error type, keyed constructor
//! tables, environment configuration and logging setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod registry;

pub use config::{AppConfigTrait, ConfigError, ConfigSource, Environment, KilnConfig};
pub use errors::{CoreError, ErrorReport};
pub use logging::{init_logging, LoggingConfig};
pub use registry::{Constructor, ConstructorTable, DefaultingTable};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get crate version
pub fn version() -> &'static str {
    VERSION
}

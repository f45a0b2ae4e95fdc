//! # kiln-builder
//!
//! Validated builder for immutable [`Computer`] values, plus a director with
//! ready-made presets.
//!
//! ```
//! use kiln_builder::ComputerBuilder;
//!
//! let pc = ComputerBuilder::new()
//!     .with_cpu("Intel i5")
//!     .with_ram(16)
//!     .with_motherboard("Board A")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(pc.storage(), "500GB HDD");
//! assert!(!pc.has_ssd());
//! ```

pub mod builder;
pub mod computer;
pub mod director;
pub mod error;
pub mod rules;

pub use builder::ComputerBuilder;
pub use computer::Computer;
pub use director::{ComputerDirector, ComputerPreset};
pub use error::{BuildError, BuildResult, ComputerField};

//! Keyed constructor tables
//!
//! A table maps a closed set of string keys to zero-argument constructors.
//! Tables are assembled once, usually inside a `once_cell::sync::Lazy`
//! static, and are read-only afterwards.
//!
//! - [`ConstructorTable`]: strict lookup, unknown keys are an error
//! - [`DefaultingTable`]: unknown keys resolve to a designated default key

pub mod defaulting;
pub mod table;

pub use defaulting::DefaultingTable;
pub use table::{Constructor, ConstructorTable};

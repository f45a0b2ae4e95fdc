use crate::registry::{Constructor, ConstructorTable};
use std::fmt;

/// Constructor table where unknown keys resolve to a default entry
///
/// Built with [`ConstructorTable::with_default`], which registers the default
/// key in the same step, so the fallback always exists.
pub struct DefaultingTable<T> {
    table: ConstructorTable<T>,
    default_key: &'static str,
    default: Constructor<T>,
}

impl<T> DefaultingTable<T> {
    pub(crate) fn new(
        table: ConstructorTable<T>,
        default_key: &'static str,
        default: Constructor<T>,
    ) -> Self {
        Self {
            table,
            default_key,
            default,
        }
    }

    /// The registered key `key` maps to: itself if known, the default otherwise
    pub fn resolve_key(&self, key: &str) -> &'static str {
        self.table.canonical_key(key).unwrap_or(self.default_key)
    }

    /// Constructor for `key`, falling back to the default entry
    pub fn lookup(&self, key: &str) -> Constructor<T> {
        self.table.get(key).unwrap_or_else(|| {
            tracing::debug!(
                table = self.table.name(),
                requested = key,
                fallback = self.default_key,
                "Unknown key, using default"
            );
            self.default
        })
    }

    /// Construct a new value for `key`. Never fails.
    pub fn create(&self, key: &str) -> T {
        (self.lookup(key))()
    }

    pub fn default_key(&self) -> &'static str {
        self.default_key
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.table.keys()
    }

    /// The underlying strict table
    pub fn strict(&self) -> &ConstructorTable<T> {
        &self.table
    }
}

impl<T> fmt::Debug for DefaultingTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultingTable")
            .field("table", &self.table)
            .field("default_key", &self.default_key)
            .finish()
    }
}

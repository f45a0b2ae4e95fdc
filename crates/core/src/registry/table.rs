use crate::errors::CoreError;
use crate::registry::DefaultingTable;
use std::collections::HashMap;
use std::fmt;

/// Zero-argument constructor stored in a table
pub type Constructor<T> = fn() -> T;

/// Closed mapping from string keys to constructors
///
/// Lookups are exact and case-sensitive. Callers normalize keys before
/// reaching the table.
pub struct ConstructorTable<T> {
    name: &'static str,
    constructors: HashMap<&'static str, Constructor<T>>,
}

impl<T> ConstructorTable<T> {
    /// Create a new empty table. The name shows up in errors and logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            constructors: HashMap::new(),
        }
    }

    /// Register a constructor under `key`
    ///
    /// # Panics
    /// Panics if `key` is already registered. Tables are assembled from
    /// literals, so a duplicate is a programming error.
    pub fn register(mut self, key: &'static str, constructor: Constructor<T>) -> Self {
        if self.constructors.contains_key(key) {
            panic!(
                "Key '{}' is already registered in table '{}'. Each key must be unique.",
                key, self.name
            );
        }

        self.constructors.insert(key, constructor);
        tracing::trace!(table = self.name, key, "Registered constructor");
        self
    }

    /// Register `key` and designate it as the fallback for unknown keys
    pub fn with_default(
        self,
        key: &'static str,
        constructor: Constructor<T>,
    ) -> DefaultingTable<T> {
        DefaultingTable::new(self.register(key, constructor), key, constructor)
    }

    /// Constructor registered under `key`, if any
    pub fn get(&self, key: &str) -> Option<Constructor<T>> {
        self.constructors.get(key).copied()
    }

    /// Find the constructor registered under `key`
    pub fn lookup(&self, key: &str) -> Result<Constructor<T>, CoreError> {
        self.get(key)
            .ok_or_else(|| CoreError::unknown_key(self.name, key, self.available()))
    }

    /// Construct a new value for `key`
    pub fn create(&self, key: &str) -> Result<T, CoreError> {
        let constructor = self.lookup(key)?;
        tracing::debug!(table = self.name, key, "Constructing value");
        Ok(constructor())
    }

    /// Find the registered key equal to `key`, with its static lifetime
    pub fn canonical_key(&self, key: &str) -> Option<&'static str> {
        self.constructors.get_key_value(key).map(|(k, _)| *k)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.constructors.contains_key(key)
    }

    /// All registered keys, sorted
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.constructors.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn available(&self) -> Vec<String> {
        self.keys().into_iter().map(str::to_string).collect()
    }
}

impl<T> fmt::Debug for ConstructorTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorTable")
            .field("name", &self.name)
            .field("keys", &self.keys())
            .finish()
    }
}

//! Key-value storage seam and the layout persistence adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app backs [`KeyValueStore`] with `window.localStorage`; tests
//! and native builds use [`MemoryStore`]. [`Persistence`] is the only code
//! that knows the storage key and the serialized layout format.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::state::{Layout, LayoutError};

/// Error reported by a [`KeyValueStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage exists in this environment (or access is denied).
    #[error("key-value storage is unavailable")]
    Unavailable,
    /// The backend failed to read a key.
    #[error("failed to read {key}: {reason}")]
    ReadFailed { key: String, reason: String },
    /// The backend refused a write (quota exceeded, private mode, etc.).
    #[error("failed to write {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Minimal durable string store.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. Survives as long as the value does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seed for a single key.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Error from a persistence round trip.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Reads and writes a [`Layout`] under one fixed key.
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the backend, e.g. to hand it to a restarted builder.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Read the saved layout. `Ok(None)` when nothing has been saved; an
    /// empty stored value counts as nothing saved.
    ///
    /// # Errors
    ///
    /// [`PersistError::Store`] if the backend fails, [`PersistError::Layout`]
    /// if the stored text does not parse.
    pub fn fetch(&self) -> Result<Option<Layout>, PersistError> {
        let Some(raw) = self.store.read(&self.key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        let layout = Layout::from_json(&raw)?;
        Ok(Some(layout))
    }

    /// Serialize `layout` and write it in one call, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Propagates serialization and backend failures.
    pub fn save(&mut self, layout: &Layout) -> Result<(), PersistError> {
        let raw = layout.to_json()?;
        self.store.write(&self.key, &raw)?;
        Ok(())
    }
}

//! Key-value slot backends for the persisted cart.
//!
//! The original storefront kept the cart in one browser localStorage key.
//! [`CartSlot`] models exactly that: a single string-valued slot that can
//! be read, replaced wholesale, or removed. Absence of the slot is a valid
//! state and means "empty cart".

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the cart slot. Shared by every page of the site; the persisted
/// format under this key must stay stable across versions.
pub const CART_KEY: &str = "cart";

/// Errors writing to or removing a slot. Reads never fail: an unreadable
/// slot is indistinguishable from an absent one.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot file could not be written or removed.
    #[error("failed to write cart slot {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The cart could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single string-keyed storage slot.
pub trait CartSlot {
    /// Read the slot's current value, `None` if absent.
    fn read(&self) -> Option<String>;

    /// Replace the slot's value wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store rejects the write.
    fn write(&mut self, value: &str) -> Result<(), StorageError>;

    /// Remove the slot entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store rejects the
    /// removal. Removing an absent slot succeeds.
    fn remove(&mut self) -> Result<(), StorageError>;
}

/// File-backed slot: one JSON file standing in for the browser's
/// localStorage entry. Two processes sharing the file race last-write-wins,
/// the same as two tabs sharing localStorage.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at the given path. Nothing is created until the first
    /// write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl CartSlot for FileSlot {
    fn read(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, value).map_err(|e| self.io_error(e))
    }

    fn remove(&mut self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    /// An empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// A slot pre-seeded with a raw value, for malformed-input tests.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl CartSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        self.value = Some(value.to_owned());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StorageError> {
        self.value = None;
        Ok(())
    }
}

//! Synchronous key-value persistence behind the session store.
//!
//! Backends mirror the browser `localStorage` contract: string keys, string
//! values, reads of a missing key return `None`.

mod file;
#[cfg(feature = "web")]
mod local;

pub use file::FileBackend;
#[cfg(feature = "web")]
pub use local::LocalStorageBackend;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use shared_types::AppError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode session record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::storage(err.to_string())
    }
}

pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local backend. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_get_set_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("user").unwrap(), None);

        backend.set("user", "{}").unwrap();
        assert_eq!(backend.get("user").unwrap().as_deref(), Some("{}"));

        backend.remove("user").unwrap();
        backend.remove("user").unwrap();
        assert_eq!(backend.get("user").unwrap(), None);
    }

    #[test]
    fn storage_error_converts_to_app_error() {
        let err: AppError = StorageError::Unavailable("no window".into()).into();
        assert_eq!(err.kind, shared_types::AppErrorKind::StorageError);
        assert_eq!(err.message, "storage unavailable: no window");
    }
}

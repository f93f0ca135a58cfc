//! Session Store: the single source of truth for who is signed in.

use std::cell::RefCell;
use std::rc::Rc;

use shared_types::{Identity, Session, SessionRecord, ShellConfig};

use crate::storage::{StorageBackend, StorageError};

/// Key of the persisted session record.
pub const SESSION_KEY: &str = "user";

/// Read and write access to the current session.
///
/// Writes are visible to the very next `current_session` call from any
/// holder of the same store.
pub trait SessionStore {
    /// Never fails: unreadable state is reported as [`Session::Absent`].
    fn current_session(&self) -> Session;

    /// Replace any prior session with `identity`.
    fn establish(&self, identity: Identity) -> Result<(), StorageError>;

    /// End the session. Clearing an absent session is a no-op.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Store handle passed to guards, frames and the auth action.
pub type SharedSessionStore = Rc<dyn SessionStore>;

/// Session store backed by a key-value backend, read on every query.
#[derive(Debug)]
pub struct PersistedSessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> PersistedSessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> SessionStore for PersistedSessionStore<B> {
    fn current_session(&self) -> Session {
        let raw = match self.backend.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Session::Absent,
            Err(error) => {
                tracing::warn!(%error, "session storage unreadable; treating as signed out");
                return Session::Absent;
            }
        };

        let record: SessionRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(%error, "malformed session record; treating as signed out");
                return Session::Absent;
            }
        };

        match Identity::try_from(record) {
            Ok(identity) => Session::Present(identity),
            Err(rejection) => {
                tracing::warn!(%rejection, "invalid session record; treating as signed out");
                Session::Absent
            }
        }
    }

    fn establish(&self, identity: Identity) -> Result<(), StorageError> {
        let json = serde_json::to_string(&SessionRecord::from(&identity))?;
        self.backend.set(SESSION_KEY, &json)?;
        tracing::info!(role = %identity.role(), "session established");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove(SESSION_KEY)?;
        tracing::info!("session cleared");
        Ok(())
    }
}

/// In-process store with no persistence. Useful as a test double.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RefCell<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: Identity) -> Self {
        Self {
            session: RefCell::new(Session::Present(identity)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn current_session(&self) -> Session {
        self.session.borrow().clone()
    }

    fn establish(&self, identity: Identity) -> Result<(), StorageError> {
        *self.session.borrow_mut() = Session::Present(identity);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.session.borrow_mut() = Session::Absent;
        Ok(())
    }
}

/// Pick the platform's persistent store.
///
/// Browser builds use `localStorage`. Everything else uses a file in the
/// configured directory or the platform data dir, falling back to memory
/// when no directory can be resolved.
pub fn default_store(config: &ShellConfig) -> SharedSessionStore {
    #[cfg(feature = "web")]
    {
        let _ = config;
        Rc::new(PersistedSessionStore::new(
            crate::storage::LocalStorageBackend,
        ))
    }

    #[cfg(not(feature = "web"))]
    {
        use crate::storage::{FileBackend, MemoryBackend};

        let backend = match &config.storage.dir {
            Some(dir) => Ok(FileBackend::new(dir)),
            None => FileBackend::in_data_dir(),
        };
        match backend {
            Ok(backend) => {
                tracing::debug!(dir = %backend.dir().display(), "using file session storage");
                Rc::new(PersistedSessionStore::new(backend))
            }
            Err(error) => {
                tracing::warn!(%error, "no persistent storage; sessions will not survive restart");
                Rc::new(PersistedSessionStore::new(MemoryBackend::new()))
            }
        }
    }
}

use dioxus::prelude::*;
use shared_types::Session;
use shell::{check, Destination, GuardDecision, SessionStore, SharedSessionStore};

/// The injected session store plus a signal mirroring it.
///
/// Guards read the store itself; `current` only exists so views re-render
/// after a write.
#[derive(Clone)]
pub struct SessionContext {
    pub store: SharedSessionStore,
    pub current: Signal<Session>,
}

impl SessionContext {
    pub fn new(store: SharedSessionStore) -> Self {
        let current = Signal::new(store.current_session());
        Self { store, current }
    }

    /// Guard `destination`, subscribing the caller to session changes.
    pub fn guard(&self, destination: &Destination) -> GuardDecision {
        let _subscribe = self.current.read();
        check(destination, self.store.as_ref())
    }

    /// Copy the store's state into the signal after a write.
    pub fn sync(&mut self) {
        let latest = self.store.current_session();
        if *self.current.peek() != latest {
            self.current.set(latest);
        }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

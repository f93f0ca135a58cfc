//! Session-gated navigation for the EduMap client.
//!
//! Everything here is renderer-independent; the `app` crate wires it into
//! Dioxus.

pub mod auth;
pub mod composer;
pub mod config;
pub mod controller;
pub mod destination;
pub mod frame;
pub mod guard;
pub mod session;
pub mod storage;

pub use auth::{
    AuthAction, IdentityProvider, Notification, SimulatedIdentityProvider, SubmitState, Tone,
};
pub use composer::{layout_for, layout_with_badges, ExamFeed, NoExamFeed, StaticExamFeed};
pub use controller::{NavigationController, Page, View};
pub use destination::{normalize, Access, Destination, Feature};
pub use frame::{sign_out, ActionItem, HeaderSummary, NavItem, ShellFrame, SidebarMode};
pub use guard::{check, evaluate, GuardDecision};
pub use session::{
    default_store, MemorySessionStore, PersistedSessionStore, SessionStore, SharedSessionStore,
};
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};

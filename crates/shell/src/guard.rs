//! Route Guard: session-gated access decisions.
//!
//! Decisions are recomputed from the store on every navigation. Nothing here
//! caches a previous outcome, so a sign-out is honoured by the next check.

use shared_types::Session;

use crate::destination::{Access, Destination};
use crate::session::SessionStore;

/// Where a signed-out visitor of a protected page is sent.
pub const SIGN_IN: Destination = Destination::Auth;

/// Where a signed-in visitor of a public-only page is sent.
pub const SIGNED_IN_LANDING: Destination = Destination::Dashboard;

/// Outcome of guarding one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the destination. Protected destinations always carry
    /// `Session::Present`.
    Render(Session),
    /// Do not render; go here instead.
    Redirect(Destination),
}

impl GuardDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, GuardDecision::Redirect(_))
    }
}

pub fn evaluate(access: Access, session: &Session) -> GuardDecision {
    match (access, session) {
        (Access::Protected, Session::Absent) => GuardDecision::Redirect(SIGN_IN),
        (Access::PublicOnly, Session::Present(_)) => GuardDecision::Redirect(SIGNED_IN_LANDING),
        _ => GuardDecision::Render(session.clone()),
    }
}

/// Guard `destination` against the store's current session.
pub fn check(destination: &Destination, store: &dyn SessionStore) -> GuardDecision {
    let decision = evaluate(destination.access(), &store.current_session());
    if let GuardDecision::Redirect(to) = &decision {
        tracing::debug!(from = %destination, to = %to, "route guard redirect");
    }
    decision
}

//! UI-agnostic driver for guarded navigation.
//!
//! The Dioxus layouts do the same work through the router; this type lets
//! the whole flow run without a renderer.

use shared_types::{DashboardVariant, Session, ShellConfig, SignInRequest, SignUpRequest};

use crate::auth::{AuthAction, IdentityProvider, Notification, SubmitState};
use crate::composer::ExamFeed;
use crate::destination::{Destination, Feature, DASHBOARD_PATH};
use crate::frame::{self, ShellFrame, SidebarMode};
use crate::guard::{check, GuardDecision};
use crate::session::SharedSessionStore;

/// Redirects followed for a single navigation before giving up.
pub const MAX_REDIRECTS: usize = 2;

/// Content mounted inside the shell frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard(DashboardVariant),
    Placeholder(Feature),
}

/// What is on screen after a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Landing,
    Auth,
    NotFound(String),
    Framed(ShellFrame, Page),
}

impl View {
    pub fn page(&self) -> Option<&Page> {
        match self {
            View::Framed(_, page) => Some(page),
            _ => None,
        }
    }

    pub fn frame(&self) -> Option<&ShellFrame> {
        match self {
            View::Framed(frame, _) => Some(frame),
            _ => None,
        }
    }
}

pub struct NavigationController<P, F> {
    auth: AuthAction<P>,
    exams: F,
    base_path: String,
    sidebar: SidebarMode,
    history: Vec<Destination>,
    notifications: Vec<Notification>,
}

impl<P: IdentityProvider, F: ExamFeed> NavigationController<P, F> {
    pub fn new(store: SharedSessionStore, provider: P, exams: F, config: &ShellConfig) -> Self {
        Self {
            auth: AuthAction::new(provider, store),
            exams,
            base_path: config.base_path.clone(),
            sidebar: SidebarMode::from_collapsed(config.sidebar.collapsed),
            history: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// Where the user currently is, after redirects.
    pub fn location(&self) -> Option<&Destination> {
        self.history.last()
    }

    pub fn history(&self) -> &[Destination] {
        &self.history
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn sidebar(&self) -> SidebarMode {
        self.sidebar
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar = self.sidebar.toggled();
    }

    pub fn session(&self) -> Session {
        self.auth.store().current_session()
    }

    /// Go to `raw`, a location as typed or linked (base path, query and
    /// trailing slashes allowed).
    pub fn navigate(&mut self, raw: &str) -> View {
        let destination = Destination::parse(raw, &self.base_path);
        self.visit(destination)
    }

    /// Return to the previous entry. The guard runs again, so a protected
    /// page left before sign-out redirects to sign-in.
    pub fn back(&mut self) -> View {
        if self.history.len() > 1 {
            self.history.pop();
        }
        match self.history.pop() {
            Some(previous) => self.visit(previous),
            None => self.visit(Destination::Landing),
        }
    }

    /// Re-evaluate the current entry in place.
    pub fn refresh(&mut self) -> View {
        let current = self.history.pop().unwrap_or(Destination::Landing);
        self.visit(current)
    }

    pub async fn sign_in(&mut self, request: &SignInRequest) -> SubmitState {
        let state = self.auth.sign_in(request, |_| {}).await;
        self.after_submit(&state);
        state
    }

    pub async fn sign_up(&mut self, request: &SignUpRequest) -> SubmitState {
        let state = self.auth.sign_up(request, |_| {}).await;
        self.after_submit(&state);
        state
    }

    pub fn sign_out(&mut self) -> View {
        let to = frame::sign_out(self.auth.store().as_ref());
        self.visit(to)
    }

    fn after_submit(&mut self, state: &SubmitState) {
        if let Some(notification) = Notification::for_outcome(state) {
            self.notifications.push(notification);
        }
        if matches!(state, SubmitState::Succeeded(_)) {
            self.navigate(DASHBOARD_PATH);
        }
    }

    fn visit(&mut self, requested: Destination) -> View {
        let (destination, session) = self.resolve(requested);
        let view = self.render(&destination, session);
        self.history.push(destination);
        view
    }

    fn resolve(&self, requested: Destination) -> (Destination, Session) {
        let store = self.auth.store().as_ref();
        let mut destination = requested;
        for _ in 0..=MAX_REDIRECTS {
            match check(&destination, store) {
                GuardDecision::Render(session) => return (destination, session),
                GuardDecision::Redirect(to) => destination = to,
            }
        }
        tracing::warn!(%destination, "redirect limit reached; showing landing");
        (Destination::Landing, store.current_session())
    }

    fn render(&self, destination: &Destination, session: Session) -> View {
        let page = match destination {
            Destination::Landing => return View::Landing,
            Destination::Auth => return View::Auth,
            Destination::NotFound(path) => return View::NotFound(path.clone()),
            Destination::Dashboard => None,
            Destination::Feature(feature) => Some(Page::Placeholder(*feature)),
        };

        let Session::Present(identity) = session else {
            return View::Auth;
        };
        let frame = ShellFrame::new(identity, &self.exams, destination.clone(), self.sidebar);
        let page = page.unwrap_or(Page::Dashboard(frame.layout.dashboard));
        View::Framed(frame, page)
    }
}

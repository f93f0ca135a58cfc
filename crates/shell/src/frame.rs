//! Shell Frame: the header and side navigation around protected pages.

use shared_types::{Emphasis, IconTag, Identity, RoleLayout};

use crate::composer::{layout_with_badges, ExamFeed};
use crate::destination::Destination;
use crate::guard::SIGN_IN;
use crate::session::SessionStore;

/// Whether the side navigation shows labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarMode {
    #[default]
    Expanded,
    /// Icons only.
    Collapsed,
}

impl SidebarMode {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            SidebarMode::Collapsed
        } else {
            SidebarMode::Expanded
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SidebarMode::Expanded => SidebarMode::Collapsed,
            SidebarMode::Collapsed => SidebarMode::Expanded,
        }
    }

    pub fn shows_labels(self) -> bool {
        self == SidebarMode::Expanded
    }
}

/// A menu entry as the side navigation should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub icon: IconTag,
    /// `None` when the sidebar is collapsed.
    pub label: Option<&'static str>,
    /// Accessible name, present in both modes.
    pub title: &'static str,
    pub badge: Option<u32>,
    pub active: bool,
}

/// A quick action as the side navigation should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    pub path: &'static str,
    pub icon: IconTag,
    pub label: Option<&'static str>,
    pub title: &'static str,
    pub emphasis: Emphasis,
}

/// Identity summary for the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSummary {
    pub initial: String,
    pub name: String,
    pub email: String,
    pub role_label: &'static str,
}

/// Everything the frame needs to draw one protected page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellFrame {
    pub identity: Identity,
    pub layout: RoleLayout,
    pub mode: SidebarMode,
    pub current: Destination,
}

impl ShellFrame {
    pub fn new(
        identity: Identity,
        exams: &dyn ExamFeed,
        current: Destination,
        mode: SidebarMode,
    ) -> Self {
        let layout = layout_with_badges(&identity, exams);
        Self {
            identity,
            layout,
            mode,
            current,
        }
    }

    pub fn title(&self) -> &'static str {
        self.current.title()
    }

    /// Group headings ("Quick actions", "Main menu") are screen-reader only
    /// when collapsed.
    pub fn section_labels_visible(&self) -> bool {
        self.mode.shows_labels()
    }

    pub fn menu_items(&self) -> Vec<NavItem> {
        let labels = self.mode.shows_labels();
        let current = self.current.path();
        self.layout
            .menu
            .iter()
            .map(|entry| NavItem {
                path: entry.path,
                icon: entry.icon,
                label: labels.then_some(entry.label),
                title: entry.label,
                badge: entry.badge.filter(|_| labels),
                active: entry.path == current,
            })
            .collect()
    }

    pub fn quick_action_items(&self) -> Vec<ActionItem> {
        let labels = self.mode.shows_labels();
        self.layout
            .quick_actions
            .iter()
            .map(|action| ActionItem {
                path: action.path,
                icon: action.icon,
                label: labels.then_some(action.label),
                title: action.label,
                emphasis: action.emphasis,
            })
            .collect()
    }

    pub fn header(&self) -> HeaderSummary {
        HeaderSummary {
            initial: self.identity.initial(),
            name: self.identity.name().to_string(),
            email: self.identity.email().to_string(),
            role_label: self.identity.role().label(),
        }
    }
}

/// Clear the session and return where to go next.
///
/// Always lands on sign-in. A storage failure is logged; the store reads as
/// absent on the next check whenever the record is unreadable.
pub fn sign_out(store: &dyn SessionStore) -> Destination {
    if let Err(error) = store.clear() {
        tracing::error!(%error, "failed to clear persisted session");
    }
    SIGN_IN
}

use crate::identity::Role;

/// Icon shown beside a navigation entry. Mapped to a concrete icon by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTag {
    Dashboard,
    FileText,
    Brain,
    Users,
    BarChart,
    BookOpen,
    Trophy,
    PlusCircle,
    UserPlus,
    Target,
    Clock,
}

/// Visual emphasis of a quick-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Primary,
    Secondary,
}

impl Emphasis {
    pub fn class(&self) -> &'static str {
        match self {
            Emphasis::Primary => "primary",
            Emphasis::Secondary => "secondary",
        }
    }
}

/// Which dashboard the `/dashboard` destination mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardVariant {
    TeacherDashboard,
    StudentDashboard,
}

/// External collaborator that can supply a count for a menu entry badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSource {
    PendingExams,
}

/// One side-navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: IconTag,
    /// Where this entry's badge count comes from, if it can carry one.
    pub badge_source: Option<BadgeSource>,
    pub badge: Option<u32>,
}

impl MenuEntry {
    pub const fn new(label: &'static str, path: &'static str, icon: IconTag) -> Self {
        Self {
            label,
            path,
            icon,
            badge_source: None,
            badge: None,
        }
    }

    pub const fn badged(mut self, source: BadgeSource) -> Self {
        self.badge_source = Some(source);
        self
    }
}

/// A shortcut button above the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: IconTag,
    pub emphasis: Emphasis,
}

/// Navigation bundle derived from a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLayout {
    pub role: Role,
    pub menu: Vec<MenuEntry>,
    pub quick_actions: Vec<QuickAction>,
    pub dashboard: DashboardVariant,
}

impl RoleLayout {
    /// Set the badge on every entry fed by `source`. Zero or `None` clears it.
    pub fn with_badge(mut self, source: BadgeSource, count: Option<u32>) -> Self {
        let count = count.filter(|c| *c > 0);
        for entry in self
            .menu
            .iter_mut()
            .filter(|e| e.badge_source == Some(source))
        {
            entry.badge = count;
        }
        self
    }

    /// The menu entry highlighted for `path` (exact match).
    pub fn active_entry(&self, path: &str) -> Option<&MenuEntry> {
        self.menu.iter().find(|e| e.path == path)
    }

    pub fn menu_labels(&self) -> Vec<&'static str> {
        self.menu.iter().map(|e| e.label).collect()
    }

    pub fn quick_action_labels(&self) -> Vec<&'static str> {
        self.quick_actions.iter().map(|a| a.label).collect()
    }
}

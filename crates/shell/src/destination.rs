//! The closed table of navigation destinations.

use std::fmt;

/// Who may see a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reachable regardless of session state.
    Public,
    /// Only while signed out.
    PublicOnly,
    /// Only while signed in, inside the shell frame.
    Protected,
}

/// Protected pages that render placeholder content until their features land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    ExamManagement,
    CreateExam,
    Analytics,
    Classes,
    InviteStudents,
    Reports,
    Exams,
    Mindmap,
    Achievements,
    Practice,
    Upcoming,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::ExamManagement,
        Feature::CreateExam,
        Feature::Analytics,
        Feature::Classes,
        Feature::InviteStudents,
        Feature::Reports,
        Feature::Exams,
        Feature::Mindmap,
        Feature::Achievements,
        Feature::Practice,
        Feature::Upcoming,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Feature::ExamManagement => "/tests",
            Feature::CreateExam => "/tests/create",
            Feature::Analytics => "/analytics",
            Feature::Classes => "/classes",
            Feature::InviteStudents => "/classes/invite",
            Feature::Reports => "/reports",
            Feature::Exams => "/exams",
            Feature::Mindmap => "/mindmap",
            Feature::Achievements => "/achievements",
            Feature::Practice => "/practice",
            Feature::Upcoming => "/upcoming",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Feature::ExamManagement => "Exam Management",
            Feature::CreateExam => "Create New Exam",
            Feature::Analytics => "AI Analytics",
            Feature::Classes => "Classes",
            Feature::InviteStudents => "Invite Students",
            Feature::Reports => "Reports",
            Feature::Exams => "Exams",
            Feature::Mindmap => "Learning Mindmap",
            Feature::Achievements => "Achievements",
            Feature::Practice => "Practice",
            Feature::Upcoming => "Upcoming Exams",
        }
    }

    fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.path() == path)
    }
}

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Landing,
    Auth,
    Dashboard,
    Feature(Feature),
    /// Any path that matches nothing above. Holds the normalized path.
    NotFound(String),
}

pub const LANDING_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const DASHBOARD_PATH: &str = "/dashboard";

impl Destination {
    /// Parse a raw location. See [`normalize`] for what is stripped.
    pub fn parse(raw: &str, base_path: &str) -> Self {
        let path = normalize(raw, base_path);
        match path.as_str() {
            LANDING_PATH => Destination::Landing,
            AUTH_PATH => Destination::Auth,
            DASHBOARD_PATH => Destination::Dashboard,
            other => match Feature::from_path(other) {
                Some(feature) => Destination::Feature(feature),
                None => Destination::NotFound(path),
            },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Destination::Landing => LANDING_PATH,
            Destination::Auth => AUTH_PATH,
            Destination::Dashboard => DASHBOARD_PATH,
            Destination::Feature(feature) => feature.path(),
            Destination::NotFound(path) => path,
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Destination::Landing | Destination::NotFound(_) => Access::Public,
            Destination::Auth => Access::PublicOnly,
            Destination::Dashboard | Destination::Feature(_) => Access::Protected,
        }
    }

    /// Title shown in the shell header.
    pub fn title(&self) -> &'static str {
        match self {
            Destination::Landing => "EduMap",
            Destination::Auth => "Sign In",
            Destination::Dashboard => "Dashboard",
            Destination::Feature(feature) => feature.title(),
            Destination::NotFound(_) => "Page Not Found",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Reduce a location to the form used for matching.
///
/// Drops query and fragment, collapses repeated slashes and removes a
/// trailing slash. `base_path` is compared segment by segment, so it may be
/// written with or without its slashes. The result always starts with `/`.
pub fn normalize(raw: &str, base_path: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or_default();

    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let base: Vec<&str> = base_path.split('/').filter(|s| !s.is_empty()).collect();
    if !base.is_empty() && segments.starts_with(&base) {
        segments.drain(..base.len());
    }

    format!("/{}", segments.join("/"))
}

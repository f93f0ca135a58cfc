//! Role View Composer: every role-conditional navigation decision lives here.

use shared_types::{
    BadgeSource, DashboardVariant, Emphasis, IconTag, Identity, MenuEntry, QuickAction, Role,
    RoleLayout,
};

use crate::destination::{Feature, DASHBOARD_PATH};

/// Supplies the pending-exam count for a student.
///
/// Stands in for the exam service; `None` means no data and renders no badge.
pub trait ExamFeed {
    fn pending_exam_count(&self, identity: &Identity) -> Option<u32>;
}

/// Feed with no data. Layouts composed with it never show badges.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExamFeed;

impl ExamFeed for NoExamFeed {
    fn pending_exam_count(&self, _identity: &Identity) -> Option<u32> {
        None
    }
}

/// Feed returning one fixed count for every student.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticExamFeed {
    pub pending: Option<u32>,
}

impl StaticExamFeed {
    pub fn new(pending: Option<u32>) -> Self {
        Self { pending }
    }
}

impl ExamFeed for StaticExamFeed {
    fn pending_exam_count(&self, _identity: &Identity) -> Option<u32> {
        self.pending
    }
}

/// The navigation bundle for `role`. Pure and total.
pub fn layout_for(role: Role) -> RoleLayout {
    match role {
        Role::Teacher => RoleLayout {
            role,
            menu: vec![
                MenuEntry::new("Overview", DASHBOARD_PATH, IconTag::Dashboard),
                MenuEntry::new(
                    "Exam Management",
                    Feature::ExamManagement.path(),
                    IconTag::FileText,
                ),
                MenuEntry::new("AI Analytics", Feature::Analytics.path(), IconTag::Brain),
                MenuEntry::new("Classes", Feature::Classes.path(), IconTag::Users),
                MenuEntry::new("Reports", Feature::Reports.path(), IconTag::BarChart),
            ],
            quick_actions: vec![
                QuickAction {
                    label: "Create New Exam",
                    path: Feature::CreateExam.path(),
                    icon: IconTag::PlusCircle,
                    emphasis: Emphasis::Primary,
                },
                QuickAction {
                    label: "Invite Students",
                    path: Feature::InviteStudents.path(),
                    icon: IconTag::UserPlus,
                    emphasis: Emphasis::Secondary,
                },
            ],
            dashboard: DashboardVariant::TeacherDashboard,
        },
        Role::Student => RoleLayout {
            role,
            menu: vec![
                MenuEntry::new("Home", DASHBOARD_PATH, IconTag::Dashboard),
                MenuEntry::new("Exams", Feature::Exams.path(), IconTag::FileText)
                    .badged(BadgeSource::PendingExams),
                MenuEntry::new("Learning Mindmap", Feature::Mindmap.path(), IconTag::Brain),
                MenuEntry::new("Classes", Feature::Classes.path(), IconTag::BookOpen),
                MenuEntry::new(
                    "Achievements",
                    Feature::Achievements.path(),
                    IconTag::Trophy,
                ),
            ],
            quick_actions: vec![
                QuickAction {
                    label: "Practice",
                    path: Feature::Practice.path(),
                    icon: IconTag::Target,
                    emphasis: Emphasis::Primary,
                },
                QuickAction {
                    label: "Upcoming Exams",
                    path: Feature::Upcoming.path(),
                    icon: IconTag::Clock,
                    emphasis: Emphasis::Secondary,
                },
            ],
            dashboard: DashboardVariant::StudentDashboard,
        },
    }
}

/// [`layout_for`] plus badge counts from external collaborators.
///
/// The feed is only consulted when the layout has an entry it can badge.
pub fn layout_with_badges(identity: &Identity, exams: &dyn ExamFeed) -> RoleLayout {
    let layout = layout_for(identity.role());
    let wants_exams = layout
        .menu
        .iter()
        .any(|e| e.badge_source == Some(BadgeSource::PendingExams));
    if !wants_exams {
        return layout;
    }
    let count = exams.pending_exam_count(identity);
    layout.with_badge(BadgeSource::PendingExams, count)
}

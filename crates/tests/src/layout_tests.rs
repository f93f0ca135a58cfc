use pretty_assertions::assert_eq;
use shared_types::{DashboardVariant, Emphasis, Role};
use shell::{layout_for, layout_with_badges, NoExamFeed, StaticExamFeed};

use crate::common;

#[test]
fn test_layout_is_deterministic_for_all_roles() {
    for role in Role::ALL {
        assert_eq!(layout_for(role), layout_for(role));
    }
}

#[test]
fn test_teacher_layout_contents() {
    let layout = layout_for(Role::Teacher);
    let menu: Vec<_> = layout.menu.iter().map(|e| (e.label, e.path)).collect();
    assert_eq!(
        menu,
        vec![
            ("Overview", "/dashboard"),
            ("Exam Management", "/tests"),
            ("AI Analytics", "/analytics"),
            ("Classes", "/classes"),
            ("Reports", "/reports"),
        ]
    );
    let actions: Vec<_> = layout
        .quick_actions
        .iter()
        .map(|a| (a.label, a.path, a.emphasis))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("Create New Exam", "/tests/create", Emphasis::Primary),
            ("Invite Students", "/classes/invite", Emphasis::Secondary),
        ]
    );
    assert_eq!(layout.dashboard, DashboardVariant::TeacherDashboard);
}

#[test]
fn test_student_layout_contents() {
    let layout = layout_for(Role::Student);
    let menu: Vec<_> = layout.menu.iter().map(|e| (e.label, e.path)).collect();
    assert_eq!(
        menu,
        vec![
            ("Home", "/dashboard"),
            ("Exams", "/exams"),
            ("Learning Mindmap", "/mindmap"),
            ("Classes", "/classes"),
            ("Achievements", "/achievements"),
        ]
    );
    let actions: Vec<_> = layout
        .quick_actions
        .iter()
        .map(|a| (a.label, a.path, a.emphasis))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("Practice", "/practice", Emphasis::Primary),
            ("Upcoming Exams", "/upcoming", Emphasis::Secondary),
        ]
    );
    assert_eq!(layout.dashboard, DashboardVariant::StudentDashboard);
}

#[test]
fn test_pending_badge_only_on_student_exams() {
    let student = layout_with_badges(&common::student("An"), &StaticExamFeed::new(Some(3)));
    let badges: Vec<_> = student.menu.iter().map(|e| e.badge).collect();
    assert_eq!(badges, vec![None, Some(3), None, None, None]);

    let teacher = layout_with_badges(&common::teacher("Binh"), &StaticExamFeed::new(Some(3)));
    assert!(teacher.menu.iter().all(|e| e.badge.is_none()));
}

#[test]
fn test_zero_or_missing_count_yields_no_badge() {
    let an = common::student("An");
    assert_eq!(
        layout_with_badges(&an, &StaticExamFeed::new(Some(0))),
        layout_for(Role::Student)
    );
    assert_eq!(layout_with_badges(&an, &NoExamFeed), layout_for(Role::Student));
}

use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, DashboardVariant, Role, Session};
use shell::{Destination, Page, SessionStore, SubmitState, Tone, View};

use crate::common;

#[test]
fn test_visiting_dashboard_without_session_redirects_to_auth() {
    let (_store, shared) = common::memory_store();
    let mut nav = common::controller(shared);

    let view = nav.navigate("/dashboard");

    assert_eq!(view, View::Auth);
    assert_eq!(nav.location(), Some(&Destination::Auth));
    assert_eq!(nav.history(), &[Destination::Auth]);
}

#[tokio::test]
async fn test_student_sign_in_renders_student_dashboard() {
    let (store, shared) = common::memory_store();
    let mut nav = common::controller(shared);
    nav.navigate("/auth");

    let state = nav
        .sign_in(&common::sign_in_request(Role::Student, Some("An")))
        .await;

    let identity = state.identity().cloned().unwrap();
    assert_eq!(identity.name(), "An");
    assert_eq!(identity.role(), Role::Student);
    assert_eq!(store.current_session(), Session::Present(identity));
    assert_eq!(nav.location(), Some(&Destination::Dashboard));

    let view = nav.refresh();
    assert_eq!(
        view.page(),
        Some(&Page::Dashboard(DashboardVariant::StudentDashboard))
    );
    assert_eq!(
        view.frame().unwrap().layout.menu_labels(),
        vec!["Home", "Exams", "Learning Mindmap", "Classes", "Achievements"]
    );
}

#[tokio::test]
async fn test_mismatched_sign_up_keeps_form_and_session_absent() {
    let (store, shared) = common::memory_store();
    let mut nav = common::controller(shared);
    assert_eq!(nav.navigate("/auth"), View::Auth);

    let state = nav
        .sign_up(&common::sign_up_request("hunter22", "hunter23"))
        .await;

    assert!(matches!(state, SubmitState::Failed(ref e) if e.kind == AppErrorKind::ValidationError));
    assert_eq!(store.current_session(), Session::Absent);
    assert_eq!(nav.location(), Some(&Destination::Auth));

    let notifications = nav.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].tone, Tone::Error);
    assert_eq!(
        notifications[0].description,
        "Password confirmation does not match"
    );
}

#[test]
fn test_teacher_visiting_auth_lands_on_teacher_dashboard() {
    let (store, shared) = common::memory_store();
    store.establish(common::teacher("Binh")).unwrap();
    let mut nav = common::controller(shared);

    let view = nav.navigate("/auth");

    assert_eq!(nav.location(), Some(&Destination::Dashboard));
    assert_eq!(
        view.page(),
        Some(&Page::Dashboard(DashboardVariant::TeacherDashboard))
    );
}

#[test]
fn test_sign_out_then_back_redirects_to_auth_again() {
    let (store, shared) = common::memory_store();
    store.establish(common::student("An")).unwrap();
    let mut nav = common::controller(shared);
    assert!(matches!(nav.navigate("/dashboard"), View::Framed(..)));

    assert_eq!(nav.sign_out(), View::Auth);
    assert_eq!(store.current_session(), Session::Absent);

    assert_eq!(nav.back(), View::Auth);
    assert_eq!(nav.location(), Some(&Destination::Auth));
}

#[tokio::test]
async fn test_valid_sign_up_lands_on_dashboard_with_welcome_toast() {
    let (store, shared) = common::memory_store();
    let mut nav = common::controller(shared);
    nav.navigate("/auth");

    nav.sign_up(&common::sign_up_request("hunter22", "hunter22"))
        .await;

    assert_eq!(store.current_session().role(), Some(Role::Teacher));
    assert_eq!(nav.location(), Some(&Destination::Dashboard));
    let notifications = nav.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].tone, Tone::Success);
}

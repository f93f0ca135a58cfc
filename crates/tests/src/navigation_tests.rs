use pretty_assertions::assert_eq;
use shared_types::ShellConfig;
use shell::{Destination, Feature, SessionStore, SidebarMode, View};

use crate::common;

fn deployed_config() -> ShellConfig {
    ShellConfig {
        base_path: "/EduApplication".to_string(),
        ..ShellConfig::default()
    }
}

#[test]
fn test_base_path_is_stripped_before_matching() {
    let (store, shared) = common::memory_store();
    store.establish(common::student("An")).unwrap();
    let mut nav = common::controller_with(shared, &deployed_config());

    nav.navigate("/EduApplication/exams");
    assert_eq!(nav.location(), Some(&Destination::Feature(Feature::Exams)));

    assert_eq!(nav.navigate("/EduApplication"), View::Landing);
}

#[test]
fn test_trailing_slash_query_and_fragment_are_ignored() {
    let (store, shared) = common::memory_store();
    store.establish(common::teacher("Binh")).unwrap();
    let mut nav = common::controller(shared);

    nav.navigate("/reports/?range=week#top");
    assert_eq!(nav.location(), Some(&Destination::Feature(Feature::Reports)));
}

#[test]
fn test_signed_out_base_path_visit_redirects_to_auth() {
    let (_store, shared) = common::memory_store();
    let mut nav = common::controller_with(shared, &deployed_config());

    assert_eq!(nav.navigate("/EduApplication/dashboard/"), View::Auth);
}

#[test]
fn test_collapsed_sidebar_hides_labels_and_badges_only() {
    let (store, shared) = common::memory_store();
    store.establish(common::student("An")).unwrap();
    let mut config = ShellConfig::default();
    config.sidebar.collapsed = true;
    let mut nav = common::controller_with(shared, &config);

    let collapsed = nav.navigate("/dashboard");
    let collapsed = collapsed.frame().unwrap();
    assert_eq!(collapsed.mode, SidebarMode::Collapsed);
    assert!(collapsed.menu_items().iter().all(|i| i.label.is_none() && i.badge.is_none()));

    nav.toggle_sidebar();
    let expanded = nav.refresh();
    let expanded = expanded.frame().unwrap();
    assert_eq!(expanded.layout, collapsed.layout);
    assert_eq!(expanded.menu_items()[1].badge, Some(common::PENDING_EXAMS));
    assert_eq!(expanded.menu_items()[1].label, Some("Exams"));
}

#[test]
fn test_active_menu_entry_tracks_location() {
    let (store, shared) = common::memory_store();
    store.establish(common::teacher("Binh")).unwrap();
    let mut nav = common::controller(shared);

    let view = nav.navigate("/analytics");
    let active: Vec<_> = view
        .frame()
        .unwrap()
        .menu_items()
        .into_iter()
        .filter(|i| i.active)
        .map(|i| i.title)
        .collect();
    assert_eq!(active, vec!["AI Analytics"]);

    let view = nav.navigate("/tests/create");
    assert!(view.frame().unwrap().menu_items().iter().all(|i| !i.active));
}

#[test]
fn test_back_re_evaluates_guard_after_sign_in() {
    let (store, shared) = common::memory_store();
    let mut nav = common::controller(shared);
    nav.navigate("/");
    nav.navigate("/auth");

    store.establish(common::student("An")).unwrap();

    assert_eq!(nav.back(), View::Landing);
    nav.navigate("/auth");
    assert_eq!(nav.location(), Some(&Destination::Dashboard));
}

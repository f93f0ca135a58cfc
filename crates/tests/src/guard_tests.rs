use shared_types::Role;
use shell::{Destination, Feature, SessionStore, View};

use crate::common;

fn protected_paths() -> Vec<&'static str> {
    std::iter::once("/dashboard")
        .chain(Feature::ALL.iter().map(|f| f.path()))
        .collect()
}

#[test]
fn test_every_protected_destination_redirects_when_signed_out() {
    let (_store, shared) = common::memory_store();
    let mut nav = common::controller(shared);

    for path in protected_paths() {
        assert_eq!(nav.navigate(path), View::Auth, "{path} rendered without a session");
        assert_eq!(nav.location(), Some(&Destination::Auth));
    }
}

#[test]
fn test_auth_redirects_to_dashboard_for_both_roles() {
    for role in Role::ALL {
        let (store, shared) = common::memory_store();
        let identity = match role {
            Role::Teacher => common::teacher("Binh"),
            Role::Student => common::student("An"),
        };
        store.establish(identity).unwrap();
        let mut nav = common::controller(shared);

        nav.navigate("/auth");
        assert_eq!(nav.location(), Some(&Destination::Dashboard), "{role}");
    }
}

#[test]
fn test_every_protected_destination_renders_framed_for_both_roles() {
    for role in Role::ALL {
        let (store, shared) = common::memory_store();
        let identity = match role {
            Role::Teacher => common::teacher("Binh"),
            Role::Student => common::student("An"),
        };
        store.establish(identity.clone()).unwrap();
        let mut nav = common::controller(shared);

        for path in protected_paths() {
            let view = nav.navigate(path);
            let frame = view.frame().unwrap_or_else(|| panic!("{path} not framed"));
            assert_eq!(frame.identity, identity);
            assert_eq!(frame.current.path(), path);
        }
    }
}

#[test]
fn test_landing_and_not_found_ignore_session() {
    let (store, shared) = common::memory_store();
    let mut nav = common::controller(shared);

    assert_eq!(nav.navigate("/"), View::Landing);
    assert_eq!(nav.navigate("/missing"), View::NotFound("/missing".to_string()));

    store.establish(common::student("An")).unwrap();
    assert_eq!(nav.navigate("/"), View::Landing);
    assert_eq!(nav.navigate("/missing"), View::NotFound("/missing".to_string()));
}

#[test]
fn test_guard_observes_sign_out_from_another_holder() {
    let (store, shared) = common::memory_store();
    store.establish(common::student("An")).unwrap();
    let mut nav = common::controller(shared);
    assert!(matches!(nav.navigate("/exams"), View::Framed(..)));

    store.clear().unwrap();

    assert_eq!(nav.navigate("/mindmap"), View::Auth);
}

use pretty_assertions::assert_eq;
use shared_types::{Role, Session};
use shell::{SessionStore, StorageBackend, View};

use crate::common;

#[test]
fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let an = common::student("An");

    {
        let store = common::file_store(dir.path());
        store.establish(an.clone()).unwrap();
    }

    let restarted = common::file_store(dir.path());
    assert_eq!(restarted.current_session(), Session::Present(an));

    let mut nav = common::controller(restarted);
    assert!(matches!(nav.navigate("/dashboard"), View::Framed(..)));
}

#[test]
fn test_sign_out_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::file_store(dir.path());
    store.establish(common::teacher("Binh")).unwrap();
    store.clear().unwrap();

    let restarted = common::file_store(dir.path());
    assert_eq!(restarted.current_session(), Session::Absent);
}

#[test]
fn test_record_is_stored_as_user_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::file_store(dir.path());
    store.establish(common::teacher("Binh")).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("user.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Binh",
            "email": "binh@school.edu",
            "role": "teacher",
        })
    );
}

#[test]
fn test_corrupted_record_reads_absent_and_guards_redirect() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::file_store(dir.path());
    store.backend().set("user", "{\"name\": \"An\", \"role\":").unwrap();

    assert_eq!(store.current_session(), Session::Absent);

    let mut nav = common::controller(store);
    assert_eq!(nav.navigate("/dashboard"), View::Auth);
}

#[test]
fn test_unknown_role_record_reads_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::file_store(dir.path());
    store
        .backend()
        .set("user", r#"{"name":"Eve","email":"eve@school.edu","role":"admin"}"#)
        .unwrap();

    assert_eq!(store.current_session(), Session::Absent);
}

#[test]
fn test_sign_in_overwrites_corrupted_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::file_store(dir.path());
    store.backend().set("user", "garbage").unwrap();

    store.establish(common::student("An")).unwrap();

    assert_eq!(store.current_session().role(), Some(Role::Student));
}

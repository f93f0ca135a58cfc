use std::path::Path;
use std::rc::Rc;

use shared_types::{Identity, Role, ShellConfig, SignInRequest, SignUpRequest};
use shell::{
    FileBackend, MemorySessionStore, NavigationController, PersistedSessionStore,
    SharedSessionStore, SimulatedIdentityProvider, StaticExamFeed,
};

pub type TestController = NavigationController<SimulatedIdentityProvider, StaticExamFeed>;

/// Pending exam count the test exam feed reports for every student.
pub const PENDING_EXAMS: u32 = 2;

/// Controller over `store` with default config and a fixed exam feed.
pub fn controller(store: SharedSessionStore) -> TestController {
    controller_with(store, &ShellConfig::default())
}

pub fn controller_with(store: SharedSessionStore, config: &ShellConfig) -> TestController {
    let _ = dotenvy::dotenv();
    NavigationController::new(
        store,
        SimulatedIdentityProvider,
        StaticExamFeed::new(Some(PENDING_EXAMS)),
        config,
    )
}

/// A fresh in-memory store, returned both typed and shared.
pub fn memory_store() -> (Rc<MemorySessionStore>, SharedSessionStore) {
    let store = Rc::new(MemorySessionStore::new());
    let shared: SharedSessionStore = store.clone();
    (store, shared)
}

/// A store persisting to `dir`, as a restarted process would open it.
pub fn file_store(dir: &Path) -> Rc<PersistedSessionStore<FileBackend>> {
    Rc::new(PersistedSessionStore::new(FileBackend::new(dir)))
}

pub fn student(name: &str) -> Identity {
    Identity::new(name, format!("{}@school.edu", name.to_lowercase()), Role::Student)
}

pub fn teacher(name: &str) -> Identity {
    Identity::new(name, format!("{}@school.edu", name.to_lowercase()), Role::Teacher)
}

pub fn sign_in_request(role: Role, name: Option<&str>) -> SignInRequest {
    SignInRequest {
        email: "an@school.edu".to_string(),
        password: "hunter22".to_string(),
        role,
        name: name.map(str::to_string),
        remember_me: false,
    }
}

pub fn sign_up_request(password: &str, confirm: &str) -> SignUpRequest {
    SignUpRequest {
        name: "Chi".to_string(),
        email: "chi@school.edu".to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
        role: Role::Teacher,
    }
}

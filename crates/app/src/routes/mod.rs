pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod placeholder;

use dioxus::prelude::*;
use shared_types::{Identity, Session};
use shell::{Destination, Feature, GuardDecision, ShellFrame, StaticExamFeed};

use crate::components::header::Header;
use crate::components::side_nav::SideNav;
use crate::session::use_session;
use crate::SidebarState;

use auth::Auth;
use dashboard::Dashboard;
use landing::Landing;
use not_found::NotFound;
use placeholder::Placeholder;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[layout(PublicOnly)]
        #[route("/auth")]
        Auth {},
    #[end_layout]
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/tests")]
        ExamManagement {},
        #[route("/tests/create")]
        CreateExam {},
        #[route("/analytics")]
        Analytics {},
        #[route("/classes")]
        Classes {},
        #[route("/classes/invite")]
        InviteStudents {},
        #[route("/reports")]
        Reports {},
        #[route("/exams")]
        Exams {},
        #[route("/mindmap")]
        Mindmap {},
        #[route("/achievements")]
        Achievements {},
        #[route("/practice")]
        Practice {},
        #[route("/upcoming")]
        Upcoming {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// The shell destination this route renders.
    pub fn destination(&self) -> Destination {
        match self {
            Route::Landing {} => Destination::Landing,
            Route::Auth {} => Destination::Auth,
            Route::Dashboard {} => Destination::Dashboard,
            Route::ExamManagement {} => Destination::Feature(Feature::ExamManagement),
            Route::CreateExam {} => Destination::Feature(Feature::CreateExam),
            Route::Analytics {} => Destination::Feature(Feature::Analytics),
            Route::Classes {} => Destination::Feature(Feature::Classes),
            Route::InviteStudents {} => Destination::Feature(Feature::InviteStudents),
            Route::Reports {} => Destination::Feature(Feature::Reports),
            Route::Exams {} => Destination::Feature(Feature::Exams),
            Route::Mindmap {} => Destination::Feature(Feature::Mindmap),
            Route::Achievements {} => Destination::Feature(Feature::Achievements),
            Route::Practice {} => Destination::Feature(Feature::Practice),
            Route::Upcoming {} => Destination::Feature(Feature::Upcoming),
            Route::NotFound { route } => {
                Destination::NotFound(format!("/{}", route.join("/")))
            }
        }
    }

    /// Route for a layout path such as a menu entry's.
    pub fn for_path(path: &str) -> Route {
        Route::from(Destination::parse(path, ""))
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Landing => Route::Landing {},
            Destination::Auth => Route::Auth {},
            Destination::Dashboard => Route::Dashboard {},
            Destination::Feature(feature) => match feature {
                Feature::ExamManagement => Route::ExamManagement {},
                Feature::CreateExam => Route::CreateExam {},
                Feature::Analytics => Route::Analytics {},
                Feature::Classes => Route::Classes {},
                Feature::InviteStudents => Route::InviteStudents {},
                Feature::Reports => Route::Reports {},
                Feature::Exams => Route::Exams {},
                Feature::Mindmap => Route::Mindmap {},
                Feature::Achievements => Route::Achievements {},
                Feature::Practice => Route::Practice {},
                Feature::Upcoming => Route::Upcoming {},
            },
            Destination::NotFound(path) => Route::NotFound {
                route: path
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

/// Shown for the one frame between a guard decision and the router replace.
#[component]
fn Redirecting(to: Route) -> Element {
    rsx! {
        div { class: "guard-redirect",
            p { "Redirecting..." }
            Link { to, "Continue" }
        }
    }
}

/// Public-only guard: signed-in visitors go to the dashboard.
#[component]
fn PublicOnly() -> Element {
    let session = use_session();
    let route: Route = use_route();

    match session.guard(&route.destination()) {
        GuardDecision::Render(_) => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect(to) => {
            let to = Route::from(to);
            navigator().replace(to.clone());
            rsx! { Redirecting { to } }
        }
    }
}

/// Protected guard: signed-out visitors go to sign-in, everyone else gets
/// the shell frame.
///
/// Runs on every render of a protected route, so a sign-out elsewhere takes
/// effect the next time any protected page is shown.
#[component]
fn Protected() -> Element {
    let session = use_session();
    let route: Route = use_route();

    match session.guard(&route.destination()) {
        GuardDecision::Render(Session::Present(identity)) => rsx! {
            Framed { identity, current: route.destination() }
        },
        GuardDecision::Render(Session::Absent) | GuardDecision::Redirect(_) => {
            navigator().replace(Route::Auth {});
            rsx! { Redirecting { to: Route::Auth {} } }
        }
    }
}

/// Identity the protected guard resolved, for pages inside the frame.
#[derive(Clone, Copy, PartialEq)]
pub struct SignedIn(Signal<Identity>);

/// The signed-in identity. Only valid below the protected layout.
pub fn use_signed_in() -> Identity {
    let SignedIn(identity) = use_context();
    let identity = identity.read().clone();
    identity
}

/// Header and side navigation around every protected page.
#[component]
fn Framed(identity: Identity, current: Destination) -> Element {
    let exams: StaticExamFeed = use_context();
    let sidebar: SidebarState = use_context();
    let SignedIn(mut signed_in) = use_context_provider(|| SignedIn(Signal::new(identity.clone())));
    if *signed_in.peek() != identity {
        signed_in.set(identity.clone());
    }

    let frame = ShellFrame::new(identity, &exams, current, (sidebar.mode)());
    let class = if frame.mode.shows_labels() {
        "shell"
    } else {
        "shell shell-collapsed"
    };

    rsx! {
        div { class,
            SideNav { frame: frame.clone() }
            div { class: "shell-main",
                Header { frame }
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn ExamManagement() -> Element {
    rsx! { Placeholder { feature: Feature::ExamManagement } }
}

#[component]
fn CreateExam() -> Element {
    rsx! { Placeholder { feature: Feature::CreateExam } }
}

#[component]
fn Analytics() -> Element {
    rsx! { Placeholder { feature: Feature::Analytics } }
}

#[component]
fn Classes() -> Element {
    rsx! { Placeholder { feature: Feature::Classes } }
}

#[component]
fn InviteStudents() -> Element {
    rsx! { Placeholder { feature: Feature::InviteStudents } }
}

#[component]
fn Reports() -> Element {
    rsx! { Placeholder { feature: Feature::Reports } }
}

#[component]
fn Exams() -> Element {
    rsx! { Placeholder { feature: Feature::Exams } }
}

#[component]
fn Mindmap() -> Element {
    rsx! { Placeholder { feature: Feature::Mindmap } }
}

#[component]
fn Achievements() -> Element {
    rsx! { Placeholder { feature: Feature::Achievements } }
}

#[component]
fn Practice() -> Element {
    rsx! { Placeholder { feature: Feature::Practice } }
}

#[component]
fn Upcoming() -> Element {
    rsx! { Placeholder { feature: Feature::Upcoming } }
}

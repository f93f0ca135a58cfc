pub mod student;
pub mod teacher;

use dioxus::prelude::*;
use shared_types::DashboardVariant;
use shell::layout_for;

use crate::routes::use_signed_in;

/// Role-adaptive dashboard: mounts the variant the role's layout names.
#[component]
pub fn Dashboard() -> Element {
    let identity = use_signed_in();

    match layout_for(identity.role()).dashboard {
        DashboardVariant::TeacherDashboard => rsx! { teacher::TeacherDashboard { identity } },
        DashboardVariant::StudentDashboard => rsx! { student::StudentDashboard { identity } },
    }
}

/// One headline figure on a dashboard.
#[component]
pub fn StatCard(title: &'static str, value: String, caption: &'static str) -> Element {
    rsx! {
        div { class: "card stat-card",
            p { class: "stat-label", "{title}" }
            span { class: "stat-value", "{value}" }
            p { class: "stat-caption", "{caption}" }
        }
    }
}

use dioxus::prelude::*;
use shared_types::{Identity, Role};
use shell::layout_for;

use crate::components::icon::NavIcon;
use crate::routes::dashboard::StatCard;
use crate::routes::Route;

/// Figures come from the statistics service; until it is wired in they read
/// as unavailable.
const UNAVAILABLE: &str = "\u{2014}";

#[component]
pub fn TeacherDashboard(identity: Identity) -> Element {
    let layout = layout_for(Role::Teacher);
    let name = identity.name();

    rsx! {
        div { class: "dashboard-page",
            div { class: "dashboard-heading",
                h2 { class: "dashboard-title", "Teacher Dashboard" }
                p { class: "dashboard-subtitle", "Welcome back, {name}." }
            }

            div { class: "stats-grid",
                StatCard { title: "Total Exams", value: UNAVAILABLE.to_string(), caption: "This term" }
                StatCard { title: "Active Students", value: UNAVAILABLE.to_string(), caption: "Across your classes" }
                StatCard { title: "Pending Grading", value: UNAVAILABLE.to_string(), caption: "Submissions" }
                StatCard { title: "AI Insights", value: UNAVAILABLE.to_string(), caption: "New this week" }
            }

            div { class: "card",
                h3 { class: "card-title", "Quick Actions" }
                div { class: "quick-action-grid",
                    for action in layout.quick_actions {
                        Link {
                            key: "{action.path}",
                            to: Route::for_path(action.path),
                            class: "button button-{action.emphasis.class()}",
                            NavIcon { tag: action.icon }
                            "{action.label}"
                        }
                    }
                }
            }
        }
    }
}

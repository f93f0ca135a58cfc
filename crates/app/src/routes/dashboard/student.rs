use dioxus::prelude::*;
use shared_types::{Identity, Role};
use shell::{layout_for, ExamFeed, StaticExamFeed};

use crate::components::icon::NavIcon;
use crate::routes::dashboard::StatCard;
use crate::routes::Route;

const UNAVAILABLE: &str = "\u{2014}";

#[component]
pub fn StudentDashboard(identity: Identity) -> Element {
    let exams: StaticExamFeed = use_context();
    let layout = layout_for(Role::Student);
    let name = identity.name();
    let pending = exams
        .pending_exam_count(&identity)
        .map(|n| n.to_string())
        .unwrap_or_else(|| UNAVAILABLE.to_string());

    rsx! {
        div { class: "dashboard-page",
            div { class: "dashboard-heading",
                h2 { class: "dashboard-title", "Hello, {name}!" }
                p { class: "dashboard-subtitle", "Ready to keep learning?" }
            }

            div { class: "stats-grid",
                StatCard { title: "Pending Exams", value: pending, caption: "Waiting for you" }
                StatCard { title: "Average Score", value: UNAVAILABLE.to_string(), caption: "This term" }
                StatCard { title: "Completed", value: UNAVAILABLE.to_string(), caption: "This week" }
                StatCard { title: "Class Rank", value: UNAVAILABLE.to_string(), caption: "In your class" }
            }

            div { class: "card",
                h3 { class: "card-title", "Start Learning" }
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

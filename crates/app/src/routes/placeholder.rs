use dioxus::prelude::*;
use shell::Feature;

use crate::routes::Route;

/// Stand-in content for a protected page whose feature is not built yet.
#[component]
pub fn Placeholder(feature: Feature) -> Element {
    let title = feature.title();

    rsx! {
        section { class: "placeholder-page",
            h2 { class: "placeholder-title", "{title}" }
            p { class: "placeholder-message", "This section is coming soon." }
            Link { to: Route::Dashboard {}, class: "button button-outline", "Back to Dashboard" }
        }
    }
}

use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page. Reachable signed in or out.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    use_hook(|| tracing::warn!(path = %path, "no route matched"));

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " does not exist or has moved."
                }
                div { class: "not-found-actions",
                    Link { to: Route::Landing {}, class: "button button-primary", "Back to Home" }
                    Link { to: Route::Dashboard {}, class: "button button-outline", "Dashboard" }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shell::{sign_out, HeaderSummary, ShellFrame};

use crate::routes::Route;
use crate::session::use_session;

/// Top bar: page title, identity summary and sign-out.
#[component]
pub fn Header(frame: ShellFrame) -> Element {
    let mut session = use_session();
    let title = frame.title();

    let handle_sign_out = move |_: MouseEvent| {
        let to = sign_out(session.store());
        session.sync();
        navigator().push(Route::from(to));
    };

    rsx! {
        header { class: "navbar",
            h1 { class: "navbar-title", "{title}" }
            div { class: "navbar-spacer" }
            IdentityBadge { summary: frame.header() }
            button {
                class: "button button-ghost",
                r#type: "button",
                onclick: handle_sign_out,
                "Sign Out"
            }
        }
    }
}

/// Avatar initial beside name, email and role.
#[component]
pub fn IdentityBadge(summary: HeaderSummary) -> Element {
    rsx! {
        div { class: "identity",
            span { class: "avatar", "{summary.initial}" }
            div { class: "identity-text",
                span { class: "identity-name", "{summary.name}" }
                if !summary.email.is_empty() {
                    span { class: "identity-email", "{summary.email}" }
                }
            }
            span { class: "role-badge", "{summary.role_label}" }
        }
    }
}

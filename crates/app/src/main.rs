use dioxus::prelude::*;
use shell::{default_store, SidebarMode, StaticExamFeed};

mod components;
mod routes;
mod session;

use components::toast::ToastProvider;
use routes::Route;
use session::SessionContext;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

/// Sidebar state shared by the frame and its toggle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarState {
    pub mode: Signal<SidebarMode>,
}

#[component]
fn App() -> Element {
    let config = shell::config::load_config();

    use_hook(|| {
        tracing::info!(
            platform = client_platform(),
            base_path = %config.base_path,
            "starting EduMap"
        );
    });

    use_context_provider(|| SessionContext::new(default_store(config)));
    use_context_provider(|| StaticExamFeed::new(config.exams.pending));
    use_context_provider(|| SidebarState {
        mode: Signal::new(SidebarMode::from_collapsed(config.sidebar.collapsed)),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            Router::<Route> {}
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBookOpen;
use dioxus_free_icons::Icon;
use shell::{ActionItem, NavItem, ShellFrame};

use crate::components::icon::NavIcon;
use crate::routes::Route;
use crate::SidebarState;

/// Side navigation: quick actions above the role menu.
#[component]
pub fn SideNav(frame: ShellFrame) -> Element {
    let mut sidebar: SidebarState = use_context();
    let expanded = frame.mode.shows_labels();
    let heading_class = if frame.section_labels_visible() {
        "sidebar-group-label"
    } else {
        "sidebar-group-label sr-only"
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-brand",
                Icon { icon: LdBookOpen, width: 22, height: 22 }
                if expanded {
                    span { class: "sidebar-brand-name", "EduMap" }
                }
                button {
                    class: "sidebar-toggle",
                    r#type: "button",
                    aria_label: if expanded { "Collapse sidebar" } else { "Expand sidebar" },
                    onclick: move |_| {
                        let next = sidebar.mode.peek().toggled();
                        sidebar.mode.set(next);
                    },
                    "\u{2630}"
                }
            }

            nav { class: "sidebar-content",
                section { class: "sidebar-group",
                    h2 { class: heading_class, "Quick actions" }
                    ul { class: "sidebar-menu",
                        for action in frame.quick_action_items() {
                            QuickActionLink { key: "{action.path}", action }
                        }
                    }
                }
                section { class: "sidebar-group",
                    h2 { class: heading_class, "Main menu" }
                    ul { class: "sidebar-menu",
                        for item in frame.menu_items() {
                            MenuLink { key: "{item.path}", item }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickActionLink(action: ActionItem) -> Element {
    let class = format!("quick-action quick-action-{}", action.emphasis.class());

    rsx! {
        li { title: action.title,
            Link { to: Route::for_path(action.path), class,
                NavIcon { tag: action.icon }
                if let Some(label) = action.label {
                    span { class: "nav-label", "{label}" }
                }
            }
        }
    }
}

#[component]
fn MenuLink(item: NavItem) -> Element {
    rsx! {
        li { title: item.title,
            Link {
                to: Route::for_path(item.path),
                class: if item.active { "nav-link active" } else { "nav-link" },
                NavIcon { tag: item.icon }
                if let Some(label) = item.label {
                    span { class: "nav-label", "{label}" }
                }
                if let Some(count) = item.badge {
                    span { class: "nav-badge", "{count}" }
                }
            }
        }
    }
}

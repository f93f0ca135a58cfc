use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBrain, LdFileText, LdTrendingUp, LdUsers};
use dioxus_free_icons::Icon;

use crate::routes::Route;
use crate::session::use_session;

/// Public landing page. Links to sign-in, or straight to the dashboard when
/// a session already exists.
#[component]
pub fn Landing() -> Element {
    let session = use_session();
    let signed_in = session.current.read().is_present();
    let start = if signed_in {
        Route::Dashboard {}
    } else {
        Route::Auth {}
    };

    rsx! {
        div { class: "landing-page",
            header { class: "landing-nav",
                span { class: "landing-brand", "EduMap" }
                if signed_in {
                    Link { to: Route::Dashboard {}, class: "button button-primary", "Open Dashboard" }
                } else {
                    Link { to: Route::Auth {}, class: "button button-primary", "Sign In" }
                }
            }

            section { class: "landing-hero",
                h1 { "Learning maps for every classroom" }
                p { "Exams, analytics and personalized study paths for teachers and students." }
                Link { to: start, class: "button button-primary button-lg", "Get Started" }
            }

            section { class: "landing-features",
                FeatureCard { title: "AI Mindmap Learning", description: "Turn mistakes into a personal study map.",
                    Icon { icon: LdBrain, width: 22, height: 22 }
                }
                FeatureCard { title: "Smart Exams", description: "Create and run online exams with automatic grading.",
                    Icon { icon: LdFileText, width: 22, height: 22 }
                }
                FeatureCard { title: "Class Management", description: "Follow each student and the whole class.",
                    Icon { icon: LdUsers, width: 22, height: 22 }
                }
                FeatureCard { title: "Detailed Reports", description: "See where learning improves and where it stalls.",
                    Icon { icon: LdTrendingUp, width: 22, height: 22 }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "card feature-card",
            div { class: "feature-icon", {children} }
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}

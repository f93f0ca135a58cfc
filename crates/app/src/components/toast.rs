use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast as prim;
use shell::{Notification, Tone};

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        prim::ToastProvider { ..props }
    }
}

/// How long a toast of `tone` stays up. Errors linger so they can be read.
fn lifetime(tone: Tone) -> Duration {
    match tone {
        Tone::Success => Duration::from_secs(4),
        Tone::Error => Duration::from_secs(6),
    }
}

/// Raise `notification` as a toast that dismisses itself.
pub fn show_notification(toasts: Toasts, notification: Notification) {
    let options = ToastOptions::new()
        .description(notification.description)
        .duration(lifetime(notification.tone));

    match notification.tone {
        Tone::Success => toasts.success(notification.title, options),
        Tone::Error => toasts.error(notification.title, options),
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBrain, LdGraduationCap, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{AuthTab, Role, SignInRequest, SignUpRequest};
use shell::{AuthAction, Notification, SimulatedIdentityProvider, SubmitState};

use crate::components::toast::{show_notification, use_toast};
use crate::routes::Route;
use crate::session::use_session;

/// Sign-in / sign-up page with role selection.
#[component]
pub fn Auth() -> Element {
    let session = use_session();
    let toasts = use_toast();

    let mut tab = use_signal(AuthTab::default);
    let mut role = use_signal(Role::default);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut submit = use_signal(SubmitState::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submit.peek().is_pending() {
            return;
        }
        let mut session = session.clone();
        spawn(async move {
            let action = AuthAction::new(SimulatedIdentityProvider, session.store.clone());
            let on_state = move |state: &SubmitState| submit.set(state.clone());
            let outcome = match tab() {
                AuthTab::SignIn => {
                    let request = sign_in_request(
                        name(),
                        email(),
                        password(),
                        role(),
                        remember_me(),
                    );
                    action.sign_in(&request, on_state).await
                }
                AuthTab::SignUp => {
                    let request = SignUpRequest {
                        name: name(),
                        email: email(),
                        password: password(),
                        confirm_password: confirm_password(),
                        role: role(),
                    };
                    action.sign_up(&request, on_state).await
                }
            };

            if let Some(notification) = Notification::for_outcome(&outcome) {
                show_notification(toasts, notification);
            }
            if let SubmitState::Succeeded(identity) = outcome {
                tracing::info!(role = %identity.role(), "signed in");
                session.sync();
                navigator().replace(Route::Dashboard {});
            }
        });
    };

    let pending = submit().is_pending();
    let password_type = if show_password() { "text" } else { "password" };
    let submit_label = match (tab(), pending) {
        (AuthTab::SignIn, false) => "Sign In",
        (AuthTab::SignIn, true) => "Signing in...",
        (AuthTab::SignUp, false) => "Create Account",
        (AuthTab::SignUp, true) => "Creating account...",
    };
    let field_error = |field: &str| {
        submit
            .read()
            .error()
            .and_then(|e| e.field_errors.get(field).cloned())
    };
    let name_error = field_error("name");
    let confirm_error = field_error("confirm_password");

    rsx! {
        div { class: "auth-page",
            div { class: "card auth-card",
                div { class: "auth-header",
                    div { class: "auth-logo",
                        Icon { icon: LdBrain, width: 28, height: 28 }
                    }
                    h1 { class: "auth-title", "EduMap" }
                    p { class: "auth-subtitle", "The smart learning platform" }
                }

                div { class: "tabs", role: "tablist",
                    button {
                        r#type: "button",
                        role: "tab",
                        class: if tab() == AuthTab::SignIn { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(AuthTab::SignIn),
                        "Sign In"
                    }
                    button {
                        r#type: "button",
                        role: "tab",
                        class: if tab() == AuthTab::SignUp { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(AuthTab::SignUp),
                        "Sign Up"
                    }
                }

                form { class: "auth-form", onsubmit: handle_submit,
                    RolePicker { selected: role(), on_select: move |r| role.set(r) }

                    if tab() == AuthTab::SignUp {
                        div { class: "form-field",
                            label { r#for: "name", "Full name" }
                            input {
                                id: "name",
                                class: "input",
                                placeholder: "Nguyen Van An",
                                value: "{name}",
                                oninput: move |e: FormEvent| name.set(e.value()),
                            }
                            if let Some(msg) = name_error {
                                p { class: "form-error", "{msg}" }
                            }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "input",
                            r#type: "email",
                            placeholder: "your.email@example.com",
                            required: true,
                            value: "{email}",
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "password", "Password" }
                        div { class: "input-with-action",
                            input {
                                id: "password",
                                class: "input",
                                r#type: password_type,
                                required: true,
                                value: "{password}",
                                oninput: move |e: FormEvent| password.set(e.value()),
                            }
                            button {
                                r#type: "button",
                                class: "button button-ghost button-sm",
                                onclick: move |_| show_password.toggle(),
                                if show_password() { "Hide" } else { "Show" }
                            }
                        }
                    }

                    if tab() == AuthTab::SignUp {
                        div { class: "form-field",
                            label { r#for: "confirm_password", "Confirm password" }
                            input {
                                id: "confirm_password",
                                class: "input",
                                r#type: password_type,
                                required: true,
                                value: "{confirm_password}",
                                oninput: move |e: FormEvent| confirm_password.set(e.value()),
                            }
                            if let Some(msg) = confirm_error {
                                p { class: "form-error", "{msg}" }
                            }
                        }
                    } else {
                        label { class: "checkbox-row",
                            input {
                                r#type: "checkbox",
                                checked: remember_me(),
                                onchange: move |e: FormEvent| remember_me.set(e.checked()),
                            }
                            "Remember me"
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "button button-primary button-lg button-block",
                        disabled: pending,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}

/// Build the sign-in submission. The form state is shared by both tabs, so a
/// name typed on the sign-up tab carries over.
fn sign_in_request(
    name: String,
    email: String,
    password: String,
    role: Role,
    remember_me: bool,
) -> SignInRequest {
    SignInRequest {
        email,
        password,
        role,
        name: Some(name).filter(|n| !n.trim().is_empty()),
        remember_me,
    }
}

/// Two-button role selector. Student is preselected.
#[component]
fn RolePicker(selected: Role, on_select: EventHandler<Role>) -> Element {
    rsx! {
        div { class: "form-field",
            span { class: "form-label", "I am a" }
            div { class: "role-picker",
                for r in [Role::Student, Role::Teacher] {
                    button {
                        key: "{r}",
                        r#type: "button",
                        class: if r == selected { "role-option selected" } else { "role-option" },
                        onclick: move |_| on_select.call(r),
                        if r == Role::Student {
                            Icon { icon: LdGraduationCap, width: 20, height: 20 }
                        } else {
                            Icon { icon: LdUsers, width: 20, height: 20 }
                        }
                        span { "{r.label()}" }
                    }
                }
            }
        }
    }
}

//! Login page and the login card shared with the combined home view.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input, Label, StatusBanner, StatusKind};
use ui::{make_client, sign_in, use_auth};

use super::destination_for;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in with a routable role: skip the form.
    if let Some(user) = auth().user {
        if let Some(dest) = destination_for(&user.role) {
            nav.replace(dest);
            return rsx! {};
        }
    }

    rsx! {
        div {
            class: "auth-page",
            LoginForm {}
            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}

/// Email/password card. On success the session is persisted and the user
/// is routed by role; a role outside the known pair shows an inline error
/// and stays put.
#[component]
pub fn LoginForm() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            submitting.set(true);
            match make_client().login(&e, &p).await {
                Ok(response) => {
                    sign_in(auth, &response.token, &response.user);
                    match destination_for(&response.user.role) {
                        Some(dest) => {
                            nav.replace(dest);
                        }
                        None => {
                            submitting.set(false);
                            error.set(Some("Unauthorized role.".to_string()));
                        }
                    }
                }
                Err(err) => {
                    tracing::error!("Login failed: {err}");
                    submitting.set(false);
                    error.set(Some(err.message()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "auth-card",
            onsubmit: handle_login,

            h2 { "Login" }
            p { class: "auth-hint", "Please sign in to continue" }

            if let Some(err) = error() {
                StatusBanner { kind: StatusKind::Error, message: err }
            }

            div {
                class: "form-field",
                Label { html_for: "login-email", "Email Address" }
                Input {
                    id: "login-email",
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "login-password", "Password" }
                Input {
                    id: "login-password",
                    r#type: "password",
                    placeholder: "Enter your password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                class: "w-full",
                disabled: submitting(),
                if submitting() { "Signing in..." } else { "Sign In" }
            }
        }
    }
}

//! Registration page and the register card shared with the home view.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input, Label, StatusBanner, StatusKind};
use ui::{make_client, sign_in, use_auth};

use super::destination_for;
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
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
            RegisterForm {}
            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in here" }
            }
        }
    }
}

/// Name/email/password card. On success the session is persisted and the
/// new student lands on the dashboard root; a validation failure surfaces
/// the backend's first field-level message.
#[component]
pub fn RegisterForm() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set(Some("Please enter your name".to_string()));
                return;
            }
            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter a password".to_string()));
                return;
            }

            submitting.set(true);
            match make_client().register(&n, &e, &p).await {
                Ok(response) => {
                    sign_in(auth, &response.token, &response.user);
                    nav.replace(Route::DashboardHome {});
                }
                Err(err) => {
                    tracing::error!("Registration failed: {err}");
                    submitting.set(false);
                    error.set(Some(err.message()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "auth-card",
            onsubmit: handle_register,

            h2 { "Create Your Account" }

            if let Some(err) = error() {
                StatusBanner { kind: StatusKind::Error, message: err }
            }

            div {
                class: "form-field",
                Label { html_for: "register-name", "Full Name" }
                Input {
                    id: "register-name",
                    r#type: "text",
                    placeholder: "Full Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "register-email", "Email" }
                Input {
                    id: "register-email",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "register-password", "Password" }
                Input {
                    id: "register-password",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                class: "w-full",
                disabled: submitting(),
                if submitting() { "Creating account..." } else { "Register" }
            }
        }
    }
}

//! Fetch-then-submit user editor. Password fields are optional on
//! update; empty fields are left out of the request body entirely.

use api::UserUpdate;
use dioxus::prelude::*;
use session::Role;

use ui::components::{Button, ButtonVariant, Input, Label, StatusBanner, StatusKind};
use ui::make_client;

use crate::Route;

#[component]
pub fn EditUser(id: u64) -> Element {
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| Option::<Role>::None);
    let mut password = use_signal(String::new);
    let mut password_confirmation = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(use_reactive!(|(id,)| async move {
        match make_client().user_detail(id).await {
            Ok(detail) => {
                name.set(detail.user.name);
                email.set(detail.user.email);
                role.set(Some(detail.user.role));
            }
            Err(err) => {
                tracing::error!("Failed to fetch user: {err}");
                error.set(Some("Failed to fetch user data".to_string()));
            }
        }
        loading.set(false);
    }));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            submitting.set(true);

            let update = UserUpdate {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: Some(password()).filter(|p| !p.is_empty()),
                password_confirmation: Some(password_confirmation())
                    .filter(|p| !p.is_empty()),
            };

            match make_client().update_user(id, &update).await {
                Ok(()) => {
                    nav.push(Route::ManageUsers {});
                }
                Err(err) => {
                    tracing::error!("Failed to update user: {err}");
                    submitting.set(false);
                    error.set(Some(err.message()));
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "view-page",
                p { class: "view-muted", "Loading user..." }
            }
        };
    }

    rsx! {
        div {
            class: "view-page",
            h2 { "Edit User Profile" }
            p { class: "view-muted", "Update user information" }

            if let Some(err) = error() {
                StatusBanner { kind: StatusKind::Error, message: err }
            }

            form {
                class: "settings-card",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    Label { html_for: "edit-user-name", "Full Name" }
                    Input {
                        id: "edit-user-name",
                        value: name(),
                        required: true,
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "edit-user-email", "Email Address" }
                    Input {
                        id: "edit-user-email",
                        r#type: "email",
                        value: email(),
                        required: true,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { "Role" }
                    // The role is assigned by the backend and shown read-only.
                    div {
                        class: "readonly-field",
                        {role().map(|r| r.to_string()).unwrap_or_default()}
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        Label { html_for: "edit-user-password", "New Password (optional)" }
                        Input {
                            id: "edit-user-password",
                            r#type: "password",
                            placeholder: "Enter new password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "edit-user-password-confirm", "Confirm Password" }
                        Input {
                            id: "edit-user-password-confirm",
                            r#type: "password",
                            placeholder: "Confirm new password",
                            value: password_confirmation(),
                            oninput: move |evt: FormEvent| password_confirmation.set(evt.value()),
                        }
                    }
                }

                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { nav.push(Route::ManageUsers {}); },
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

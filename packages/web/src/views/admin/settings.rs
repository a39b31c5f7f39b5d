//! Admin's own profile settings.
//!
//! Prefilled from the cached session user; a successful update persists
//! the backend's fresh record back into the session so the sidebar and
//! later renders agree with it.

use api::UserUpdate;
use dioxus::prelude::*;
use session::SessionStore;

use ui::components::{Button, ButtonVariant, Input, Label, StatusBanner, StatusKind};
use ui::{make_client, make_store, sign_in, use_auth};

#[component]
pub fn AdminSettings() -> Element {
    let auth = use_auth();
    let cached = auth().user;
    let mut name = use_signal(|| cached.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut email = use_signal(|| cached.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut password = use_signal(String::new);
    let mut password_confirmation = use_signal(String::new);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            status.set(None);
            saving.set(true);

            let update = UserUpdate {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: Some(password()).filter(|p| !p.is_empty()),
                password_confirmation: Some(password_confirmation())
                    .filter(|p| !p.is_empty()),
            };

            match make_client().admin_update_profile(&update).await {
                Ok(updated) => {
                    // Keep the persisted session in step with the backend.
                    if let Some(token) = make_store().token() {
                        sign_in(auth, &token, &updated);
                    }
                    password.set(String::new());
                    password_confirmation.set(String::new());
                    status.set(Some(Ok("Profile updated successfully!".to_string())));
                }
                Err(err) => {
                    tracing::error!("Failed to update profile: {err}");
                    status.set(Some(Err(err.message())));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "view-page",
            h2 { "Admin Settings" }

            form {
                class: "settings-card",
                onsubmit: handle_submit,

                if let Some(Ok(message)) = status() {
                    StatusBanner { kind: StatusKind::Success, message: message }
                }
                if let Some(Err(message)) = status() {
                    StatusBanner { kind: StatusKind::Error, message: message }
                }

                h3 { "Personal Information" }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        Label { html_for: "admin-name", "Full Name" }
                        Input {
                            id: "admin-name",
                            value: name(),
                            required: true,
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "admin-email", "Email Address" }
                        Input {
                            id: "admin-email",
                            r#type: "email",
                            value: email(),
                            required: true,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                }

                h3 { "Password Settings" }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        Label { html_for: "admin-password", "New Password" }
                        Input {
                            id: "admin-password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "admin-password-confirm", "Confirm Password" }
                        Input {
                            id: "admin-password-confirm",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password_confirmation(),
                            oninput: move |evt: FormEvent| password_confirmation.set(evt.value()),
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    class: "w-full",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}

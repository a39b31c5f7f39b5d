//! Account settings: fetch-then-edit, with the profile and password forms
//! submitting independently and keeping separate success/error banners.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input, Label, StatusBanner, StatusKind};
use ui::make_client;

#[component]
pub fn UserSettings() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut profile_status = use_signal(|| Option::<Result<String, String>>::None);
    let mut profile_saving = use_signal(|| false);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut new_password_confirmation = use_signal(String::new);
    let mut password_status = use_signal(|| Option::<Result<String, String>>::None);
    let mut password_saving = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match make_client().current_user().await {
            Ok(user) => {
                name.set(user.name);
                email.set(user.email);
            }
            Err(err) => tracing::error!("Failed to fetch user: {err}"),
        }
        loading.set(false);
    });

    let handle_profile_update = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            profile_status.set(None);
            profile_saving.set(true);
            match make_client().update_profile(&name(), &email()).await {
                Ok(()) => {
                    profile_status.set(Some(Ok("Profile updated successfully!".to_string())));
                }
                Err(err) => {
                    tracing::error!("Update failed: {err}");
                    profile_status.set(Some(Err(err.message())));
                }
            }
            profile_saving.set(false);
        });
    };

    let handle_password_update = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            password_status.set(None);
            password_saving.set(true);
            let result = make_client()
                .change_password(
                    &current_password(),
                    &new_password(),
                    &new_password_confirmation(),
                )
                .await;
            match result {
                Ok(()) => {
                    password_status.set(Some(Ok("Password changed successfully!".to_string())));
                    current_password.set(String::new());
                    new_password.set(String::new());
                    new_password_confirmation.set(String::new());
                }
                Err(err) => {
                    tracing::error!("Password change failed: {err}");
                    password_status.set(Some(Err(err.message())));
                }
            }
            password_saving.set(false);
        });
    };

    rsx! {
        div {
            class: "view-page settings-page",
            h2 { "Account Settings" }
            p { class: "view-muted", "Manage your profile and security settings" }

            // Profile section
            form {
                class: "settings-card",
                onsubmit: handle_profile_update,
                h3 { "Profile Information" }

                if let Some(status) = profile_status() {
                    FormStatus { status: status }
                }

                div {
                    class: "form-field",
                    Label { html_for: "settings-name", "Full Name" }
                    Input {
                        id: "settings-name",
                        r#type: "text",
                        placeholder: "Enter your full name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "settings-email", "Email Address" }
                    Input {
                        id: "settings-email",
                        r#type: "email",
                        placeholder: "Enter your email address",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading() || profile_saving(),
                    if profile_saving() { "Saving..." } else { "Update Profile" }
                }
            }

            // Password section
            form {
                class: "settings-card",
                onsubmit: handle_password_update,
                h3 { "Security Settings" }

                if let Some(status) = password_status() {
                    FormStatus { status: status }
                }

                div {
                    class: "form-field",
                    Label { html_for: "settings-current-password", "Current Password" }
                    Input {
                        id: "settings-current-password",
                        r#type: "password",
                        placeholder: "Enter current password",
                        value: current_password(),
                        oninput: move |evt: FormEvent| current_password.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "settings-new-password", "New Password" }
                    Input {
                        id: "settings-new-password",
                        r#type: "password",
                        placeholder: "Enter new password",
                        value: new_password(),
                        oninput: move |evt: FormEvent| new_password.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "settings-confirm-password", "Confirm New Password" }
                    Input {
                        id: "settings-confirm-password",
                        r#type: "password",
                        placeholder: "Confirm new password",
                        value: new_password_confirmation(),
                        oninput: move |evt: FormEvent| new_password_confirmation.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: password_saving(),
                    if password_saving() { "Saving..." } else { "Change Password" }
                }
            }
        }
    }
}

#[component]
fn FormStatus(status: Result<String, String>) -> Element {
    match status {
        Ok(message) => rsx! { StatusBanner { kind: StatusKind::Success, message: message } },
        Err(message) => rsx! { StatusBanner { kind: StatusKind::Error, message: message } },
    }
}

//! Read-only profile view over the backend's record, not the cached copy.

use dioxus::prelude::*;

use ui::components::SkeletonBlock;
use ui::icons::{FaCalendar, FaCircleUser, FaEnvelope, FaShieldHalved};
use ui::{make_client, Icon};

#[component]
pub fn Profile() -> Element {
    let state = use_resource(move || async move {
        make_client().current_user().await.map_err(|err| {
            tracing::error!("Failed to load profile: {err}");
            "Failed to load profile information. Please try again later.".to_string()
        })
    });

    match state() {
        None => rsx! {
            div {
                class: "view-page profile-page",
                SkeletonBlock { class: "skeleton-avatar" }
                SkeletonBlock { class: "skeleton-title" }
                SkeletonBlock { class: "skeleton-line skeleton-wide" }
                SkeletonBlock { class: "skeleton-line" }
            }
        },
        Some(Err(message)) => rsx! {
            div {
                class: "view-page profile-page",
                div {
                    class: "status-banner status-error",
                    h2 { "Loading Error" }
                    p { "{message}" }
                }
            }
        },
        Some(Ok(user)) => rsx! {
            div {
                class: "view-page profile-page",

                header {
                    class: "profile-header",
                    span {
                        class: "identity-avatar identity-avatar-large",
                        Icon { icon: FaCircleUser, width: 48, height: 48 }
                    }
                    h1 { "{user.name}" }
                    span { class: "badge badge-role", "{user.role}" }
                }

                div {
                    class: "profile-card",
                    ProfileRow {
                        label: "Email Address",
                        value: user.email.clone(),
                        icon: rsx! { Icon { icon: FaEnvelope, width: 20, height: 20 } },
                    }
                    ProfileRow {
                        label: "Account Type",
                        value: user.role.to_string(),
                        icon: rsx! { Icon { icon: FaShieldHalved, width: 20, height: 20 } },
                    }
                    ProfileRow {
                        label: "Member Since",
                        value: user.created_at.clone().unwrap_or_else(|| "Not available".to_string()),
                        icon: rsx! { Icon { icon: FaCalendar, width: 20, height: 20 } },
                    }
                }
            }
        },
    }
}

#[component]
fn ProfileRow(label: String, value: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "profile-row",
            span { class: "profile-row-icon", {icon} }
            div {
                class: "profile-row-text",
                span { class: "profile-row-label", "{label}" }
                span { class: "profile-row-value", "{value}" }
            }
        }
    }
}

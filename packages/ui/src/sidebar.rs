//! Fixed navigation chrome shared by the admin and student shells.
//!
//! The sidebar owns no routing: links arrive as children built by the
//! shell, which wires each [`SidebarLink`] to its navigator. The identity
//! card shows a pulse placeholder until the shell hands it a user.

use dioxus::prelude::*;
use session::UserRecord;

use crate::icons::FaRightFromBracket;
use crate::Icon;

#[component]
pub fn Sidebar(
    brand: String,
    #[props(default = String::new())] subtitle: String,
    /// Identity card contents; `None` renders the loading placeholder.
    user: Option<UserRecord>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        aside {
            class: "sidebar",
            div {
                class: "sidebar-brand",
                h2 { "{brand}" }
                if !subtitle.is_empty() {
                    p { "{subtitle}" }
                }
            }

            div {
                class: "sidebar-identity",
                if let Some(ref user) = user {
                    div {
                        class: "identity-card",
                        span { class: "identity-avatar", {initial_of(&user.name)} }
                        div {
                            class: "identity-lines",
                            span { class: "identity-name", "{user.name}" }
                            span { class: "identity-email", "{user.email}" }
                        }
                    }
                } else {
                    div {
                        class: "identity-card",
                        div {
                            class: "identity-lines",
                            div { class: "skeleton skeleton-line skeleton-wide" }
                            div { class: "skeleton skeleton-line" }
                        }
                    }
                }
            }

            nav {
                class: "sidebar-nav",
                {children}
            }

            button {
                class: "sidebar-logout",
                onclick: move |_| on_logout.call(()),
                Icon { icon: FaRightFromBracket, width: 18, height: 18 }
                span { "Sign Out" }
            }
        }
    }
}

#[component]
pub fn SidebarLink(
    label: String,
    icon: Element,
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let class = if active {
        "sidebar-link sidebar-link-active"
    } else {
        "sidebar-link"
    };
    rsx! {
        button {
            class: "{class}",
            onclick: move |evt| onclick.call(evt),
            {icon}
            span { "{label}" }
        }
    }
}

fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

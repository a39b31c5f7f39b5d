use dioxus::prelude::*;

use ui::icons::{FaBookOpen, FaCircleUser, FaGraduationCap};
use ui::{use_auth, Icon};

use crate::Route;

/// Dashboard landing panel with shortcuts into the student sections.
#[component]
pub fn DashboardHome() -> Element {
    let auth = use_auth();
    let name = auth()
        .user
        .map(|user| user.name)
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        div {
            class: "view-page",
            h2 { "Welcome back, {name}!" }
            p { class: "view-muted", "Pick up where you left off or discover something new." }

            div {
                class: "shortcut-grid",
                Shortcut {
                    label: "All Courses",
                    description: "Browse the full catalog",
                    icon: rsx! { Icon { icon: FaGraduationCap, width: 24, height: 24 } },
                    to: Route::AllCourses {},
                }
                Shortcut {
                    label: "My Courses",
                    description: "Continue your enrolled courses",
                    icon: rsx! { Icon { icon: FaBookOpen, width: 24, height: 24 } },
                    to: Route::MyCourses {},
                }
                Shortcut {
                    label: "Profile",
                    description: "View your account details",
                    icon: rsx! { Icon { icon: FaCircleUser, width: 24, height: 24 } },
                    to: Route::Profile {},
                }
            }
        }
    }
}

#[component]
fn Shortcut(label: String, description: String, icon: Element, to: Route) -> Element {
    rsx! {
        Link {
            class: "shortcut-card",
            to: to,
            {icon}
            h3 { "{label}" }
            p { "{description}" }
        }
    }
}

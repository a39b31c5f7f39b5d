//! Student dashboard shell: guard, sidebar, logout dialog, content slot.

use dioxus::prelude::*;

use session::{guard, GuardDecision, Role, UserRecord};
use ui::components::ConfirmDialog;
use ui::icons::{FaBookOpen, FaCircleUser, FaGear, FaGraduationCap, FaHouse};
use ui::{make_client, sign_out, use_auth, Icon, Sidebar, SidebarLink};

use crate::Route;

#[component]
pub fn UserShell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut profile = use_signal(|| Option::<UserRecord>::None);
    let mut show_logout = use_signal(|| false);
    let route = use_route::<Route>();

    // The identity card shows the backend's record, not the cached session
    // copy. A failed fetch leaves the card blank and never blocks content.
    let _loader = use_resource(move || async move {
        match make_client().current_user().await {
            Ok(user) => profile.set(Some(user)),
            Err(err) => tracing::error!("Failed to load profile: {err}"),
        }
    });

    // Single authorization decision point for the dashboard subtree.
    match guard::evaluate(auth().user.as_ref(), Some(Role::User)) {
        GuardDecision::Allow => {}
        GuardDecision::ToLogin => {
            nav.replace(Route::Login {});
            return rsx! {};
        }
        GuardDecision::ToHome => {
            nav.replace(Route::Home {});
            return rsx! {};
        }
    }

    let on_dashboard = route == Route::DashboardHome {};
    let on_profile = route == Route::Profile {};
    let on_all_courses = route == Route::AllCourses {};
    let on_my_courses = route == Route::MyCourses {};
    let on_settings = route == Route::UserSettings {};

    rsx! {
        div {
            class: "shell",
            Sidebar {
                brand: "E-LearnPro",
                subtitle: "Student Dashboard",
                user: profile(),
                on_logout: move |_| show_logout.set(true),

                SidebarLink {
                    label: "Dashboard",
                    icon: rsx! { Icon { icon: FaHouse, width: 18, height: 18 } },
                    active: on_dashboard,
                    onclick: move |_| { nav.push(Route::DashboardHome {}); },
                }
                SidebarLink {
                    label: "Profile",
                    icon: rsx! { Icon { icon: FaCircleUser, width: 18, height: 18 } },
                    active: on_profile,
                    onclick: move |_| { nav.push(Route::Profile {}); },
                }
                SidebarLink {
                    label: "All Courses",
                    icon: rsx! { Icon { icon: FaGraduationCap, width: 18, height: 18 } },
                    active: on_all_courses,
                    onclick: move |_| { nav.push(Route::AllCourses {}); },
                }
                SidebarLink {
                    label: "My Courses",
                    icon: rsx! { Icon { icon: FaBookOpen, width: 18, height: 18 } },
                    active: on_my_courses,
                    onclick: move |_| { nav.push(Route::MyCourses {}); },
                }
                SidebarLink {
                    label: "Settings",
                    icon: rsx! { Icon { icon: FaGear, width: 18, height: 18 } },
                    active: on_settings,
                    onclick: move |_| { nav.push(Route::UserSettings {}); },
                }
            }

            main {
                class: "shell-content",
                Outlet::<Route> {}
            }
        }

        if show_logout() {
            ConfirmDialog {
                title: "Ready to Leave?",
                message: "Are you sure you want to sign out?",
                confirm_label: "Sign Out",
                cancel_label: "Stay Here",
                on_confirm: move |_| {
                    sign_out(auth);
                    show_logout.set(false);
                    nav.replace(Route::Home {});
                },
                on_cancel: move |_| show_logout.set(false),
            }
        }
    }
}

//! Admin dashboard shell. Trusts the guard decision: no second
//! role check happens past this point.

use dioxus::prelude::*;

use session::{guard, GuardDecision, Role};
use ui::components::ConfirmDialog;
use ui::icons::{FaChartPie, FaGear, FaGraduationCap, FaUsers};
use ui::{sign_out, use_auth, Icon, Sidebar, SidebarLink};

use crate::Route;

#[component]
pub fn AdminShell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut show_logout = use_signal(|| false);
    let route = use_route::<Route>();

    match guard::evaluate(auth().user.as_ref(), Some(Role::Admin)) {
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

    let on_dashboard = route == Route::AdminDashboard {};
    let on_courses = route == Route::ManageCourses {};
    let on_users = matches!(route, Route::ManageUsers {} | Route::EditUser { .. });
    let on_settings = route == Route::AdminSettings {};

    rsx! {
        div {
            class: "shell",
            Sidebar {
                brand: "E-LearnPro",
                subtitle: "Education Management Suite",
                user: auth().user,
                on_logout: move |_| show_logout.set(true),

                SidebarLink {
                    label: "Dashboard",
                    icon: rsx! { Icon { icon: FaChartPie, width: 18, height: 18 } },
                    active: on_dashboard,
                    onclick: move |_| { nav.push(Route::AdminDashboard {}); },
                }
                SidebarLink {
                    label: "Courses",
                    icon: rsx! { Icon { icon: FaGraduationCap, width: 18, height: 18 } },
                    active: on_courses,
                    onclick: move |_| { nav.push(Route::ManageCourses {}); },
                }
                SidebarLink {
                    label: "Users",
                    icon: rsx! { Icon { icon: FaUsers, width: 18, height: 18 } },
                    active: on_users,
                    onclick: move |_| { nav.push(Route::ManageUsers {}); },
                }
                SidebarLink {
                    label: "Settings",
                    icon: rsx! { Icon { icon: FaGear, width: 18, height: 18 } },
                    active: on_settings,
                    onclick: move |_| { nav.push(Route::AdminSettings {}); },
                }
            }

            main {
                class: "shell-content",
                Outlet::<Route> {}
            }
        }

        if show_logout() {
            ConfirmDialog {
                title: "Sign out of the admin console?",
                message: "You will need to log in again to manage the platform.",
                confirm_label: "Sign Out",
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

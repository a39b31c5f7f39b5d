//! Public landing view: marketing panel plus an auth card that toggles
//! between the login and register sub-forms without navigation.

use dioxus::prelude::*;

use ui::icons::FaGraduationCap;
use ui::Icon;

use super::login::LoginForm;
use super::register::RegisterForm;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let mut show_login = use_signal(|| true);

    rsx! {
        div {
            class: "home-page",
            div {
                class: "home-panel",

                // Hero content
                div {
                    class: "home-hero",
                    h1 {
                        span { class: "home-brand", "E-LearnPro" }
                        br {}
                        span { class: "home-tagline", "Elevate Your Learning Journey" }
                    }
                    p {
                        "Master new skills with our interactive courses. Join our community of passionate learners and experts."
                    }
                    Link {
                        class: "home-browse",
                        to: Route::Courses {},
                        Icon { icon: FaGraduationCap, width: 18, height: 18 }
                        span { "Explore Courses" }
                    }
                }

                // Auth card, shared submit contracts with the standalone pages
                div {
                    class: "home-auth",
                    if show_login() {
                        LoginForm {}
                        p {
                            class: "auth-switch",
                            "New here? "
                            button {
                                class: "link-button",
                                onclick: move |_| show_login.set(false),
                                "Create an account"
                            }
                        }
                    } else {
                        RegisterForm {}
                        p {
                            class: "auth-switch",
                            "Already have an account? "
                            button {
                                class: "link-button",
                                onclick: move |_| show_login.set(true),
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}

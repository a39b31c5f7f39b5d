//! Enrolled-course viewer with the enroll action.
//!
//! Course detail and the enrollment list load together; enrolling flips
//! local state without a re-fetch, and a second attempt while already
//! enrolled is rejected client-side with a transient warning instead of a
//! redundant request.

use api::EnrollmentSet;
use dioxus::prelude::*;
use futures::join;

use ui::components::{Button, ButtonVariant, SkeletonBlock, StatusBanner, StatusKind};
use ui::icons::FaCircleCheck;
use ui::{make_client, Icon};

const ALREADY_ENROLLED: &str = "You're already enrolled in this course!";

#[component]
pub fn CourseViewer(id: u64) -> Element {
    let mut enrolled = use_signal(|| false);
    let mut enrolling = use_signal(|| false);
    let mut warning = use_signal(|| Option::<String>::None);

    let course = use_resource(use_reactive!(|(id,)| async move {
        let client = make_client();
        let (course, mine) = join!(client.course(id), client.my_courses());

        match mine {
            Ok(list) => enrolled.set(EnrollmentSet::from_courses(&list).contains(id)),
            Err(err) => tracing::error!("Error loading enrollments: {err}"),
        }
        match course {
            Ok(course) => Some(course),
            Err(err) => {
                if !err.is_not_found() {
                    tracing::error!("Error loading course: {err}");
                }
                None
            }
        }
    }));

    let handle_enroll = move |_| {
        if enrolled() {
            warning.set(Some(ALREADY_ENROLLED.to_string()));
            #[cfg(target_arch = "wasm32")]
            spawn(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                warning.set(None);
            });
            return;
        }

        spawn(async move {
            enrolling.set(true);
            match make_client().enroll(id).await {
                Ok(()) => {
                    warning.set(None);
                    enrolled.set(true);
                }
                Err(err) => {
                    tracing::error!("Enrollment failed: {err}");
                    warning.set(Some(err.message()));
                }
            }
            enrolling.set(false);
        });
    };

    match course() {
        None => rsx! {
            div {
                class: "view-page",
                SkeletonBlock { class: "skeleton-title" }
                SkeletonBlock { class: "skeleton-thumb" }
                SkeletonBlock { class: "skeleton-line skeleton-wide" }
                SkeletonBlock { class: "skeleton-line" }
            }
        },
        Some(None) => rsx! {
            div {
                class: "view-page",
                div {
                    class: "status-banner status-error",
                    h2 { "Course Not Found" }
                    p { "The requested course could not be loaded" }
                }
            }
        },
        Some(Some(course)) => rsx! {
            div {
                class: "view-page viewer-page",

                if let Some(message) = warning() {
                    StatusBanner { kind: StatusKind::Warning, message: message }
                }

                header {
                    class: "viewer-header",
                    h1 { "{course.title}" }
                    if enrolled() {
                        span {
                            class: "badge badge-enrolled",
                            Icon { icon: FaCircleCheck, width: 14, height: 14 }
                            "You're enrolled in this course"
                        }
                    }
                }

                div {
                    class: "viewer-columns",
                    div {
                        class: "viewer-main",
                        div {
                            class: "card-thumb",
                            if let Some(url) = course.thumbnail_url() {
                                img { src: "{url}", alt: "{course.title}" }
                            }
                        }

                        section {
                            h3 { "About This Course" }
                            p { "{course.description}" }
                        }

                        section {
                            h3 { "Course Content" }
                            if enrolled() {
                                pre {
                                    class: "viewer-content",
                                    {course.viewer_content.clone().unwrap_or_else(|| "Course content will be available soon.".to_string())}
                                }
                            } else {
                                p { class: "view-muted", "Enroll to unlock the full course content." }
                            }
                        }
                    }

                    aside {
                        class: "viewer-aside",
                        h3 { "Course Price" }
                        div {
                            class: "card-price",
                            span { class: "price price-large", "${course.price}" }
                            if let Some(ref discount) = course.discount_price {
                                span { class: "price-struck", "${discount}" }
                            }
                        }

                        if enrolled() {
                            div {
                                class: "status-banner status-success",
                                span { "Access granted! Start learning now" }
                            }
                        } else {
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "w-full",
                                disabled: enrolling(),
                                onclick: handle_enroll,
                                if enrolling() { "Processing..." } else { "Enroll Now" }
                            }
                        }
                    }
                }
            }
        },
    }
}

//! The student's enrolled courses, with unenroll behind a confirmation.

use api::models::remove_by_id;
use api::Course;
use dioxus::prelude::*;

use ui::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyState, SkeletonCardGrid, StatusBanner, StatusKind,
};
use ui::make_client;

use crate::Route;

#[component]
pub fn MyCourses() -> Element {
    let mut courses = use_signal(Vec::<Course>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut confirm_unenroll = use_signal(|| Option::<u64>::None);
    let mut unenrolling = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match make_client().my_courses().await {
            Ok(list) => courses.set(list),
            Err(err) => {
                tracing::error!("Error loading courses: {err}");
                error.set(Some(
                    "Failed to load courses. Please try again later.".to_string(),
                ));
            }
        }
        loading.set(false);
    });

    // Success removes exactly the targeted course and resolves the modal;
    // failure leaves the list untouched.
    let handle_unenroll = move |course_id: u64| {
        spawn(async move {
            unenrolling.set(true);
            match make_client().unenroll(course_id).await {
                Ok(()) => {
                    courses.with_mut(|list| remove_by_id(list, course_id));
                }
                Err(err) => {
                    tracing::error!("Unenrollment failed: {err}");
                    error.set(Some("Failed to unenroll. Try again.".to_string()));
                }
            }
            unenrolling.set(false);
            confirm_unenroll.set(None);
        });
    };

    rsx! {
        div {
            class: "view-page",
            h2 { "My Learning Dashboard" }
            p {
                class: "view-muted",
                {enrolled_summary(courses().len())}
            }

            if let Some(err) = error() {
                StatusBanner { kind: StatusKind::Error, message: err }
            }

            if loading() {
                SkeletonCardGrid { count: 3 }
            } else if courses().is_empty() {
                EmptyState {
                    title: "No Courses Yet",
                    message: "Discover new skills and start your learning journey today.",
                    action: rsx! {
                        Link {
                            class: "btn btn-primary",
                            to: Route::Courses {},
                            "Browse Courses"
                        }
                    },
                }
            } else {
                div {
                    class: "card-grid",
                    for course in courses() {
                        EnrolledCard {
                            key: "{course.id}",
                            course: course,
                            on_unenroll: move |id| confirm_unenroll.set(Some(id)),
                        }
                    }
                }
            }
        }

        if let Some(course_id) = confirm_unenroll() {
            ConfirmDialog {
                title: "Confirm Unenrollment",
                message: "Are you sure you want to unenroll from this course? Your progress will be lost.",
                confirm_label: "Confirm Unenroll",
                danger: true,
                busy: unenrolling(),
                on_confirm: move |_| handle_unenroll(course_id),
                on_cancel: move |_| confirm_unenroll.set(None),
            }
        }
    }
}

fn enrolled_summary(count: usize) -> String {
    match count {
        0 => "Your learning journey starts here".to_string(),
        1 => "You're enrolled in 1 course".to_string(),
        n => format!("You're enrolled in {n} courses"),
    }
}

#[component]
fn EnrolledCard(course: Course, on_unenroll: EventHandler<u64>) -> Element {
    let course_id = course.id;
    rsx! {
        div {
            class: "card",
            div {
                class: "card-thumb",
                if let Some(url) = course.thumbnail_url() {
                    img { src: "{url}", alt: "{course.title}" }
                }
            }
            div {
                class: "card-body",
                h3 { "{course.title}" }
                p { class: "card-description", "{course.description}" }

                div {
                    class: "card-footer",
                    Link {
                        class: "btn btn-primary",
                        to: Route::CourseViewer { id: course_id },
                        "Continue"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_unenroll.call(course_id),
                        "Unenroll"
                    }
                }
            }
        }
    }
}

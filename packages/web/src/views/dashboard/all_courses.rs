//! Full catalog with the student's enrollments marked.
//!
//! The two lists are fetched concurrently (neither depends on the other)
//! and joined client-side by course id.

use api::{Course, EnrollmentSet};
use dioxus::prelude::*;
use futures::join;

use ui::components::{EmptyState, SkeletonCardGrid, StatusBanner, StatusKind};
use ui::icons::FaCircleCheck;
use ui::{make_client, Icon};

use crate::Route;

#[component]
pub fn AllCourses() -> Element {
    let mut courses = use_signal(Vec::<Course>::new);
    let mut enrolled = use_signal(EnrollmentSet::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let client = make_client();
        let (catalog, mine) = join!(client.courses(), client.my_courses());

        match catalog {
            Ok(list) => courses.set(list),
            Err(err) => {
                tracing::error!("Error fetching courses: {err}");
                error.set(Some(err.message()));
            }
        }
        // A failed enrollment fetch only loses the badges, not the catalog.
        match mine {
            Ok(list) => enrolled.set(EnrollmentSet::from_courses(&list)),
            Err(err) => tracing::error!("Error fetching enrollments: {err}"),
        }
        loading.set(false);
    });

    rsx! {
        div {
            class: "view-page",
            h2 { "All Courses" }
            p { class: "view-muted", "Explore our curated collection of learning resources" }

            if let Some(err) = error() {
                StatusBanner { kind: StatusKind::Error, message: err }
            }

            if loading() {
                SkeletonCardGrid { count: 3 }
            } else if courses().is_empty() {
                EmptyState {
                    title: "No courses available at the moment",
                    message: "Check back later for new course offerings",
                }
            } else {
                div {
                    class: "card-grid",
                    for course in courses() {
                        EnrollableCard {
                            key: "{course.id}",
                            is_enrolled: enrolled().contains(course.id),
                            course: course,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EnrollableCard(course: Course, is_enrolled: bool) -> Element {
    rsx! {
        div {
            class: "card",
            if is_enrolled {
                span {
                    class: "badge badge-enrolled",
                    Icon { icon: FaCircleCheck, width: 12, height: 12 }
                    "Enrolled"
                }
            }

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
                    div {
                        class: "card-price",
                        span { class: "price", "${course.price}" }
                        if let Some(ref discount) = course.discount_price {
                            span { class: "price-struck", "${discount}" }
                        }
                    }
                    Link {
                        class: "btn btn-primary",
                        to: Route::CourseViewer { id: course.id },
                        "View Details"
                    }
                }
            }
        }
    }
}

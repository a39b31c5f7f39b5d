//! Public course detail page. Distinguishes loading, not-found, and
//! loaded states; an absent record is an explicit state, not a crash.

use api::Course;
use dioxus::prelude::*;

use ui::components::SkeletonBlock;
use ui::make_client;

#[component]
pub fn CourseDetails(id: u64) -> Element {
    let course = use_resource(use_reactive!(|(id,)| async move {
        match make_client().course(id).await {
            Ok(course) => Some(course),
            Err(err) => {
                if !err.is_not_found() {
                    tracing::error!("Error fetching course: {err}");
                }
                None
            }
        }
    }));

    match course() {
        None => rsx! {
            div {
                class: "detail-page",
                SkeletonBlock { class: "skeleton-title" }
                SkeletonBlock { class: "skeleton-thumb" }
                SkeletonBlock { class: "skeleton-line skeleton-wide" }
                SkeletonBlock { class: "skeleton-line" }
            }
        },
        Some(None) => rsx! {
            div {
                class: "detail-page",
                div {
                    class: "status-banner status-error",
                    h2 { "Course Not Found" }
                    p { "The requested course could not be loaded" }
                }
            }
        },
        Some(Some(course)) => rsx! { CourseSummary { course: course } },
    }
}

#[component]
fn CourseSummary(course: Course) -> Element {
    rsx! {
        div {
            class: "detail-page",
            h1 { "{course.title}" }

            if let Some(url) = course.thumbnail_url() {
                img { class: "detail-thumb", src: "{url}", alt: "{course.title}" }
            }

            p { class: "detail-description", "{course.description}" }

            p { class: "detail-price", "${course.price}" }
        }
    }
}

//! Public course catalog.

use api::Course;
use dioxus::prelude::*;

use ui::components::{EmptyState, SkeletonCardGrid};
use ui::icons::{FaChartLine, FaClock, FaStar};
use ui::{make_client, Icon};

use crate::Route;

/// Placeholder cards shown while the catalog loads.
const SKELETON_COUNT: usize = 6;

#[component]
pub fn Courses() -> Element {
    let mut courses = use_signal(Vec::<Course>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        match make_client().courses().await {
            Ok(list) => courses.set(list),
            Err(err) => tracing::error!("Failed to load courses: {err}"),
        }
        loading.set(false);
    });

    rsx! {
        div {
            class: "catalog-page",
            header {
                class: "catalog-header",
                h2 { "Explore Our Courses" }
                p { "Master new skills with industry-leading experts and cutting-edge curriculum" }
            }

            if loading() {
                SkeletonCardGrid { count: SKELETON_COUNT }
            } else if courses().is_empty() {
                EmptyState {
                    title: "No Courses Available",
                    message: "Check back later for new course offerings",
                }
            } else {
                div {
                    class: "card-grid",
                    for course in courses() {
                        CatalogCard { key: "{course.id}", course: course }
                    }
                }
            }
        }
    }
}

#[component]
fn CatalogCard(course: Course) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card-thumb",
                if let Some(url) = course.thumbnail_url() {
                    img { src: "{url}", alt: "{course.title}" }
                }
                div {
                    class: "card-badges",
                    if let Some(ref category) = course.category {
                        span { class: "badge badge-category", "{category}" }
                    }
                    if let Some(ref rating) = course.rating {
                        span {
                            class: "badge badge-rating",
                            Icon { icon: FaStar, width: 12, height: 12 }
                            "{rating}"
                        }
                    }
                }
            }

            div {
                class: "card-body",
                h3 { "{course.title}" }
                p { class: "card-description", "{course.description}" }

                div {
                    class: "card-meta",
                    if let Some(ref duration) = course.duration {
                        span {
                            Icon { icon: FaClock, width: 14, height: 14 }
                            "{duration}"
                        }
                    }
                    if let Some(ref level) = course.level {
                        span {
                            Icon { icon: FaChartLine, width: 14, height: 14 }
                            "{level}"
                        }
                    }
                }

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
                        to: Route::CourseDetails { id: course.id },
                        "View Details"
                    }
                }
            }
        }
    }
}

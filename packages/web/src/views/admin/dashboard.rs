//! Platform overview: three counters from `GET /admin/stats`.

use api::AdminStats;
use dioxus::prelude::*;

use ui::components::SkeletonBlock;
use ui::icons::{FaBookOpen, FaChartLine, FaUsers};
use ui::{make_client, Icon};

#[component]
pub fn AdminDashboard() -> Element {
    let mut stats = use_signal(AdminStats::default);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        match make_client().admin_stats().await {
            Ok(counters) => stats.set(counters),
            Err(err) => tracing::error!("Failed to fetch admin stats: {err}"),
        }
        loading.set(false);
    });

    rsx! {
        div {
            class: "view-page",
            h2 { "Admin Dashboard" }
            p { class: "view-muted", "Platform Overview & Analytics" }

            if loading() {
                div {
                    class: "stat-grid",
                    for i in 0..3 {
                        div { key: "{i}", class: "stat-card", SkeletonBlock { class: "skeleton-stat" } }
                    }
                }
            } else {
                div {
                    class: "stat-grid",
                    StatCard {
                        label: "Total Users",
                        value: stats().users,
                        icon: rsx! { Icon { icon: FaUsers, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "Total Courses",
                        value: stats().courses,
                        icon: rsx! { Icon { icon: FaBookOpen, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "Enrollments",
                        value: stats().enrollments,
                        icon: rsx! { Icon { icon: FaChartLine, width: 28, height: 28 } },
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: u64, icon: Element) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div {
                class: "stat-text",
                span { class: "stat-label", "{label}" }
                span { class: "stat-value", "{value}" }
            }
            span { class: "stat-icon", {icon} }
        }
    }
}

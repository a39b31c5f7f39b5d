use dioxus::prelude::*;

/// Single pulsing placeholder block.
#[component]
pub fn SkeletonBlock(#[props(default = String::new())] class: String) -> Element {
    rsx! {
        div { class: "skeleton {class}" }
    }
}

/// Grid of card-shaped placeholders shown while a course list loads.
#[component]
pub fn SkeletonCardGrid(count: usize) -> Element {
    rsx! {
        div {
            class: "card-grid",
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "card",
                    SkeletonBlock { class: "skeleton-thumb" }
                    div {
                        class: "card-body",
                        SkeletonBlock { class: "skeleton-line skeleton-wide" }
                        SkeletonBlock { class: "skeleton-line" }
                        SkeletonBlock { class: "skeleton-line skeleton-narrow" }
                    }
                }
            }
        }
    }
}

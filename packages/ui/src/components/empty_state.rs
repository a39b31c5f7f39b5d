use dioxus::prelude::*;

use crate::icons::FaGraduationCap;
use crate::Icon;

/// Explicit empty-result state, rendered instead of a bare empty grid.
#[component]
pub fn EmptyState(
    title: String,
    message: String,
    /// Optional call-to-action rendered under the message.
    #[props(default)]
    action: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "empty-state",
            Icon { icon: FaGraduationCap, width: 48, height: 48 }
            h3 { "{title}" }
            p { "{message}" }
            {action}
        }
    }
}

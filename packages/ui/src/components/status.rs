use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaTriangleExclamation};
use crate::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Warning,
}

impl StatusKind {
    fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "status-banner status-success",
            StatusKind::Error => "status-banner status-error",
            StatusKind::Warning => "status-banner status-warning",
        }
    }
}

/// Inline request-outcome banner: one per form or view region.
#[component]
pub fn StatusBanner(kind: StatusKind, message: String) -> Element {
    rsx! {
        div {
            class: "{kind.class()}",
            if kind == StatusKind::Success {
                Icon { icon: FaCircleCheck, width: 16, height: 16 }
            } else {
                Icon { icon: FaTriangleExclamation, width: 16, height: 16 }
            }
            span { "{message}" }
        }
    }
}

use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Dimmed backdrop that floats its child panel above the page.
/// Clicking the backdrop closes; clicks inside the panel do not bubble.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Two-button confirmation dialog for destructive or final actions
/// (logout, delete, unenroll).
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default = false)] danger: bool,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_variant = if danger {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "dialog-body",
                h3 { class: "dialog-title", "{title}" }
                p { class: "dialog-message", "{message}" }
                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: confirm_variant,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn Label(
    #[props(default = String::new())] html_for: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "form-label",
            r#for: "{html_for}",
            {children}
        }
    }
}

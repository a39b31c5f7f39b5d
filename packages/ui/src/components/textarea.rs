use dioxus::prelude::*;

#[component]
pub fn Textarea(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            rows: "{rows}",
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

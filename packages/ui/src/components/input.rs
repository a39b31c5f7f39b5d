use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = false)] required: bool,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let type_attr = r#type;
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{type_attr}",
            placeholder: "{placeholder}",
            value: "{value}",
            required: required,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

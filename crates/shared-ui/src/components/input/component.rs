use dioxus::prelude::*;

/// A labelled text input that submits under `name` with the enclosing form.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    /// Virtual keyboard hint, e.g. `numeric`.
    #[props(default)]
    input_mode: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    /// Extra content placed after the label text, such as a help tip.
    #[props(default)]
    label_extra: Option<Element>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{name}",
                    "{label}"
                    {label_extra}
                }
            }
            input {
                r#type: "{input_type}",
                name: "{name}",
                value: value,
                placeholder: placeholder,
                inputmode: "{input_mode}",
                required: required,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}

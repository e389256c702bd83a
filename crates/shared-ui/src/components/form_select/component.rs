use dioxus::prelude::*;

/// A themed native select element for forms.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Form field name, also used for the label's `for`.
    #[props(default)]
    name: String,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    /// Extra content placed after the label text.
    #[props(default)]
    label_extra: Option<Element>,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// Option elements to render inside the select.
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{name}",
                    "{label}"
                    {label_extra}
                }
            }
            select {
                name: "{name}",
                value: value,
                required: required,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                ..merged,
                {children}
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaSpinner;
use dioxus_free_icons::Icon;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
        }
    }
}

/// Spinning indicator shown in place of a label while something is in flight.
#[component]
pub fn Spinner(#[props(default = 14)] size: u32) -> Element {
    rsx! {
        Icon { class: "spinner", width: size, height: size, icon: FaSpinner }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    /// Render as `type="submit"` so the enclosing form submits natively.
    #[props(default = false)]
    pub submit: bool,
    /// Disable the button and show `loading_label` with a spinner.
    #[props(default = false)]
    pub loading: bool,
    #[props(default = "Loading...".to_string())]
    pub loading_label: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let button_type = if props.submit { "submit" } else { "button" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: button_type,
            disabled: props.disabled || props.loading,
            "aria-busy": props.loading,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            if props.loading {
                Spinner {}
                span { class: "button-label", "{props.loading_label}" }
            } else {
                {props.children}
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleQuestion;
use dioxus_free_icons::Icon;
use dioxus_primitives::tooltip as prim;

pub use dioxus_primitives::ContentSide;

#[component]
pub fn Tooltip(mut props: prim::TooltipProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tooltip", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tooltip { ..props }
    }
}

#[component]
pub fn TooltipTrigger(mut props: prim::TooltipTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tooltip-trigger", None, false));

    rsx! {
        prim::TooltipTrigger { ..props }
    }
}

#[component]
pub fn TooltipContent(mut props: prim::TooltipContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tooltip-content", None, false));

    rsx! {
        prim::TooltipContent { ..props }
    }
}

/// A small question-mark icon that shows `text` on hover or focus.
///
/// The tooltip is wired once when the icon mounts and lives as long as it does.
#[component]
pub fn HelpTip(text: String, #[props(default = ContentSide::Top)] side: ContentSide) -> Element {
    rsx! {
        Tooltip {
            TooltipTrigger {
                span { class: "help-tip", tabindex: 0, aria_label: "{text}",
                    Icon { width: 12, height: 12, icon: FaCircleQuestion }
                }
            }
            TooltipContent { side, "{text}" }
        }
    }
}

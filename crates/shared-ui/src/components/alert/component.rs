use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleInfo, FaTriangleExclamation};
use dioxus_free_icons::Icon;
use shared_types::{Alert, AlertId, AlertKind};

/// Icon matching an alert severity: warning for errors, info for info,
/// check mark for everything else.
#[component]
pub fn AlertIcon(kind: AlertKind) -> Element {
    match kind {
        AlertKind::Error => rsx! {
            Icon { class: "alert-icon", width: 16, height: 16, icon: FaTriangleExclamation }
        },
        AlertKind::Info => rsx! {
            Icon { class: "alert-icon", width: 16, height: 16, icon: FaCircleInfo }
        },
        AlertKind::Success => rsx! {
            Icon { class: "alert-icon", width: 16, height: 16, icon: FaCircleCheck }
        },
    }
}

/// A single dismissible banner.
#[component]
pub fn AlertBanner(alert: Alert, #[props(default)] on_dismiss: EventHandler<AlertId>) -> Element {
    let id = alert.id;
    let class = format!("alert {} alert-dismissible fade show", alert.kind.css_class());

    rsx! {
        div {
            id: "{id}",
            class: class,
            role: "alert",
            "data-kind": alert.kind.as_str(),
            AlertIcon { kind: alert.kind }
            span { class: "alert-message", "{alert.message}" }
            button {
                r#type: "button",
                class: "btn-close",
                aria_label: "Close",
                onclick: move |_| on_dismiss.call(id),
            }
        }
    }
}

/// The banner area at the top of the page container.
///
/// Renders `alerts` in the order given; the caller owns insertion order.
#[component]
pub fn AlertStack(alerts: Vec<Alert>, #[props(default)] on_dismiss: EventHandler<AlertId>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "alert-stack", aria_live: "polite",
            for alert in alerts {
                AlertBanner { key: "{alert.id}", alert: alert.clone(), on_dismiss }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_types::is_download_href;

use crate::components::button::Spinner;

/// An anchor to a PDF on the backend.
///
/// While `loading` the label is replaced by a spinner and the link is marked
/// disabled. The marker is visual only: navigation still goes through, so
/// the browser can start the download. Links whose `href` is not a download
/// route render as plain anchors and never report clicks.
#[component]
pub fn DownloadLink(
    href: String,
    #[props(default = false)] loading: bool,
    #[props(default)] onclick: EventHandler<String>,
    children: Element,
) -> Element {
    if !is_download_href(&href) {
        return rsx! {
            a { class: "download-link", href: "{href}", {children} }
        };
    }

    let class = if loading {
        "download-link disabled"
    } else {
        "download-link"
    };
    let target = href.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        a {
            class,
            href: "{href}",
            "aria-disabled": loading,
            onclick: move |_| onclick.call(target.clone()),
            if loading {
                Spinner { size: 12 }
                span { "Loading..." }
            } else {
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn idle_download_link_shows_label() {
        fn app() -> Element {
            rsx! { DownloadLink { href: "/download_pdf/RFA_1_2020_order_1", "Download PDF" } }
        }
        let html = render(app);
        assert!(html.contains(r#"href="/download_pdf/RFA_1_2020_order_1""#));
        assert!(html.contains("Download PDF"));
        assert!(!html.contains("download-link disabled"));
    }

    #[test]
    fn loading_download_link_is_marked_disabled() {
        fn app() -> Element {
            rsx! { DownloadLink { href: "/download_pdf/RFA_1_2020_order_1", loading: true, "Download PDF" } }
        }
        let html = render(app);
        assert!(html.contains("download-link disabled"));
        assert!(html.contains("Loading..."));
        assert!(!html.contains("Download PDF"));
    }

    #[test]
    fn other_links_ignore_loading_state() {
        fn app() -> Element {
            rsx! { DownloadLink { href: "/export_case_json/1", loading: true, "Export" } }
        }
        let html = render(app);
        assert!(html.contains("Export"));
        assert!(!html.contains("Loading..."));
    }
}

use dioxus::prelude::*;

use crate::routes::Route;

/// Fallback for any path the router does not know.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "unknown route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }
        document::Title { "Not Found | Court Data Fetcher" }

        section { class: "not-found",
            span { class: "not-found-code", "404" }
            p { class: "not-found-message",
                "Nothing lives at "
                code { "{path}" }
                ". Case results are only reachable through a search."
            }
            Link { to: Route::SearchPage {}, class: "not-found-link", "Start a case search" }
        }
    }
}

pub mod case_orders;
pub mod not_found;
pub mod search;

use dioxus::prelude::*;
use shared_ui::AlertStack;

use crate::fetcher::use_court_fetcher;
use case_orders::CaseOrders;
use not_found::NotFound;
use search::SearchPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    SearchPage {},
    #[route("/cases/:query_id")]
    CaseOrders { query_id: i64 },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Page container with the alert banner area above the routed page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let fetcher = use_court_fetcher();

    let page_title = match &route {
        Route::SearchPage {} => "Case Search",
        Route::CaseOrders { .. } => "Case Orders",
        Route::NotFound { .. } => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Title { "{page_title} | Court Data Fetcher" }

        header { class: "app-header",
            Link { to: Route::SearchPage {}, class: "app-brand", "Court Data Fetcher" }
        }
        main { class: "container",
            AlertStack {
                alerts: fetcher.alerts(),
                on_dismiss: move |id| fetcher.dismiss_alert(id),
            }
            Outlet::<Route> {}
        }
    }
}

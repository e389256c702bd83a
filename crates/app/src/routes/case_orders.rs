use dioxus::prelude::*;
use shared_types::CaseExport;
use shared_ui::{Button, ButtonVariant, DownloadLink};

use crate::api;
use crate::config::ui_config;
use crate::fetcher::use_court_fetcher;
use crate::routes::Route;

/// Orders of a past search, read from the backend's JSON export, each with
/// a PDF download link.
#[component]
pub fn CaseOrders(query_id: i64) -> Element {
    let fetcher = use_court_fetcher();

    let export = use_resource(move || async move {
        let result = api::fetch_case_export(query_id).await;
        if let Err(err) = &result {
            if err.is_network() {
                fetcher.handle_network_error(err);
            } else {
                fetcher.show_alert(err.message.clone(), "error");
            }
        }
        result.ok()
    });

    let body = match &*export.read() {
        None => rsx! {
            p { class: "case-loading", "Loading case details..." }
        },
        Some(None) => rsx! {
            p { class: "case-empty", "Case details could not be loaded." }
        },
        Some(Some(case)) => rsx! {
            CaseDetails { case: case.clone() }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./case_orders.css") }
        section { class: "case-orders",
            {body}
            div { class: "form-actions",
                Link { to: Route::SearchPage {},
                    Button { variant: ButtonVariant::Secondary, "New Search" }
                }
            }
        }
    }
}

#[component]
fn CaseDetails(case: CaseExport) -> Element {
    let fetcher = use_court_fetcher();
    let backend = &ui_config().backend;

    rsx! {
        h1 { class: "case-title", "{case.case_title}" }
        p { class: "case-display",
            {fetcher.format_case_display(&case.case_type, &case.case_number, &case.filing_year)}
        }

        dl { class: "case-facts",
            dt { "Status" }
            dd { "{case.status}" }
            dt { "Filing Date" }
            dd { "{case.filing_date}" }
            dt { "Petitioner" }
            dd { "{case.petitioner}" }
            dt { "Respondent" }
            dd { "{case.respondent}" }
            dt { "Next Hearing" }
            dd { "{case.next_hearing_date}" }
        }

        h2 { "Orders & Judgments" }
        if case.orders.is_empty() {
            p { class: "case-empty", "No orders on record." }
        } else {
            table { class: "orders-table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Title" }
                        th { "Type" }
                        th { "PDF" }
                    }
                }
                tbody {
                    for (i, order) in case.orders.iter().enumerate() {
                        tr { key: "{i}",
                            td { "{order.date}" }
                            td { "{order.title}" }
                            td { "{order.order_type}" }
                            td {
                                if let Some(href) = case.order_download_href(i).map(|h| backend.url(&h)) {
                                    DownloadLink {
                                        href: href.clone(),
                                        loading: fetcher.is_download_loading(&href),
                                        onclick: move |href: String| fetcher.update(|c| c.click_download(&href)),
                                        "Download"
                                    }
                                } else {
                                    span { class: "muted", "Not available" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_types::{current_year, filing_years, CaseSearch, CASE_TYPES};
use shared_ui::{Button, FormSelect, HelpTip, Input};

use crate::config::ui_config;
use crate::controller::SubmitOutcome;
use crate::fetcher::{use_court_fetcher, CourtFetcher};

/// Case search form. Valid submissions post natively to the backend, which
/// answers with a full page.
#[component]
pub fn SearchPage() -> Element {
    let fetcher = use_court_fetcher();
    let action = ui_config().backend.url("/search");
    let years = use_hook(|| filing_years(current_year()));

    let mut case_type = use_signal(String::new);
    let case_number = use_signal(String::new);
    let mut filing_year = use_signal(String::new);

    let handle_submit = move |evt: Event<FormData>| {
        let search = CaseSearch::new(
            case_type.read().clone(),
            case_number.read().clone(),
            filing_year.read().clone(),
        );
        if let SubmitOutcome::Blocked(reason) = fetcher.update(|c| c.submit(&search)) {
            tracing::debug!(%reason, "native submission cancelled");
            evt.prevent_default();
        }
    };

    let busy = fetcher.is_busy();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }

        section { class: "search-card",
            h1 { class: "search-title", "Search Court Records" }
            p { class: "search-subtitle",
                "Look up a case by its type, number and filing year."
            }

            form {
                id: "searchForm",
                class: if busy { "search-form loading" } else { "search-form" },
                action: "{action}",
                method: "post",
                novalidate: true,
                onsubmit: handle_submit,

                div { class: "form-row",
                    FormSelect {
                        id: "case_type",
                        name: "case_type",
                        label: "Case Type *",
                        value: "{case_type}",
                        required: true,
                        onchange: move |evt: Event<FormData>| case_type.set(evt.value()),
                        option { value: "", "Select case type" }
                        for (value, label) in CASE_TYPES.iter() {
                            option { key: "{value}", value: *value, "{label}" }
                        }
                    }

                    CaseNumberField { value: case_number }

                    FormSelect {
                        id: "filing_year",
                        name: "filing_year",
                        label: "Filing Year *",
                        label_extra: rsx! { HelpTip { text: "The year the case was filed, not the hearing year." } },
                        value: "{filing_year}",
                        required: true,
                        onchange: move |evt: Event<FormData>| filing_year.set(evt.value()),
                        option { value: "", "Select year" }
                        for year in years.iter() {
                            option { key: "{year}", value: "{year}", "{year}" }
                        }
                    }
                }

                div { class: "form-actions",
                    Button {
                        submit: true,
                        loading: busy,
                        loading_label: fetcher.submit_label(),
                        "{fetcher.submit_label()}"
                    }
                }
            }
        }
    }
}

/// Case number input. Every keystroke is reduced to its digits.
#[component]
fn CaseNumberField(value: Signal<String>) -> Element {
    let fetcher = use_court_fetcher();

    rsx! {
        Input {
            id: "case_number",
            name: "case_number",
            label: "Case Number *",
            label_extra: rsx! { HelpTip { text: "Digits only, without the case type or year." } },
            value: value.read().clone(),
            input_mode: "numeric",
            required: true,
            placeholder: "e.g., 1234",
            on_input: move |evt: FormEvent| apply_case_number_input(fetcher, value, &evt.value()),
        }
    }
}

fn apply_case_number_input(fetcher: CourtFetcher, mut field: Signal<String>, raw: &str) {
    field.set(fetcher.validate_case_number(raw));
}

use dioxus::prelude::*;
use shared_types::{Alert, AlertId, AlertKind};
use std::fmt;

use crate::controller::FormController;
use crate::scheduler::Armed;
use crate::timers;

/// Page-wide handle to the form controller, provided as context by `App`.
///
/// Components read through the accessor methods (which subscribe them to
/// changes) and mutate through [`CourtFetcher::update`], which also starts a
/// timer for every task the mutation scheduled.
#[derive(Clone, Copy)]
pub struct CourtFetcher {
    controller: Signal<FormController>,
}

impl CourtFetcher {
    pub fn new(controller: FormController) -> Self {
        Self {
            controller: Signal::new(controller),
        }
    }

    /// Mutate the controller and arm timers for newly scheduled tasks.
    pub fn update<R>(&self, f: impl FnOnce(&mut FormController) -> R) -> R {
        let mut controller = self.controller;
        let (result, armed) = {
            let mut guard = controller.write();
            let result = f(&mut guard);
            (result, guard.take_armed())
        };
        for task in armed {
            self.arm(task);
        }
        result
    }

    /// Sleep for the task's delay, then fire it. Timers run at the root
    /// scope so a banner outlives the page that raised it.
    fn arm(&self, armed: Armed) {
        let fetcher = *self;
        let _ = spawn_forever(async move {
            timers::sleep(armed.delay).await;
            fetcher.update(|c| c.fire(armed.token));
        });
    }

    // ── Exposed helpers ─────────────────────────────────────────────

    /// Present an alert banner. `kind` may be an [`AlertKind`] or a severity
    /// tag such as `"error"`; unknown tags show as success.
    pub fn show_alert(&self, message: impl Into<String>, kind: impl Into<AlertKind>) -> AlertId {
        let message = message.into();
        let kind = kind.into();
        self.update(|c| c.present_alert(message, kind))
    }

    pub fn dismiss_alert(&self, id: AlertId) {
        self.update(|c| c.dismiss_alert(id));
    }

    /// Digit-only sanitizer for the case number field.
    pub fn validate_case_number(&self, input: &str) -> String {
        shared_types::sanitize_case_number(input)
    }

    pub fn format_case_display(&self, case_type: &str, case_number: &str, filing_year: &str) -> String {
        shared_types::format_case_display(case_type, case_number, filing_year)
    }

    /// Log a network failure and show the generic network error alert.
    pub fn handle_network_error(&self, error: &dyn fmt::Display) -> AlertId {
        self.update(|c| c.handle_network_error(error))
    }

    // ── Reads ───────────────────────────────────────────────────────

    pub fn alerts(&self) -> Vec<Alert> {
        self.controller.read().alerts().to_vec()
    }

    pub fn is_busy(&self) -> bool {
        self.controller.read().is_busy()
    }

    pub fn submit_label(&self) -> String {
        self.controller.read().submit_label().to_string()
    }

    pub fn is_download_loading(&self, href: &str) -> bool {
        self.controller.read().is_download_loading(href)
    }
}

/// Hook to access the page-wide controller handle.
pub fn use_court_fetcher() -> CourtFetcher {
    use_context::<CourtFetcher>()
}

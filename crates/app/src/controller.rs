//! State behind the search page: the submit control, the alert banners and
//! the PDF link indicators.
//!
//! Everything here is plain data driven by method calls, so the whole
//! interaction can be exercised without a browser. Deferred effects go
//! through [`Scheduler`]; see `fetcher.rs` for the real timers.

use std::collections::HashMap;
use std::fmt;

use shared_types::{
    alert_insert_position, Alert, AlertId, AlertKind, CaseSearch, SearchError, Timings,
    NETWORK_ERROR_MESSAGE, SEARCH_IN_PROGRESS_MESSAGE,
};

use crate::scheduler::{Armed, Scheduler, TaskToken};

/// Label of the submit control while a search is in flight.
pub const SEARCHING_LABEL: &str = "Searching...";

/// Label of the submit control when idle.
pub const SEARCH_LABEL: &str = "Search Case";

/// Submit control state. There is no success or failure state: the
/// backend answers with a full page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Busy,
}

/// What the form should do with the native submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Let the browser post the form.
    Proceed,
    /// Cancel the submission; an error alert is already up.
    Blocked(SearchError),
}

/// Browser history events that restore the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// `pageshow`; `persisted` is true when served from the back/forward cache.
    PageShow { persisted: bool },
    /// `popstate`.
    PopState,
}

/// Deferred work owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiTask {
    SearchNotice,
    DismissAlert(AlertId),
    RevertDownload(String),
}

#[derive(Debug)]
pub struct FormController {
    timings: Timings,
    submit: SubmitState,
    idle_label: String,
    search_notice: Option<TaskToken>,
    alerts: Vec<Alert>,
    alert_timers: HashMap<AlertId, TaskToken>,
    next_alert: u64,
    downloads: HashMap<String, TaskToken>,
    scheduler: Scheduler<UiTask>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl FormController {
    pub fn new(timings: Timings) -> Self {
        Self::with_label(timings, SEARCH_LABEL)
    }

    /// Controller whose submit control reads `idle_label` when idle.
    pub fn with_label(timings: Timings, idle_label: impl Into<String>) -> Self {
        Self {
            timings,
            submit: SubmitState::Idle,
            idle_label: idle_label.into(),
            search_notice: None,
            alerts: Vec::new(),
            alert_timers: HashMap::new(),
            next_alert: 0,
            downloads: HashMap::new(),
            scheduler: Scheduler::new(),
        }
    }

    // ── Search form ─────────────────────────────────────────────────

    /// Handle a submission of the search form.
    pub fn submit(&mut self, search: &CaseSearch) -> SubmitOutcome {
        if let Err(err) = search.validate() {
            tracing::info!(reason = %err, "search blocked");
            self.present_alert(err.to_string(), AlertKind::Error);
            return SubmitOutcome::Blocked(err);
        }

        tracing::info!(case = %search.display(), "search submitted");
        self.submit = SubmitState::Busy;
        if let Some(previous) = self.search_notice.take() {
            self.scheduler.cancel(previous);
        }
        let delay = self.timings.search_notice();
        self.search_notice = Some(self.scheduler.schedule(delay, UiTask::SearchNotice));
        SubmitOutcome::Proceed
    }

    /// Reset busy controls after back/forward navigation.
    pub fn restore_from_history(&mut self, event: HistoryEvent) {
        match event {
            HistoryEvent::PageShow { persisted } => tracing::debug!(persisted, "pageshow"),
            HistoryEvent::PopState => tracing::debug!("popstate"),
        }
        if self.submit == SubmitState::Busy {
            tracing::info!("resetting search form after history navigation");
        }
        self.submit = SubmitState::Idle;
        if let Some(token) = self.search_notice.take() {
            self.scheduler.cancel(token);
        }
    }

    #[cfg(test)]
    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn is_busy(&self) -> bool {
        self.submit == SubmitState::Busy
    }

    /// Current text of the submit control.
    pub fn submit_label(&self) -> &str {
        match self.submit {
            SubmitState::Idle => &self.idle_label,
            SubmitState::Busy => SEARCHING_LABEL,
        }
    }

    // ── Alerts ──────────────────────────────────────────────────────

    /// Put a banner up and schedule its removal.
    pub fn present_alert(&mut self, message: impl Into<String>, kind: AlertKind) -> AlertId {
        let id = AlertId(self.next_alert);
        self.next_alert += 1;

        let alert = Alert::new(id, kind, message);
        tracing::debug!(%id, %kind, message = %alert.message, "alert presented");

        let at = alert_insert_position(self.alerts.len());
        self.alerts.insert(at, alert);

        let token = self
            .scheduler
            .schedule(self.timings.alert_dismiss(), UiTask::DismissAlert(id));
        self.alert_timers.insert(id, token);
        id
    }

    /// Remove a banner now. Returns false if it was already gone.
    pub fn dismiss_alert(&mut self, id: AlertId) -> bool {
        if let Some(token) = self.alert_timers.remove(&id) {
            self.scheduler.cancel(token);
        }
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        let removed = self.alerts.len() != before;
        if removed {
            tracing::debug!(%id, "alert dismissed");
        }
        removed
    }

    /// Banners in display order, top first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Log a network failure and tell the user about it.
    pub fn handle_network_error(&mut self, error: &dyn fmt::Display) -> AlertId {
        tracing::error!(%error, "network error");
        self.present_alert(NETWORK_ERROR_MESSAGE, AlertKind::Error)
    }

    // ── PDF downloads ───────────────────────────────────────────────

    /// Mark a download link as loading. Navigation is not blocked.
    ///
    /// Clicking a link that is already loading restarts its revert window.
    pub fn click_download(&mut self, href: &str) {
        tracing::info!(href, "pdf download started");
        if let Some(previous) = self.downloads.remove(href) {
            self.scheduler.cancel(previous);
        }
        let token = self.scheduler.schedule(
            self.timings.download_revert(),
            UiTask::RevertDownload(href.to_string()),
        );
        self.downloads.insert(href.to_string(), token);
    }

    pub fn is_download_loading(&self, href: &str) -> bool {
        self.downloads.contains_key(href)
    }

    // ── Deferred work ───────────────────────────────────────────────

    /// Run a task whose timer elapsed. Cancelled tasks are ignored.
    pub fn fire(&mut self, token: TaskToken) {
        if let Some(task) = self.scheduler.fire(token) {
            self.run(task);
        }
    }

    /// Move virtual time forward, running everything that comes due.
    #[cfg(test)]
    pub fn advance(&mut self, by: std::time::Duration) {
        for task in self.scheduler.advance(by) {
            self.run(task);
        }
    }

    /// Newly scheduled tasks that need a real timer.
    pub fn take_armed(&mut self) -> Vec<Armed> {
        self.scheduler.take_armed()
    }

    fn run(&mut self, task: UiTask) {
        match task {
            UiTask::SearchNotice => {
                self.search_notice = None;
                if self.is_busy() {
                    self.present_alert(SEARCH_IN_PROGRESS_MESSAGE, AlertKind::Info);
                }
            }
            UiTask::DismissAlert(id) => {
                self.alert_timers.remove(&id);
                self.alerts.retain(|a| a.id != id);
            }
            UiTask::RevertDownload(href) => {
                self.downloads.remove(&href);
            }
        }
    }
}

use dioxus::prelude::*;
use serde::Deserialize;

use crate::controller::HistoryEvent;
use crate::fetcher::use_court_fetcher;

/// Forwards `pageshow` and `popstate` from the window to Rust.
const LISTENER_JS: &str = r#"
window.addEventListener('pageshow', function (e) {
    dioxus.send({ event: 'pageshow', persisted: e.persisted });
});
window.addEventListener('popstate', function () {
    dioxus.send({ event: 'popstate' });
});
"#;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum LifecycleMessage {
    Pageshow {
        #[serde(default)]
        persisted: bool,
    },
    Popstate,
}

impl From<LifecycleMessage> for HistoryEvent {
    fn from(msg: LifecycleMessage) -> Self {
        match msg {
            LifecycleMessage::Pageshow { persisted } => HistoryEvent::PageShow { persisted },
            LifecycleMessage::Popstate => HistoryEvent::PopState,
        }
    }
}

/// Headless component that resets busy form controls when the browser
/// restores the page from history.
///
/// Mount once at the app root.
#[component]
pub fn PageLifecycle() -> Element {
    let fetcher = use_court_fetcher();

    use_future(move || async move {
        let mut listener = document::eval(LISTENER_JS);
        loop {
            match listener.recv::<LifecycleMessage>().await {
                Ok(msg) => fetcher.update(|c| c.restore_from_history(msg.into())),
                Err(e) => {
                    tracing::warn!("page lifecycle listener stopped: {e}");
                    break;
                }
            }
        }
    });

    // Headless
    rsx! {}
}

use dioxus::prelude::*;

mod api;
pub mod config;
pub mod controller;
pub mod fetcher;
mod lifecycle;
mod routes;
pub mod scheduler;
mod timers;

use controller::FormController;
use fetcher::CourtFetcher;
use lifecycle::PageLifecycle;
use routes::Route;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One controller for the whole page; every route reads it from context.
    use_context_provider(|| {
        CourtFetcher::new(FormController::new(config::ui_config().timings))
    });

    rsx! {
        PageLifecycle {}
        Router::<Route> {}
    }
}

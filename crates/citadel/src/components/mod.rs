//! UI components for the Citadel application.
//!
//! - `app_shell`: AppBar, Footer
//! - `filters`: FilterCard, FilterInput
//! - `results`: ResultsPanel, CharacterCardView, status panels
//!
//! # State
//!
//! [`App`] owns the only two pieces of state: the results region
//! (`Signal<DisplayState>`) and the filter values (`Signal<FilterSet>`).
//! Both are handed to the core search actions through the
//! [`DisplayRegion`] and [`FilterInputs`] adapters, so the core never
//! sees a signal and the components never decide what to show.

mod app_shell;
mod filters;
mod results;

pub use app_shell::{AppBar, Footer};
pub use filters::{FilterCard, FilterInput};
pub use results::{CharacterCardView, ResultsPanel};

use citadel_core::config::API_BASE_URL;
use citadel_core::platform::PlatformSleeper;
use citadel_core::search::clear;
use citadel_core::{
    CharacterSearch, DisplayState, FetchController, FetchError, FilterForm, FilterSet,
    ReqwestTransport, ResultsView, SearchGeneration,
};
use dioxus::logger::tracing::{debug, error};
use dioxus::core::Task;
use dioxus::prelude::*;

/// Search bound to the platform's HTTP client and timer.
pub type PlatformSearch = CharacterSearch<ReqwestTransport, PlatformSleeper>;

/// User actions routed through the search callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// Fetch the first page of every character
    All,
    /// Fetch with the current filter values
    Filtered,
    /// Back to the placeholder with empty filters
    Clear,
}

/// Results region backed by a signal.
#[derive(Clone, Copy)]
pub struct DisplayRegion(pub Signal<DisplayState>);

impl ResultsView for DisplayRegion {
    fn show(&mut self, state: DisplayState) {
        self.0.set(state);
    }
}

/// Filter inputs backed by a signal.
pub struct FilterInputs(pub Signal<FilterSet>);

impl FilterForm for FilterInputs {
    fn filters(&self) -> FilterSet {
        self.0.read().clone()
    }

    fn clear_filters(&mut self) {
        self.0.write().clear();
    }
}

/// Build the search used by the app.
pub fn create_platform_search() -> Result<PlatformSearch, FetchError> {
    let transport = ReqwestTransport::new()?;
    let controller = FetchController::new(transport, PlatformSleeper);
    Ok(CharacterSearch::new(controller, API_BASE_URL))
}

#[component]
pub fn App() -> Element {
    let search = use_hook(|| match create_platform_search() {
        Ok(search) => Some(search),
        Err(e) => {
            error!("Failed to initialize HTTP client: {}", e);
            None
        }
    });

    let display = use_signal(DisplayState::default);
    let filters = use_signal(FilterSet::new);
    let generation = use_hook(SearchGeneration::new);

    // At most one fetch sequence runs at a time. A newer action cancels it,
    // and its ticket goes stale so nothing it still shows can land.
    let mut in_flight = use_signal(|| None::<Task>);

    let run_search = use_callback(move |action: SearchAction| {
        let mut region = generation.begin().guard(DisplayRegion(display));
        if let Some(task) = in_flight.write().take() {
            debug!("Cancelling in-flight search");
            task.cancel();
        }

        if action == SearchAction::Clear {
            clear(&mut FilterInputs(filters), &mut region);
            return;
        }

        let Some(search) = search.clone() else {
            region.show(DisplayState::Error {
                message: "HTTP client unavailable; reload the page to try again.".to_string(),
            });
            return;
        };

        let task = spawn(async move {
            if action == SearchAction::All {
                search.fetch_all(&mut region).await;
            } else if let Err(e) = search
                .fetch_filtered(&FilterInputs(filters), &mut region)
                .await
            {
                debug!("Filtered search not sent: {}", e);
            }
            if region.is_current() {
                in_flight.set(None);
            }
        });
        in_flight.set(Some(task));
    });

    let searching = in_flight.read().is_some();

    rsx! {
        div { class: "ct-app",
            AppBar {}

            main { class: "ct-main",
                FilterCard {
                    filters,
                    searching,
                    on_search: move |_| run_search.call(SearchAction::Filtered),
                    on_search_all: move |_| run_search.call(SearchAction::All),
                    on_clear: move |_| run_search.call(SearchAction::Clear),
                }

                ResultsPanel { state: display }
            }

            Footer {}
        }
    }
}

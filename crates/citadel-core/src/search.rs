//! The three user actions: fetch all, fetch filtered, clear.
//!
//! Instead of reaching for global UI handles, each action receives the two
//! things it touches: a [`ResultsView`] (the single display region) and a
//! [`FilterForm`] (the five filter inputs). The Dioxus app implements them
//! over signals, the CLI over plain values.
//!
//! Actions may overlap in an event-driven UI. A [`SearchGeneration`] hands
//! each action a [`SearchTicket`]; views wrapped by an older ticket drop
//! every update, so a superseded sequence never overwrites newer results.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::error::FilterError;
use crate::fetch::{FetchController, FetchOutcome, FetchPhase, Sleeper};
use crate::filters::FilterSet;
use crate::render::DisplayState;
use crate::transport::HttpTransport;

/// The region that shows search results. Every call replaces its content.
pub trait ResultsView {
    fn show(&mut self, state: DisplayState);
}

/// The filter inputs.
pub trait FilterForm {
    /// Current raw values of all five fields.
    fn filters(&self) -> FilterSet;

    /// Empties all five fields.
    fn clear_filters(&mut self);
}

impl ResultsView for DisplayState {
    fn show(&mut self, state: DisplayState) {
        *self = state;
    }
}

impl FilterForm for FilterSet {
    fn filters(&self) -> FilterSet {
        self.clone()
    }

    fn clear_filters(&mut self) {
        self.clear();
    }
}

/// Restores the initial placeholder and empties every filter.
///
/// Needs no transport, so it works even when no HTTP client could be built.
pub fn clear<F, V>(form: &mut F, view: &mut V)
where
    F: FilterForm,
    V: ResultsView,
{
    form.clear_filters();
    view.show(DisplayState::Placeholder);
}

/// Counter of started actions, shared by every ticket it issues.
#[derive(Debug, Clone, Default)]
pub struct SearchGeneration {
    current: Rc<Cell<u64>>,
}

impl SearchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new action. Every ticket issued before is stale from now on.
    pub fn begin(&self) -> SearchTicket {
        let id = self.current.get().wrapping_add(1);
        self.current.set(id);
        SearchTicket {
            generation: self.clone(),
            id,
        }
    }
}

/// Proof that an action was the latest one when it started.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    generation: SearchGeneration,
    id: u64,
}

impl SearchTicket {
    /// True until another action begins.
    pub fn is_current(&self) -> bool {
        self.generation.current.get() == self.id
    }

    /// Wraps `view` so it only accepts updates while this ticket is current.
    pub fn guard<V: ResultsView>(self, view: V) -> LatestView<V> {
        LatestView { ticket: self, view }
    }
}

/// Results view that ignores updates from superseded actions.
#[derive(Debug)]
pub struct LatestView<V> {
    ticket: SearchTicket,
    view: V,
}

impl<V> LatestView<V> {
    pub fn is_current(&self) -> bool {
        self.ticket.is_current()
    }
}

impl<V: ResultsView> ResultsView for LatestView<V> {
    fn show(&mut self, state: DisplayState) {
        if self.ticket.is_current() {
            self.view.show(state);
        } else {
            debug!("Dropping display update from a superseded search");
        }
    }
}

/// Fetch controller bound to an API base URL.
#[derive(Debug, Clone)]
pub struct CharacterSearch<T, S> {
    controller: FetchController<T, S>,
    base_url: String,
}

impl<T: HttpTransport, S: Sleeper> CharacterSearch<T, S> {
    pub fn new(controller: FetchController<T, S>, base_url: impl Into<String>) -> Self {
        Self {
            controller,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the base URL with no filters (first page of every character).
    pub async fn fetch_all<V: ResultsView>(&self, view: &mut V) -> FetchOutcome {
        info!("Fetching all characters");
        self.fetch_url(&self.base_url, view).await
    }

    /// Fetches with the form's filters.
    ///
    /// With every field empty the view shows the input error and no request
    /// is made.
    pub async fn fetch_filtered<F, V>(
        &self,
        form: &F,
        view: &mut V,
    ) -> Result<FetchOutcome, FilterError>
    where
        F: FilterForm,
        V: ResultsView,
    {
        let url = match form.filters().build_url(&self.base_url) {
            Ok(url) => url,
            Err(e) => {
                info!("Search rejected: {}", e);
                view.show(DisplayState::from_filter_error(&e));
                return Err(e);
            }
        };

        Ok(self.fetch_url(&url, view).await)
    }

    /// Same as the free [`clear`].
    pub fn clear<F, V>(&self, form: &mut F, view: &mut V)
    where
        F: FilterForm,
        V: ResultsView,
    {
        clear(form, view);
    }

    async fn fetch_url<V: ResultsView>(&self, url: &str, view: &mut V) -> FetchOutcome {
        let outcome = self
            .controller
            .fetch_characters(url, |phase| {
                if phase == FetchPhase::Loading {
                    view.show(DisplayState::Loading);
                }
            })
            .await;

        debug!("Search produced {} characters", outcome.record_count());
        view.show(DisplayState::from_outcome(&outcome));
        outcome
    }
}

//! Search execution for the CLI.
//!
//! Runs one core search action against a terminal "results region" that
//! simply remembers the last display state, optionally echoing the loading
//! indicator to stderr.

use anyhow::{Context, Result};
use citadel_core::platform::PlatformSleeper;
use citadel_core::{
    CharacterSearch, DisplayState, FetchController, FetchOutcome, FilterSet, HttpTransport,
    ReqwestTransport, ResultsView, Sleeper,
};
use tracing::info;

/// What the user asked for.
pub enum Request {
    All,
    Filtered(FilterSet),
}

/// Result of one search, ready for formatting.
pub struct SearchReport {
    /// Human description of the request: the query string or "all characters"
    pub query: String,
    /// `None` when the search was rejected before any request
    pub outcome: Option<FetchOutcome>,
    pub display: DisplayState,
}

impl SearchReport {
    /// False when the region ended on an error (input error or exhausted retries).
    pub fn succeeded(&self) -> bool {
        !matches!(self.display, DisplayState::Error { .. })
    }
}

/// Results region for a terminal.
struct TerminalView {
    state: DisplayState,
    show_progress: bool,
}

impl ResultsView for TerminalView {
    fn show(&mut self, state: DisplayState) {
        if self.show_progress && state == DisplayState::Loading {
            eprintln!("{}", citadel_core::render::LOADING_TEXT);
        }
        self.state = state;
    }
}

/// Runs `request` against the public (or configured) API.
pub async fn execute(
    api_url: &str,
    request: Request,
    show_progress: bool,
) -> Result<SearchReport> {
    info!("Using character endpoint {}", api_url);
    let transport = ReqwestTransport::new().context("Failed to build HTTP client")?;
    let search = CharacterSearch::new(FetchController::new(transport, PlatformSleeper), api_url);
    Ok(execute_with(&search, request, show_progress).await)
}

/// Runs `request` with an already built search.
pub async fn execute_with<T, S>(
    search: &CharacterSearch<T, S>,
    request: Request,
    show_progress: bool,
) -> SearchReport
where
    T: HttpTransport,
    S: Sleeper,
{
    let mut view = TerminalView {
        state: DisplayState::Placeholder,
        show_progress,
    };

    let (query, outcome) = match request {
        Request::All => {
            let outcome = search.fetch_all(&mut view).await;
            ("all characters".to_string(), Some(outcome))
        }
        Request::Filtered(filters) => {
            let query = filters.to_query().unwrap_or_default();
            let outcome = search.fetch_filtered(&filters, &mut view).await.ok();
            (query, outcome)
        }
    };

    SearchReport {
        query,
        outcome,
        display: view.state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use citadel_core::{FetchError, FilterField, HttpResponse};
    use std::time::Duration;

    struct FixedTransport {
        status: u16,
        body: &'static str,
    }

    #[async_trait(?Send)]
    impl HttpTransport for FixedTransport {
        async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
            Ok(HttpResponse::new(self.status, "", self.body))
        }
    }

    struct NoSleep;

    #[async_trait(?Send)]
    impl Sleeper for NoSleep {
        async fn sleep(&self, _duration: Duration) {}
    }

    fn search(status: u16, body: &'static str) -> CharacterSearch<FixedTransport, NoSleep> {
        let transport = FixedTransport { status, body };
        CharacterSearch::new(FetchController::new(transport, NoSleep), "http://localhost/api")
    }

    #[tokio::test]
    async fn test_all_characters() {
        let search = search(200, r#"{"results": [{"name": "Rick Sanchez"}]}"#);
        let report = execute_with(&search, Request::All, false).await;

        assert!(report.succeeded());
        assert_eq!(report.query, "all characters");
        assert_eq!(report.display.cards().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_filters_rejected() {
        let search = search(200, "{}");
        let report = execute_with(&search, Request::Filtered(FilterSet::new()), false).await;

        assert!(!report.succeeded());
        assert!(report.outcome.is_none());
    }

    #[tokio::test]
    async fn test_not_found_is_success() {
        let search = search(404, "");
        let filters = FilterSet::new().with(FilterField::Name, "nobody");
        let report = execute_with(&search, Request::Filtered(filters), false).await;

        assert!(report.succeeded());
        assert_eq!(report.query, "name=nobody");
        assert_eq!(report.outcome, Some(FetchOutcome::EmptySuccess));
        assert_eq!(report.display, DisplayState::NoResults);
    }

    #[tokio::test]
    async fn test_server_error_fails_after_retries() {
        let search = search(500, "");
        let report = execute_with(&search, Request::All, false).await;

        assert!(!report.succeeded());
        assert!(matches!(report.outcome, Some(FetchOutcome::Failure(_))));
    }
}

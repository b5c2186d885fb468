//! Fetch-retry controller.
//!
//! [`FetchController::fetch_characters`] runs one fetch sequence for a URL:
//!
//! ```text
//! Loading ─▶ Attempting ─┬─ 2xx ──────────────▶ Done(Success)
//!                ▲       ├─ 404 ──────────────▶ Done(EmptySuccess)
//!                │       └─ other / transport ─┐
//!                │                             ▼
//!                └──── Retrying (sleep) ◀── attempts left?
//!                                              │ no
//!                                              ▼
//!                                        Done(Failure)
//! ```
//!
//! A 404 is the API's way of saying "no character matches"; it is never
//! retried and never reported as an error. Every other non-2xx status, every
//! transport failure and every undecodable body share one retry path.
//!
//! The controller does not touch the UI. It reports progress through a
//! [`FetchPhase`] observer; `Loading` is emitted exactly once, before the
//! first request.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::character::{CharacterPage, CharacterRecord};
use crate::config::{BASE_BACKOFF_MS, MAX_ATTEMPTS};
use crate::error::FetchError;
use crate::transport::HttpTransport;

/// Non-blocking wait used between attempts.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Terminal result of one fetch sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 2xx response. May carry zero records.
    Success(Vec<CharacterRecord>),
    /// 404: the API found no matching character.
    EmptySuccess,
    /// Every attempt failed; carries the last error detail.
    Failure(String),
}

impl FetchOutcome {
    /// Number of records carried (zero for everything but a non-empty success).
    pub fn record_count(&self) -> usize {
        match self {
            FetchOutcome::Success(records) => records.len(),
            _ => 0,
        }
    }

    /// True for `Success([])` and `EmptySuccess`, which render identically.
    pub fn is_empty_result(&self) -> bool {
        match self {
            FetchOutcome::Success(records) => records.is_empty(),
            FetchOutcome::EmptySuccess => true,
            FetchOutcome::Failure(_) => false,
        }
    }
}

/// Progress notifications emitted while a sequence runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    /// Emitted once, before the first attempt.
    Loading,
    /// A request is about to be issued (1-based).
    Attempting { attempt: u32 },
    /// Attempt `attempt` failed; waiting `delay` before the next one.
    Retrying { attempt: u32, delay: Duration },
    /// The sequence finished. Always the last phase.
    Done,
}

/// Attempt budget and backoff unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first. Values below 1 behave as 1.
    pub max_attempts: u32,
    /// Wait after the first failed attempt; doubles on each further failure.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            base_delay: Duration::from_millis(BASE_BACKOFF_MS),
        }
    }
}

impl RetryPolicy {
    /// Backoff after failed attempt `attempt` (1-based): `2^(attempt-1) * base_delay`.
    ///
    /// With the default policy this is 1s, 2s, 4s for attempts 1, 2, 3.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.base_delay.saturating_mul(1u32 << exponent)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Runs fetch sequences against a transport, sleeping between retries.
#[derive(Debug, Clone)]
pub struct FetchController<T, S> {
    transport: T,
    sleeper: S,
    policy: RetryPolicy,
}

impl<T: HttpTransport, S: Sleeper> FetchController<T, S> {
    /// Creates a controller with the default retry policy.
    pub fn new(transport: T, sleeper: S) -> Self {
        Self::with_policy(transport, sleeper, RetryPolicy::default())
    }

    pub fn with_policy(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    /// Fetches `url` until it succeeds, returns 404, or the attempt budget runs out.
    ///
    /// Exactly one outcome is returned per call. `observer` sees `Loading`
    /// first and `Done` last.
    pub async fn fetch_characters<F>(&self, url: &str, mut observer: F) -> FetchOutcome
    where
        F: FnMut(FetchPhase),
    {
        observer(FetchPhase::Loading);

        let max_attempts = self.policy.attempts();
        let mut attempt = 0;

        let outcome = loop {
            attempt += 1;
            observer(FetchPhase::Attempting { attempt });

            let error = match self.attempt(url).await {
                Ok(outcome) => break outcome,
                Err(e) => e,
            };

            warn!(
                "Fetch attempt {}/{} for {} failed: {}",
                attempt, max_attempts, url, error
            );

            if attempt >= max_attempts {
                break FetchOutcome::Failure(error.to_string());
            }

            let delay = self.policy.delay_for(attempt);
            observer(FetchPhase::Retrying { attempt, delay });
            self.sleeper.sleep(delay).await;
        };

        match &outcome {
            FetchOutcome::Success(records) => {
                info!("Fetched {} characters from {}", records.len(), url)
            }
            FetchOutcome::EmptySuccess => info!("No characters match {}", url),
            FetchOutcome::Failure(detail) => {
                let exhausted = FetchError::ExhaustedRetries {
                    attempts: attempt,
                    detail: detail.clone(),
                };
                warn!("Giving up on {}: {}", url, exhausted)
            }
        }

        observer(FetchPhase::Done);
        outcome
    }

    /// One request, classified. `Err` means "retryable".
    async fn attempt(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        let response = self.transport.get(url).await?;

        if response.is_success() {
            let page: CharacterPage = serde_json::from_str(&response.body)?;
            if let Some(info) = &page.info {
                info!(
                    "API reports {} matching characters across {} pages",
                    info.count, info.pages
                );
            }
            return Ok(FetchOutcome::Success(page.into_results()));
        }

        match response.status {
            404 => Ok(FetchOutcome::EmptySuccess),
            status => Err(FetchError::RetryableHttp {
                status,
                reason: response.reason,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        morty_json, ok_page, page_json, rick_json, RecordingSleeper, ScriptedTransport,
    };
    use crate::transport::HttpResponse;

    const URL: &str = "https://rickandmortyapi.com/api/character?name=rick";

    fn controller(
        transport: &ScriptedTransport,
        sleeper: &RecordingSleeper,
    ) -> FetchController<ScriptedTransport, RecordingSleeper> {
        FetchController::new(transport.clone(), sleeper.clone())
    }

    fn server_error() -> Result<HttpResponse, FetchError> {
        Ok(HttpResponse::new(500, "Internal Server Error", "oops"))
    }

    #[test]
    fn test_default_backoff_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay_for(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(4000));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy {
            max_attempts: 100,
            base_delay: Duration::from_secs(1),
        };
        assert!(policy.delay_for(64) >= policy.delay_for(32));
    }

    #[tokio::test]
    async fn test_success_first_attempt() {
        let transport = ScriptedTransport::new(vec![ok_page(&[rick_json(), morty_json()])]);
        let sleeper = RecordingSleeper::default();

        let outcome = controller(&transport, &sleeper)
            .fetch_characters(URL, |_| {})
            .await;

        match outcome {
            FetchOutcome::Success(records) => {
                let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, vec!["Rick Sanchez", "Morty Smith"]);
            }
            other => panic!("expected success, got {:?}", other),
        }
        assert_eq!(transport.calls(), vec![URL.to_string()]);
        assert!(sleeper.delays().is_empty());
    }

    #[tokio::test]
    async fn test_empty_results_is_success_with_zero_records() {
        let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(
            200,
            "OK",
            r#"{"results": []}"#,
        ))]);
        let sleeper = RecordingSleeper::default();

        let outcome = controller(&transport, &sleeper)
            .fetch_characters(URL, |_| {})
            .await;

        assert_eq!(outcome, FetchOutcome::Success(vec![]));
        assert!(outcome.is_empty_result());
    }

    #[tokio::test]
    async fn test_missing_results_is_success_with_zero_records() {
        let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(200, "OK", "{}"))]);
        let sleeper = RecordingSleeper::default();

        let outcome = controller(&transport, &sleeper)
            .fetch_characters(URL, |_| {})
            .await;

        assert_eq!(outcome, FetchOutcome::Success(vec![]));
    }

    #[tokio::test]
    async fn test_not_found_is_empty_success_without_retry() {
        let transport = ScriptedTransport::new(vec![
            Ok(HttpResponse::new(404, "Not Found", r#"{"error":"There is nothing here"}"#)),
            ok_page(&[rick_json()]),
        ]);
        let sleeper = RecordingSleeper::default();

        let outcome = controller(&transport, &sleeper)
            .fetch_characters(URL, |_| {})
            .await;

        assert_eq!(outcome, FetchOutcome::EmptySuccess);
        assert_eq!(transport.calls().len(), 1);
        assert!(sleeper.delays().is_empty());
    }

    #[tokio::test]
    async fn test_server_errors_exhaust_retries() {
        let transport =
            ScriptedTransport::new(vec![server_error(), server_error(), server_error()]);
        let sleeper = RecordingSleeper::default();

        let outcome = controller(&transport, &sleeper)
            .fetch_characters(URL, |_| {})
            .await;

        assert_eq!(
            outcome,
            FetchOutcome::Failure("Server error: 500 Internal Server Error".to_string())
        );
        assert_eq!(transport.calls(), vec![URL.to_string(); 3]);
        assert_eq!(
            sleeper.delays(),
            vec![Duration::from_millis(1000), Duration::from_millis(2000)]
        );
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failure() {
        let transport = ScriptedTransport::new(vec![
            Err(FetchError::Network("connection reset".to_string())),
            Ok(HttpResponse::new(503, "Service Unavailable", "")),
            ok_page(&[rick_json()]),
        ]);
        let sleeper = RecordingSleeper::default();

        let outcome = controller(&transport, &sleeper)
            .fetch_characters(URL, |_| {})
            .await;

        assert_eq!(outcome.record_count(), 1);
        assert_eq!(transport.calls().len(), 3);
        assert_eq!(
            sleeper.delays(),
            vec![Duration::from_millis(1000), Duration::from_millis(2000)]
        );
    }

    #[tokio::test]
    async fn test_failure_carries_last_error_detail() {
        let transport = ScriptedTransport::new(vec![
            server_error(),
            Ok(HttpResponse::new(502, "Bad Gateway", "")),
            Err(FetchError::Network("dns lookup failed".to_string())),
        ]);
        let sleeper = RecordingSleeper::default();

        let outcome = controller(&transport, &sleeper)
            .fetch_characters(URL, |_| {})
            .await;

        assert_eq!(
            outcome,
            FetchOutcome::Failure("Network error: dns lookup failed".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_retried() {
        let transport = ScriptedTransport::new(vec![
            Ok(HttpResponse::new(200, "OK", "<html>not json</html>")),
            ok_page(&[morty_json()]),
        ]);
        let sleeper = RecordingSleeper::default();

        let outcome = controller(&transport, &sleeper)
            .fetch_characters(URL, |_| {})
            .await;

        assert_eq!(outcome.record_count(), 1);
        assert_eq!(sleeper.delays(), vec![Duration::from_millis(1000)]);
    }

    #[tokio::test]
    async fn test_phases_loading_once_then_done_once() {
        let transport =
            ScriptedTransport::new(vec![server_error(), server_error(), server_error()]);
        let sleeper = RecordingSleeper::default();
        let mut phases = Vec::new();

        controller(&transport, &sleeper)
            .fetch_characters(URL, |phase| phases.push(phase))
            .await;

        assert_eq!(
            phases,
            vec![
                FetchPhase::Loading,
                FetchPhase::Attempting { attempt: 1 },
                FetchPhase::Retrying {
                    attempt: 1,
                    delay: Duration::from_millis(1000)
                },
                FetchPhase::Attempting { attempt: 2 },
                FetchPhase::Retrying {
                    attempt: 2,
                    delay: Duration::from_millis(2000)
                },
                FetchPhase::Attempting { attempt: 3 },
                FetchPhase::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_loading_emitted_before_first_request() {
        let transport = ScriptedTransport::new(vec![ok_page(&[])]);
        let sleeper = RecordingSleeper::default();
        let mut calls_at_loading = None;

        controller(&transport, &sleeper)
            .fetch_characters(URL, |phase| {
                if phase == FetchPhase::Loading {
                    calls_at_loading = Some(transport.calls().len());
                }
            })
            .await;

        assert_eq!(calls_at_loading, Some(0));
    }

    #[tokio::test]
    async fn test_custom_policy_single_attempt() {
        let transport = ScriptedTransport::new(vec![server_error(), ok_page(&[rick_json()])]);
        let sleeper = RecordingSleeper::default();
        let policy = RetryPolicy {
            max_attempts: 0,
            base_delay: Duration::from_millis(10),
        };

        let outcome = FetchController::with_policy(transport.clone(), sleeper.clone(), policy)
            .fetch_characters(URL, |_| {})
            .await;

        assert!(matches!(outcome, FetchOutcome::Failure(_)));
        assert_eq!(transport.calls().len(), 1);
        assert!(sleeper.delays().is_empty());
    }

    #[tokio::test]
    async fn test_url_is_reused_unmodified() {
        let url = format!("{}&status=alive", URL);
        let transport = ScriptedTransport::new(vec![
            server_error(),
            Ok(HttpResponse::new(200, "OK", page_json(&[]))),
        ]);
        let sleeper = RecordingSleeper::default();

        controller(&transport, &sleeper)
            .fetch_characters(&url, |_| {})
            .await;

        assert_eq!(transport.calls(), vec![url.clone(), url]);
    }

    #[tokio::test]
    async fn test_any_2xx_is_success() {
        let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(
            203,
            "Non-Authoritative Information",
            page_json(&[rick_json()]),
        ))]);
        let sleeper = RecordingSleeper::default();

        let outcome = controller(&transport, &sleeper)
            .fetch_characters(URL, |_| {})
            .await;

        assert_eq!(outcome.record_count(), 1);
        assert_eq!(transport.calls().len(), 1);
    }
}

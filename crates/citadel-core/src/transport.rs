//! HTTP transport for the fetch-retry controller.
//!
//! The controller only needs "GET this URL and give me the status and body",
//! so the transport is a small trait. [`ReqwestTransport`] is the production
//! implementation; reqwest works on both native and WASM platforms:
//! - Native: hyper with rustls-tls for HTTPS
//! - WASM: the browser `fetch()` API
//!
//! Tests substitute a scripted transport so no network is involved.

use async_trait::async_trait;
use tracing::debug;

use crate::error::FetchError;

/// Status, reason phrase and body of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase, e.g. `Internal Server Error`
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET request.
///
/// Implementations must not retry on their own: every call is one attempt
/// as far as the controller's backoff schedule is concerned. Any non-2xx
/// status is returned as `Ok`; only transport-level failures are `Err`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// reqwest-backed transport.
///
/// `reqwest::Client` pools connections internally, so one transport is built
/// per app and cloned cheaply wherever it is needed.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with a fresh client.
    ///
    /// No request timeout is configured; a hung request is bounded only by
    /// the platform.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(crate::config::USER_AGENT)
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Builds a transport on top of the browser's `fetch()`.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self::with_client(reqwest::Client::new()))
    }

    /// Wraps an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        validate_url(url)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await?;

        debug!("GET {} -> {} ({} bytes)", url, status.as_u16(), body.len());

        Ok(HttpResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

/// Rejects URLs that do not parse or are not http(s).
pub fn validate_url(url: &str) -> Result<url::Url, FetchError> {
    let parsed =
        url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(FetchError::InvalidUrl(format!(
            "Unsupported scheme: {} (only http/https allowed)",
            parsed.scheme()
        )));
    }

    Ok(parsed)
}

//! Configuration for the CLI.
//!
//! The only setting is the character endpoint. Resolution order:
//! 1. `--api-url` flag
//! 2. `$CITADEL_API_URL` environment variable (read by clap)
//! 3. The public API ([`API_BASE_URL`])

use anyhow::{anyhow, Context, Result};
use citadel_core::config::API_BASE_URL;

/// Environment variable for a custom character endpoint
pub const API_URL_ENV: &str = "CITADEL_API_URL";

/// Returns the endpoint to query, validated and without a trailing slash.
pub fn resolve_api_url(custom: Option<&str>) -> Result<String> {
    let raw = match custom.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => return Ok(API_BASE_URL.to_string()),
    };

    let parsed = url::Url::parse(raw).with_context(|| format!("Invalid API URL: {}", raw))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(anyhow!(
            "Unsupported API URL scheme: {} (only http/https allowed)",
            parsed.scheme()
        ));
    }

    if parsed.query().is_some() {
        return Err(anyhow!(
            "API URL must not contain a query string; use the filter flags instead: {}",
            raw
        ));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

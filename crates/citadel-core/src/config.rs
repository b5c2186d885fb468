//! Production configuration constants.
//!
//! These values define how Citadel talks to the character API and how it
//! presents results. Front ends may override the API URL (the CLI reads it
//! from a flag or environment variable) but the retry schedule is fixed.
//!
//! # Usage
//!
//! ```
//! use citadel_core::config::{API_BASE_URL, MAX_ATTEMPTS};
//!
//! assert!(API_BASE_URL.starts_with("https://"));
//! assert_eq!(MAX_ATTEMPTS, 3);
//! ```

// =============================================================================
// Remote API
// =============================================================================

/// Character endpoint of the Rick and Morty API.
///
/// `GET` with no query returns the first page of all characters; filters are
/// appended as `?name=...&status=...`.
pub const API_BASE_URL: &str = "https://rickandmortyapi.com/api/character";

/// User agent sent by native builds. Browsers set their own.
pub const USER_AGENT: &str = "Citadel/0.1.0 (character lookup client)";

// =============================================================================
// Retry Configuration
// =============================================================================

/// Total number of attempts per fetch, including the first one.
pub const MAX_ATTEMPTS: u32 = 3;

/// Backoff unit in milliseconds.
///
/// The wait after attempt `n` is `2^(n-1) * BASE_BACKOFF_MS`, giving
/// 1s, 2s and 4s for attempts 1, 2 and 3.
pub const BASE_BACKOFF_MS: u64 = 1000;

// =============================================================================
// Presentation
// =============================================================================

/// Image shown on a card when the character portrait fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/400x300/4d4e73/97ce4c?text=Image+Unavailable";

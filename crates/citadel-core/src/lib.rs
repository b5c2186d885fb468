//! # Citadel Core
//!
//! Platform-independent library behind the Citadel character lookup client.
//!
//! This crate owns everything that does not touch a UI toolkit, so the same
//! query, retry and rendering rules are shared by the Dioxus app and the CLI.
//!
//! ## Modules
//!
//! - [`filters`] - Filter fields and query string construction
//! - [`character`] - Character records as returned by the remote API
//! - [`fetch`] - Fetch-retry controller with exponential backoff
//! - [`transport`] - HTTP transport trait and reqwest implementation
//! - [`platform`] - Platform-specific timers (tokio on native, gloo on WASM)
//! - [`render`] - Mapping from fetch outcomes to display states and HTML
//! - [`search`] - The "fetch all", "fetch filtered" and "clear" actions
//! - [`config`] - Production configuration constants
//! - [`error`] - Error types for filtering and fetching

#![forbid(unsafe_code)]

pub mod character;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod platform;
pub mod render;
pub mod search;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_utils;

pub use character::{CharacterPage, CharacterRecord, NamedLink, PageInfo};
pub use error::{FetchError, FilterError};
pub use fetch::{FetchController, FetchOutcome, FetchPhase, RetryPolicy, Sleeper};
pub use filters::{FilterField, FilterSet};
pub use render::{render_html, CharacterCard, DisplayState};
pub use search::{
    CharacterSearch, FilterForm, LatestView, ResultsView, SearchGeneration, SearchTicket,
};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

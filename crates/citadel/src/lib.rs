//! Citadel - character lookup client for the Rick and Morty API.
//!
//! A Dioxus front end over [`citadel_core`]: a filter form, a single results
//! region, and the three actions "search", "all characters" and "clear".
//! Fetching, retrying and rendering decisions all live in the core crate;
//! this crate only wires them to signals and draws the resulting
//! [`DisplayState`](citadel_core::DisplayState).
//!
//! # Platform Support
//!
//! - **Web (WASM)**: requests go through the browser's `fetch()`
//! - **Desktop / Mobile**: requests go through reqwest on tokio

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;

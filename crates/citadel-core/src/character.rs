//! Character records as returned by the remote API.
//!
//! These types are a read-only projection of the API's character object:
//! only the fields the client displays (plus `id` for stable list keys) are
//! decoded, and every field tolerates being absent.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another API resource (origin, location).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One character as displayed on a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// `Alive`, `Dead` or `unknown`
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
    /// Sub-species, usually empty
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub origin: NamedLink,
    /// Last known location
    #[serde(default)]
    pub location: NamedLink,
    /// Portrait URL
    #[serde(default)]
    pub image: String,
}

/// Pagination metadata. Parsed for logging only; Citadel never follows `next`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Body of a successful character query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: Option<PageInfo>,
    #[serde(default)]
    pub results: Option<Vec<CharacterRecord>>,
}

impl CharacterPage {
    /// Records on this page; an absent or `null` collection is empty.
    pub fn into_results(self) -> Vec<CharacterRecord> {
        self.results.unwrap_or_default()
    }
}

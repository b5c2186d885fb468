//! Mapping from fetch outcomes to what the results region shows.
//!
//! The renderer is pure: [`DisplayState::from_outcome`] turns a
//! [`FetchOutcome`] into a complete description of the region, and each new
//! state replaces the previous one wholesale. Front ends draw a
//! `DisplayState` however they like; [`render_html`] is the reference
//! markup used by the CLI's `--html` output.

use crate::character::CharacterRecord;
use crate::config::PLACEHOLDER_IMAGE_URL;
use crate::error::FilterError;
use crate::fetch::FetchOutcome;

pub const PLACEHOLDER_TEXT: &str =
    "Use the filters to search for characters, or load every character at once.";
pub const LOADING_TEXT: &str = "Loading characters...";
pub const NO_RESULTS_TITLE: &str = "No results";
pub const NO_RESULTS_TEXT: &str = "No characters match the search criteria.";
pub const ERROR_TITLE: &str = "Request failed";
pub const ERROR_HINT: &str = "Try adjusting the filters or check your connection.";

/// Everything the results region can show. Exactly one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Initial message, before any search and after "clear".
    #[default]
    Placeholder,
    Loading,
    NoResults,
    Results {
        count: usize,
        summary: String,
        cards: Vec<CharacterCard>,
    },
    Error {
        message: String,
    },
}

impl DisplayState {
    /// Renders a terminal fetch outcome.
    pub fn from_outcome(outcome: &FetchOutcome) -> Self {
        if outcome.is_empty_result() {
            return DisplayState::NoResults;
        }

        match outcome {
            FetchOutcome::Success(records) => Self::results(records),
            FetchOutcome::Failure(detail) => DisplayState::Error {
                message: format!("Could not complete the request. Details: {}.", detail),
            },
            FetchOutcome::EmptySuccess => DisplayState::NoResults,
        }
    }

    /// Renders an input error that stopped a search before any request.
    pub fn from_filter_error(err: &FilterError) -> Self {
        DisplayState::Error {
            message: err.to_string(),
        }
    }

    fn results(records: &[CharacterRecord]) -> Self {
        DisplayState::Results {
            count: records.len(),
            summary: format!("Showing {} results.", records.len()),
            cards: records.iter().map(CharacterCard::from).collect(),
        }
    }

    /// Cards currently shown (empty for every state but `Results`).
    pub fn cards(&self) -> &[CharacterCard] {
        match self {
            DisplayState::Results { cards, .. } => cards,
            _ => &[],
        }
    }

    /// Whether the initial placeholder message is visible.
    pub fn shows_placeholder(&self) -> bool {
        matches!(self, DisplayState::Placeholder)
    }
}

/// View model for one character card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    /// Shown when `image_url` fails to load
    pub fallback_image_url: String,
    pub status: String,
    /// CSS modifier, `status-` followed by the status without whitespace
    pub status_class: String,
    pub species: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
}

impl CharacterCard {
    /// `"<status> - <species>"` badge text.
    pub fn status_line(&self) -> String {
        format!("{} - {}", self.status, self.species)
    }
}

impl From<&CharacterRecord> for CharacterCard {
    fn from(record: &CharacterRecord) -> Self {
        let image_url = if record.image.trim().is_empty() {
            PLACEHOLDER_IMAGE_URL.to_string()
        } else {
            record.image.clone()
        };

        Self {
            id: record.id,
            name: record.name.clone(),
            image_url,
            fallback_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            status: record.status.clone(),
            status_class: format!(
                "status-{}",
                record.status.split_whitespace().collect::<String>()
            ),
            species: record.species.clone(),
            gender: record.gender.clone(),
            origin: record.origin.name.clone(),
            location: record.location.name.clone(),
        }
    }
}

/// Markup for the results region.
///
/// All record text is HTML-escaped. The image falls back to the placeholder
/// through an `onerror` handler that clears itself so it fires only once.
pub fn render_html(state: &DisplayState) -> String {
    match state {
        DisplayState::Placeholder => {
            format!(r#"<p class="initial-message">{}</p>"#, PLACEHOLDER_TEXT)
        }
        DisplayState::Loading => {
            format!(r#"<div class="loading-message">{}</div>"#, LOADING_TEXT)
        }
        DisplayState::NoResults => format!(
            r#"<div class="no-results"><p class="title">{}</p><p>{}</p></div>"#,
            NO_RESULTS_TITLE, NO_RESULTS_TEXT
        ),
        DisplayState::Error { message } => format!(
            r#"<div class="error-message"><p class="title">{}</p><p>{}</p><p class="hint">{}</p></div>"#,
            ERROR_TITLE,
            escape_html(message),
            ERROR_HINT
        ),
        DisplayState::Results { summary, cards, .. } => {
            let mut html = format!(
                r#"<p class="results-summary">{}</p><div class="character-grid">"#,
                escape_html(summary)
            );
            for card in cards {
                html.push_str(&card_html(card));
            }
            html.push_str("</div>");
            html
        }
    }
}

fn card_html(card: &CharacterCard) -> String {
    format!(
        concat!(
            r#"<div class="character-card">"#,
            r#"<img src="{image}" alt="{name}" onerror="this.onerror=null; this.src='{fallback}';">"#,
            r#"<div class="card-content">"#,
            r#"<h3>{name}</h3>"#,
            r#"<div class="status-badge"><span class="status-indicator {status_class}"></span><span>{status_line}</span></div>"#,
            r#"<p><strong>Gender:</strong> {gender}</p>"#,
            r#"<p><strong>Origin:</strong> {origin}</p>"#,
            r#"<p><strong>Last known location:</strong> {location}</p>"#,
            r#"</div></div>"#,
        ),
        image = escape_html(&card.image_url),
        name = escape_html(&card.name),
        fallback = escape_html(&card.fallback_image_url),
        status_class = escape_html(&card.status_class),
        status_line = escape_html(&card.status_line()),
        gender = escape_html(&card.gender),
        origin = escape_html(&card.origin),
        location = escape_html(&card.location),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

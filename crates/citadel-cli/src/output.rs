//! Output formatting for search reports.
//!
//! Supports human-readable terminal output, JSON for scripting and the HTML
//! markup the browser client would place in its results region.

use citadel_core::{render, render_html, CharacterCard, DisplayState};
use serde::Serialize;

use crate::search::SearchReport;

/// Selected output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
    Html,
}

/// JSON output structure for a search report
#[derive(Serialize)]
pub struct JsonOutput {
    pub query: String,
    /// `results`, `no_results` or `error`
    pub status: &'static str,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub characters: Vec<JsonCharacter>,
}

/// One character in JSON format
#[derive(Serialize)]
pub struct JsonCharacter {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub image: String,
}

impl From<&CharacterCard> for JsonCharacter {
    fn from(card: &CharacterCard) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            status: card.status.clone(),
            species: card.species.clone(),
            gender: card.gender.clone(),
            origin: card.origin.clone(),
            location: card.location.clone(),
            image: card.image_url.clone(),
        }
    }
}

/// Formats a report in the given format.
pub fn format(format: Format, report: &SearchReport) -> String {
    match format {
        Format::Human => format_human(report),
        Format::Json => format_json(report),
        Format::Html => render_html(&report.display),
    }
}

/// Formats a report as JSON.
pub fn format_json(report: &SearchReport) -> String {
    let (status, error) = match &report.display {
        DisplayState::Results { .. } => ("results", None),
        DisplayState::Error { message } => ("error", Some(message.clone())),
        _ => ("no_results", None),
    };
    let cards = report.display.cards();

    let output = JsonOutput {
        query: report.query.clone(),
        status,
        count: cards.len(),
        error,
        characters: cards.iter().map(JsonCharacter::from).collect(),
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a report for human-readable terminal output.
pub fn format_human(report: &SearchReport) -> String {
    let cards = match &report.display {
        DisplayState::Results { cards, .. } => cards,
        DisplayState::Error { message } => {
            return format!("{}: {}\n{}", render::ERROR_TITLE, message, render::ERROR_HINT)
        }
        DisplayState::Loading => return render::LOADING_TEXT.to_string(),
        DisplayState::Placeholder => return render::PLACEHOLDER_TEXT.to_string(),
        DisplayState::NoResults => {
            return format!("{} for \"{}\"", render::NO_RESULTS_TITLE, report.query)
        }
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Found {} character{} for \"{}\":\n\n",
        cards.len(),
        if cards.len() == 1 { "" } else { "s" },
        report.query
    ));

    for (i, card) in cards.iter().enumerate() {
        output.push_str(&format!("{}. {} (#{})\n", i + 1, card.name, card.id));
        output.push_str(&format!("   {}\n", card.status_line()));
        output.push_str(&format!("   Gender: {}\n", card.gender));
        output.push_str(&format!("   Origin: {}\n", card.origin));
        output.push_str(&format!("   Location: {}\n", card.location));
        output.push('\n');
    }

    output.trim_end().to_string()
}

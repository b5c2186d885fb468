//! Results region components: ResultsPanel, CharacterCardView, status panels

mod character_card;
mod results_panel;
mod status_panels;

pub use character_card::CharacterCardView;
pub use results_panel::ResultsPanel;
pub use status_panels::{ErrorPanel, InitialMessage, LoadingMessage, NoResultsMessage};

use citadel_core::DisplayState;
use dioxus::prelude::*;

use super::{CharacterCardView, ErrorPanel, InitialMessage, LoadingMessage, NoResultsMessage};

/// The single results region. Draws whatever the current display state is.
#[component]
pub fn ResultsPanel(state: ReadSignal<DisplayState>) -> Element {
    let content = match state() {
        DisplayState::Placeholder => rsx! { InitialMessage {} },
        DisplayState::Loading => rsx! { LoadingMessage {} },
        DisplayState::NoResults => rsx! { NoResultsMessage {} },
        DisplayState::Error { message } => rsx! { ErrorPanel { message } },
        DisplayState::Results { summary, cards, .. } => rsx! {
            p { class: "ct-results-summary", "{summary}" }
            div { class: "ct-character-grid",
                for (idx, card) in cards.into_iter().enumerate() {
                    CharacterCardView {
                        key: "{idx}-{card.id}",
                        card,
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "ct-results", aria_live: "polite",
            {content}
        }
    }
}

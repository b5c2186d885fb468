use citadel_core::CharacterCard;
use dioxus::prelude::*;

/// Card for one character.
///
/// If the portrait fails to load the card switches to the fallback image
/// once; a failing fallback is left as is.
#[component]
pub fn CharacterCardView(card: CharacterCard) -> Element {
    let mut image_failed = use_signal(|| false);

    let image_src = if image_failed() {
        card.fallback_image_url.clone()
    } else {
        card.image_url.clone()
    };
    let status_line = card.status_line();

    rsx! {
        article { class: "ct-character-card",
            img {
                class: "ct-character-image",
                src: "{image_src}",
                alt: "{card.name}",
                onerror: move |_| {
                    if !image_failed() {
                        image_failed.set(true);
                    }
                },
            }
            div { class: "ct-card-content",
                h3 { class: "ct-card-name", "{card.name}" }
                div { class: "ct-status-badge",
                    span { class: "ct-status-indicator {card.status_class}" }
                    span { class: "ct-status-text", "{status_line}" }
                }
                p { class: "ct-card-detail",
                    strong { "Gender: " }
                    "{card.gender}"
                }
                p { class: "ct-card-detail",
                    strong { "Origin: " }
                    "{card.origin}"
                }
                p { class: "ct-card-detail",
                    strong { "Last known location: " }
                    "{card.location}"
                }
            }
        }
    }
}

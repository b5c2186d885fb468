use citadel_core::render::{
    ERROR_HINT, ERROR_TITLE, LOADING_TEXT, NO_RESULTS_TEXT, NO_RESULTS_TITLE, PLACEHOLDER_TEXT,
};
use dioxus::prelude::*;

/// Shown before the first search and after "clear"
#[component]
pub fn InitialMessage() -> Element {
    rsx! {
        div { class: "ct-initial-message",
            p { "{PLACEHOLDER_TEXT}" }
        }
    }
}

#[component]
pub fn LoadingMessage() -> Element {
    rsx! {
        div { class: "ct-loading-message",
            span { class: "ct-spinner" }
            "{LOADING_TEXT}"
        }
    }
}

#[component]
pub fn NoResultsMessage() -> Element {
    rsx! {
        div { class: "ct-no-results",
            p { class: "ct-panel-title", "{NO_RESULTS_TITLE}" }
            p { "{NO_RESULTS_TEXT}" }
        }
    }
}

/// Error message with a hint to adjust filters or retry
#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div { class: "ct-error-message", role: "alert",
            p { class: "ct-panel-title", "{ERROR_TITLE}" }
            p { "{message}" }
            p { class: "ct-error-hint", "{ERROR_HINT}" }
        }
    }
}

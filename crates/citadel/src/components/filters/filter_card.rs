use citadel_core::{FilterField, FilterSet};
use dioxus::prelude::*;

use super::FilterInput;

/// Filter form with the five inputs and the search / all / clear buttons.
///
/// Submitting the form (button or Enter in any input) triggers a filtered
/// search; the form itself never navigates.
#[component]
pub fn FilterCard(
    filters: Signal<FilterSet>,
    searching: bool,
    on_search: EventHandler<()>,
    on_search_all: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "ct-filter-card",
            h2 { class: "ct-card-title", "Search characters" }

            form {
                class: "ct-filter-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_search.call(());
                },

                div { class: "ct-filter-grid",
                    for field in FilterField::ALL {
                        FilterInput {
                            key: "{field.key()}",
                            field,
                            filters,
                        }
                    }
                }

                div { class: "ct-filter-actions",
                    button {
                        class: "ct-btn ct-btn--primary",
                        r#type: "submit",
                        if searching {
                            "Searching…"
                        } else {
                            "Search"
                        }
                    }
                    button {
                        class: "ct-btn ct-btn--secondary",
                        r#type: "button",
                        onclick: move |_| on_search_all.call(()),
                        "All characters"
                    }
                    button {
                        class: "ct-btn ct-btn--ghost",
                        r#type: "button",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

/// Footer crediting the data source
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "ct-footer",
            span { class: "ct-footer-text",
                "Data from "
                a {
                    href: "https://rickandmortyapi.com",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "The Rick and Morty API"
                }
            }
        }
    }
}

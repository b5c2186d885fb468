use dioxus::prelude::*;

/// Global app bar with logo and tagline
#[component]
pub fn AppBar() -> Element {
    rsx! {
        header { class: "ct-appbar",
            div { class: "ct-appbar-brand",
                span { class: "ct-appbar-logo", "◉" }
                h1 { class: "ct-appbar-title", "Citadel" }
            }
            span { class: "ct-appbar-tagline", "Character lookup across the multiverse" }
        }
    }
}

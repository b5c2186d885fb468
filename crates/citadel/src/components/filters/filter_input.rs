use citadel_core::{FilterField, FilterSet};
use dioxus::prelude::*;

/// One labelled filter input.
///
/// Fields with documented values (status, gender) render as a select box
/// whose first option is "any"; the rest are free text.
#[component]
pub fn FilterInput(field: FilterField, filters: Signal<FilterSet>) -> Element {
    let mut filters = filters;
    let value = filters.read().get(field).to_string();
    let input_id = format!("filter-{}", field.key());
    let options = field.options();

    rsx! {
        div { class: "ct-filter-field",
            label { class: "ct-filter-label", r#for: "{input_id}", "{field.label()}" }

            if options.is_empty() {
                input {
                    id: "{input_id}",
                    class: "ct-input",
                    r#type: "text",
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| filters.write().set(field, evt.value()),
                }
            } else {
                select {
                    id: "{input_id}",
                    class: "ct-input ct-input--select",
                    value: "{value}",
                    onchange: move |evt| filters.write().set(field, evt.value()),
                    option { value: "", selected: value.is_empty(), "{field.placeholder()}" }
                    for opt in options.iter() {
                        option {
                            key: "{opt}",
                            value: "{opt}",
                            selected: *opt == value,
                            "{opt}"
                        }
                    }
                }
            }
        }
    }
}

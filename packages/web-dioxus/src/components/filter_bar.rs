//! Search box and filter selects

use dioxus::prelude::*;

use crate::state::ResourceQuery;

/// Search input plus category and location selects.
///
/// The search box reflects every keystroke; the list below only narrows
/// once typing pauses.
#[component]
pub fn FilterBar(query: ResourceQuery) -> Element {
    let state = query.state();
    let categories = state.category_options();
    let locations = state.location_options();
    let selected_category = state.selected_category().to_string();
    let selected_location = state.selected_location().to_string();
    let search_term = state.search_term().to_string();

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 p-4 mb-6 flex flex-col md:flex-row gap-3",

            input {
                r#type: "text",
                value: "{search_term}",
                oninput: move |e| query.set_search(e.value()),
                placeholder: "Search resources by name or description...",
                class: "flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
            }

            select {
                class: "px-3 py-2 border border-gray-300 rounded-lg bg-white",
                value: "{selected_category}",
                onchange: move |e| query.select_category(e.value()),
                for category in categories {
                    option {
                        value: "{category}",
                        selected: category == selected_category,
                        "{category}"
                    }
                }
            }

            select {
                class: "px-3 py-2 border border-gray-300 rounded-lg bg-white",
                value: "{selected_location}",
                onchange: move |e| query.select_location(e.value()),
                for location in locations {
                    option {
                        value: "{location}",
                        selected: location == selected_location,
                        "{location}"
                    }
                }
            }

            button {
                class: "px-4 py-2 text-sm text-gray-600 hover:text-gray-900 border border-gray-300 rounded-lg",
                onclick: move |_| query.reset(),
                "Clear filters"
            }
        }
    }
}

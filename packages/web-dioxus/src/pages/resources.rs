//! Resource directory page

use dioxus::prelude::*;
use resource_locator::view::{
    NO_MATCHES_DETAIL, NO_MATCHES_TITLE, NO_RESOURCES_DETAIL, NO_RESOURCES_TITLE,
};
use resource_locator::{ResourceView, ViewBody};

use crate::components::{EmptyState, ErrorBanner, FilterBar, LoadingSpinner, ResourceCard};
use crate::state::use_resource_query;

/// Directory of community support resources with filters and search
#[component]
pub fn Resources() -> Element {
    let query = use_resource_query();
    let view = query.state().view();
    let summary = view.summary();
    let ResourceView { banner, body } = view;

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-6xl mx-auto px-4 py-8",
                    h1 {
                        class: "text-3xl font-bold text-gray-900 mb-2",
                        "Find Support Resources"
                    }
                    p {
                        class: "text-gray-600",
                        "Browse services near you by category and location, or search by keyword."
                    }
                }
            }

            main {
                class: "max-w-6xl mx-auto px-4 py-6",

                FilterBar { query }

                if let Some(banner) = banner {
                    ErrorBanner { banner }
                }

                if let Some(summary) = summary {
                    p { class: "text-sm text-gray-500 mb-4", "{summary}" }
                }

                match body {
                    ViewBody::Loading => rsx! { LoadingSpinner {} },
                    ViewBody::Grid { resources, .. } => rsx! {
                        div {
                            class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                            for resource in resources {
                                ResourceCard { key: "{resource.id}", resource: resource.clone() }
                            }
                        }
                    },
                    ViewBody::NoResources => rsx! {
                        EmptyState { title: NO_RESOURCES_TITLE, detail: NO_RESOURCES_DETAIL }
                    },
                    ViewBody::NoMatches { .. } => rsx! {
                        EmptyState { title: NO_MATCHES_TITLE, detail: NO_MATCHES_DETAIL }
                    },
                }
            }
        }
    }
}

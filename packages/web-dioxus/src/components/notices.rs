//! Banner and empty-state notices

use dioxus::prelude::*;
use resource_locator::Banner;

/// Warning shown above the list when the API could not be reached
#[component]
pub fn ErrorBanner(banner: Banner) -> Element {
    let title = banner.title();
    let message = banner.message();

    rsx! {
        div {
            class: "bg-yellow-50 border border-yellow-200 text-yellow-800 p-4 rounded-lg mb-6",
            h3 { class: "font-semibold mb-1", "\u{26A0} {title}" }
            p { class: "text-sm", "{message}" }
        }
    }
}

/// Centered message for an empty result
#[component]
pub fn EmptyState(title: &'static str, detail: &'static str) -> Element {
    rsx! {
        div {
            class: "text-center py-16",
            h3 { class: "text-lg font-semibold text-gray-900 mb-2", "{title}" }
            p { class: "text-gray-500 max-w-md mx-auto", "{detail}" }
        }
    }
}

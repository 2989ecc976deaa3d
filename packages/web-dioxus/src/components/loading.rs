//! Loading indicator

use dioxus::prelude::*;
use resource_locator::view::LOADING_TEXT;

/// Centered spinner shown while a fetch is outstanding
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-16",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "{LOADING_TEXT}" }
        }
    }
}

//! Fallback for unknown paths

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center text-center px-4",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Page not found" }
            p { class: "text-gray-500 mb-6", "Nothing lives at /{path}." }
            Link {
                to: Route::Resources {},
                class: "text-blue-600 hover:text-blue-700",
                "\u{2190} Back to resources"
            }
        }
    }
}

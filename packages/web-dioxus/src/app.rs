//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Script { src: TAILWIND_CDN }
        document::Title { "Community Resource Directory" }

        Router::<Route> {}
    }
}

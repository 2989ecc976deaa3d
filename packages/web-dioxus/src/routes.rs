//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{NotFound, Resources};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Resources {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

//! Community Resource Directory - Dioxus Fullstack Web Application
//!
//! A fullstack SSR web application built with Dioxus. Resources come from
//! the REST API at `RESOURCES_API_BASE_URL`, read at build time.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! RESOURCES_API_BASE_URL=http://localhost:3000/api dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod routes;
mod state;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}

//! # Resource Locator
//!
//! The query logic behind the community resource directory: which
//! resources to fetch, how to narrow them, and what the page should show.
//!
//! ## Architecture
//!
//! ```text
//! user input ──► QueryEvent ──► ResourceQueryMachine.decide() ──► Option<QueryCommand>
//!                    ▲                    │                              │
//!                    │                    ▼                              ▼
//!                    │               QueryState ──► view::present()   driver executes
//!                    │                                                (fetch / timer)
//!                    └───────── FetchSucceeded / FetchFailed / DebounceElapsed
//! ```
//!
//! - Category and location are server-side filters: changing either
//!   refetches.
//! - Search is client-side: a substring match on name or description,
//!   applied 300ms after typing stops.
//! - Only the newest fetch may update state (last request wins).
//!
//! The machine does no IO. [`LocatorRuntime`] drives it on tokio; the web
//! front end drives it with its own task spawner.

pub mod config;
pub mod machine;
pub mod options;
pub mod search;
pub mod state;
pub mod view;

#[cfg(feature = "runtime")]
pub mod runtime;

#[cfg(test)]
mod testing;

pub use config::{LocatorConfig, DEFAULT_DEBOUNCE};
pub use machine::{QueryCommand, QueryEvent, ResourceQueryMachine};
pub use options::{FilterChoices, PREDEFINED_CATEGORIES};
pub use state::{FetchState, QueryState};
pub use view::{Banner, ResourceView, ViewBody};

#[cfg(feature = "runtime")]
pub use runtime::LocatorRuntime;

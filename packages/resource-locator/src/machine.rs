//! Resource query machine.
//!
//! The machine is pure: it interprets events and decides on commands, and
//! never performs IO itself. A driver (the tokio [`crate::runtime`] or the web
//! page) executes each command and feeds the outcome back as an event.
//!
//! # Key Properties
//!
//! - **Server-side filters**: changing category or location re-enters
//!   `Loading` and emits a `Fetch`
//! - **Client-side search**: keystrokes only schedule a debounce; the list
//!   narrows when the matching `DebounceElapsed` arrives
//! - **Last request wins**: every fetch carries a generation, and results
//!   for anything but the latest generation are dropped
//! - **One event → at most one command**
//!
//! # Example
//!
//! ```ignore
//! let mut machine = ResourceQueryMachine::new(DEFAULT_DEBOUNCE);
//!
//! let Some(QueryCommand::Fetch { generation, filters }) = machine.decide(&QueryEvent::Mounted) else {
//!     unreachable!()
//! };
//! let resources = client.fetch_resources(&filters).await?;
//! machine.decide(&QueryEvent::FetchSucceeded { generation, resources });
//! ```

use std::time::Duration;

use resources_client::{FilterOptions, Resource, ResourceFilters, ALL};
use tracing::{debug, info, warn};

use crate::state::{fallback_resources, FetchState, QueryState};

/// Facts delivered to the machine.
#[derive(Debug, Clone)]
pub enum QueryEvent {
    /// The view appeared; load the unfiltered set.
    Mounted,
    CategorySelected(String),
    LocationSelected(String),
    /// Clear search and put both filters back to `All`.
    FiltersReset,
    SearchChanged(String),
    DebounceElapsed { ticket: u64 },
    FetchSucceeded { generation: u64, resources: Vec<Resource> },
    FetchFailed { generation: u64, error: String },
    FilterOptionsLoaded(FilterOptions),
    FilterOptionsFailed(String),
}

/// IO the driver must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Request resources; report back with the same generation.
    Fetch { generation: u64, filters: ResourceFilters },
    /// Cancel any pending timer and start a new one; report back with the same ticket.
    ScheduleDebounce { ticket: u64, delay: Duration },
}

#[derive(Debug, Clone)]
pub struct ResourceQueryMachine {
    state: QueryState,
    generation: u64,
    debounce_ticket: u64,
    debounce: Duration,
}

impl ResourceQueryMachine {
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: QueryState::default(),
            generation: 0,
            debounce_ticket: 0,
            debounce,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Generation of the most recently issued fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Process an event and optionally return a command.
    pub fn decide(&mut self, event: &QueryEvent) -> Option<QueryCommand> {
        match event {
            QueryEvent::Mounted => Some(self.begin_fetch()),

            QueryEvent::CategorySelected(category) => {
                if *category == self.state.selected_category {
                    return None;
                }
                self.state.selected_category = category.clone();
                Some(self.begin_fetch())
            }

            QueryEvent::LocationSelected(location) => {
                if *location == self.state.selected_location {
                    return None;
                }
                self.state.selected_location = location.clone();
                Some(self.begin_fetch())
            }

            QueryEvent::FiltersReset => {
                // Invalidate any pending timer; the cleared term applies at once
                self.debounce_ticket += 1;
                self.state.search_term.clear();
                self.state.debounced_search_term.clear();

                let changed =
                    self.state.selected_category != ALL || self.state.selected_location != ALL;
                if !changed {
                    return None;
                }
                self.state.selected_category = ALL.to_string();
                self.state.selected_location = ALL.to_string();
                Some(self.begin_fetch())
            }

            QueryEvent::SearchChanged(term) => {
                self.state.search_term = term.clone();
                self.debounce_ticket += 1;
                Some(QueryCommand::ScheduleDebounce {
                    ticket: self.debounce_ticket,
                    delay: self.debounce,
                })
            }

            QueryEvent::DebounceElapsed { ticket } => {
                if *ticket != self.debounce_ticket {
                    debug!(ticket, latest = self.debounce_ticket, "Ignoring superseded debounce");
                    return None;
                }
                self.state.debounced_search_term = self.state.search_term.clone();
                None
            }

            QueryEvent::FetchSucceeded {
                generation,
                resources,
            } => {
                if !self.is_current(*generation) {
                    return None;
                }
                let new_locations = self.state.choices.observe(resources);
                info!(
                    generation,
                    count = resources.len(),
                    new_locations,
                    "Applied resource fetch"
                );
                self.state.fetch = FetchState::Ready(resources.clone());
                None
            }

            QueryEvent::FetchFailed { generation, error } => {
                if !self.is_current(*generation) {
                    return None;
                }
                warn!(generation, %error, "Resource fetch failed, showing fallback");
                self.state.fetch = FetchState::Failed {
                    error: error.clone(),
                    fallback: fallback_resources(),
                };
                None
            }

            QueryEvent::FilterOptionsLoaded(options) => {
                self.state.choices.seed(&options.categories, &options.locations);
                None
            }

            QueryEvent::FilterOptionsFailed(error) => {
                warn!(%error, "Filter options unavailable, keeping predefined list");
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> QueryCommand {
        self.generation += 1;
        self.state.fetch = FetchState::Loading;
        let filters = self.state.filters();
        debug!(generation = self.generation, ?filters, "Issuing resource fetch");
        QueryCommand::Fetch {
            generation: self.generation,
            filters,
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "Discarding stale fetch result");
            return false;
        }
        true
    }
}

//! Page state: the resource query machine driven by Dioxus tasks.
//!
//! Every user action becomes a [`QueryEvent`]. The machine lives in a signal,
//! so components re-render whenever it transitions. Commands it returns are
//! executed here: fetches run as spawned tasks, debounce timers as tasks that
//! get cancelled when a newer keystroke arrives.

use std::time::Duration;

use dioxus::prelude::*;
use resource_locator::{
    LocatorConfig, QueryCommand, QueryEvent, QueryState, ResourceQueryMachine,
};
use resources_client::{ResourcesClient, BASE_URL_ENV};

/// Base URL used when none was provided at build time.
const DEFAULT_API_BASE_URL: &str = "/api";

/// Configuration baked in at build time; the browser has no process env.
pub fn build_config() -> LocatorConfig {
    let config = LocatorConfig::from_lookup(|key| {
        match key {
            BASE_URL_ENV => {
                Some(option_env!("RESOURCES_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
            }
            "RESOURCES_SEARCH_DEBOUNCE_MS" => option_env!("RESOURCES_SEARCH_DEBOUNCE_MS"),
            "RESOURCES_LOAD_FILTER_OPTIONS" => option_env!("RESOURCES_LOAD_FILTER_OPTIONS"),
            _ => None,
        }
        .map(str::to_string)
    });

    match config {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid build-time configuration, using defaults");
            LocatorConfig::new(DEFAULT_API_BASE_URL)
        }
    }
}

/// Resolve a relative base URL against the page origin.
fn absolute_base_url(base_url: &str) -> String {
    if base_url.starts_with("http://") || base_url.starts_with("https://") {
        return base_url.to_string();
    }

    #[cfg(feature = "web")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return format!("{}{}", origin, base_url);
        }
    }

    format!("http://localhost:8080{}", base_url)
}

async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(delay).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(delay).await;
    }
}

/// Handle to the page's query machine. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct ResourceQuery {
    machine: Signal<ResourceQueryMachine>,
    debounce_timer: Signal<Option<Task>>,
    client: Signal<ResourcesClient>,
    load_filter_options: bool,
}

impl ResourceQuery {
    /// Current state; subscribes the calling component.
    pub fn state(&self) -> QueryState {
        self.machine.read().state().clone()
    }

    pub fn select_category(&self, category: String) {
        self.dispatch(QueryEvent::CategorySelected(category));
    }

    pub fn select_location(&self, location: String) {
        self.dispatch(QueryEvent::LocationSelected(location));
    }

    pub fn set_search(&self, term: String) {
        self.dispatch(QueryEvent::SearchChanged(term));
    }

    pub fn reset(&self) {
        self.dispatch(QueryEvent::FiltersReset);
    }

    fn mount(&self) {
        if self.load_filter_options {
            let client = self.client.peek().clone();
            let this = *self;
            spawn(async move {
                let event = match client.fetch_filter_options().await {
                    Ok(options) => QueryEvent::FilterOptionsLoaded(options),
                    Err(e) => QueryEvent::FilterOptionsFailed(e.to_string()),
                };
                this.dispatch(event);
            });
        }
        self.dispatch(QueryEvent::Mounted);
    }

    fn dispatch(&self, event: QueryEvent) {
        let mut machine = self.machine;
        let command = machine.write().decide(&event);
        if let Some(command) = command {
            self.execute(command);
        }
    }

    fn execute(&self, command: QueryCommand) {
        let this = *self;
        match command {
            QueryCommand::Fetch { generation, filters } => {
                let client = self.client.peek().clone();
                spawn(async move {
                    let event = match client.fetch_resources(&filters).await {
                        Ok(resources) => QueryEvent::FetchSucceeded {
                            generation,
                            resources,
                        },
                        Err(e) => {
                            tracing::warn!(generation, error = %e, "Error fetching resources");
                            QueryEvent::FetchFailed {
                                generation,
                                error: e.to_string(),
                            }
                        }
                    };
                    this.dispatch(event);
                });
            }
            QueryCommand::ScheduleDebounce { ticket, delay } => {
                let timer = spawn(async move {
                    sleep(delay).await;
                    this.dispatch(QueryEvent::DebounceElapsed { ticket });
                });

                let mut slot = self.debounce_timer;
                if let Some(previous) = slot.write().replace(timer) {
                    previous.cancel();
                };
            }
        }
    }
}

/// Create the page's query machine and load the unfiltered set on mount.
pub fn use_resource_query() -> ResourceQuery {
    let config = use_hook(build_config);
    let machine = use_signal(|| ResourceQueryMachine::new(config.search_debounce));
    let debounce_timer = use_signal(|| None::<Task>);
    let client = use_signal(|| ResourcesClient::new(absolute_base_url(&config.api_base_url)));

    let query = ResourceQuery {
        machine,
        debounce_timer,
        client,
        load_filter_options: config.load_filter_options,
    };

    // Effects only run in the browser, so SSR renders the loading state
    use_effect(move || query.mount());

    query
}

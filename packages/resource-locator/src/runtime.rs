//! Tokio driver for the resource query machine.
//!
//! The runtime:
//! 1. Feeds user input and IO outcomes to the machine as events
//! 2. Executes the command the machine decides on (fetch or debounce timer)
//! 3. Publishes a [`QueryState`] snapshot after every transition
//!
//! Fetches are fire-and-forget: an in-flight request is never cancelled, its
//! result is simply discarded by the machine if a newer fetch was issued.
//! Debounce timers are aborted when superseded, and a timer for an older
//! ticket never displaces one for a newer ticket.
//!
//! # Example
//!
//! ```ignore
//! let config = LocatorConfig::from_env()?;
//! let api = Arc::new(ResourcesClient::new(&config.api_base_url));
//! let runtime = LocatorRuntime::new(api, &config);
//!
//! let mut snapshots = runtime.subscribe();
//! runtime.mount();
//! runtime.select_category("housing");
//! runtime.set_search("rent");
//!
//! let state = runtime.settled().await;
//! println!("{:?}", state.view());
//! ```

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use resources_client::ResourceApi;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::LocatorConfig;
use crate::machine::{QueryCommand, QueryEvent, ResourceQueryMachine};
use crate::state::QueryState;

pub struct LocatorRuntime<A: ResourceApi + 'static> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    api: Arc<A>,
    machine: Mutex<ResourceQueryMachine>,
    /// Pending timer and the ticket it reports
    debounce_timer: Mutex<Option<(u64, JoinHandle<()>)>>,
    snapshots: watch::Sender<QueryState>,
    load_filter_options: bool,
}

impl<A: ResourceApi + 'static> LocatorRuntime<A> {
    pub fn new(api: Arc<A>, config: &LocatorConfig) -> Self {
        let machine = ResourceQueryMachine::new(config.search_debounce);
        let (snapshots, _) = watch::channel(machine.state().clone());

        Self {
            inner: Arc::new(Inner {
                api,
                machine: Mutex::new(machine),
                debounce_timer: Mutex::new(None),
                snapshots,
                load_filter_options: config.load_filter_options,
            }),
        }
    }

    /// Start the view: fetch the unfiltered set and, if configured, the
    /// backend's filter options.
    pub fn mount(&self) {
        if self.inner.load_filter_options {
            let inner = self.inner.clone();
            tokio::spawn(async move {
                let event = match inner.api.fetch_filter_options().await {
                    Ok(options) => QueryEvent::FilterOptionsLoaded(options),
                    Err(e) => QueryEvent::FilterOptionsFailed(e.to_string()),
                };
                Inner::emit(&inner, event);
            });
        }
        Inner::emit(&self.inner, QueryEvent::Mounted);
    }

    pub fn select_category(&self, category: impl Into<String>) {
        Inner::emit(&self.inner, QueryEvent::CategorySelected(category.into()));
    }

    pub fn select_location(&self, location: impl Into<String>) {
        Inner::emit(&self.inner, QueryEvent::LocationSelected(location.into()));
    }

    pub fn set_search(&self, term: impl Into<String>) {
        Inner::emit(&self.inner, QueryEvent::SearchChanged(term.into()));
    }

    pub fn reset_filters(&self) {
        Inner::emit(&self.inner, QueryEvent::FiltersReset);
    }

    /// Current state.
    pub fn snapshot(&self) -> QueryState {
        self.inner.snapshots.borrow().clone()
    }

    /// Receive a snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.inner.snapshots.subscribe()
    }

    /// Wait until no fetch is outstanding and the search term has settled.
    pub async fn settled(&self) -> QueryState {
        let mut rx = self.subscribe();
        let settled = rx
            .wait_for(|s| !s.is_loading() && s.search_term() == s.debounced_search_term())
            .await
            .map(|s| s.clone());
        // The sender lives in `self`, so the channel cannot close here
        settled.unwrap_or_else(|_| self.snapshot())
    }
}

impl<A: ResourceApi + 'static> Inner<A> {
    fn machine(&self) -> MutexGuard<'_, ResourceQueryMachine> {
        self.machine.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit(this: &Arc<Self>, event: QueryEvent) {
        let command = {
            let mut machine = this.machine();
            let command = machine.decide(&event);
            this.snapshots.send_replace(machine.state().clone());
            command
        };

        if let Some(command) = command {
            Self::execute(this, command);
        }
    }

    fn execute(this: &Arc<Self>, command: QueryCommand) {
        match command {
            QueryCommand::Fetch { generation, filters } => {
                let inner = this.clone();
                tokio::spawn(async move {
                    let event = match inner.api.fetch_resources(&filters).await {
                        Ok(resources) => QueryEvent::FetchSucceeded {
                            generation,
                            resources,
                        },
                        Err(e) => {
                            warn!(generation, error = %e, "Error fetching resources");
                            QueryEvent::FetchFailed {
                                generation,
                                error: e.to_string(),
                            }
                        }
                    };
                    Inner::emit(&inner, event);
                });
            }
            QueryCommand::ScheduleDebounce { ticket, delay } => {
                Self::schedule_debounce(this, ticket, delay);
            }
        }
    }

    fn schedule_debounce(this: &Arc<Self>, ticket: u64, delay: Duration) {
        let inner = this.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            Inner::emit(&inner, QueryEvent::DebounceElapsed { ticket });
        });

        let mut slot = this
            .debounce_timer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let newer = slot
            .as_ref()
            .map(|(pending, _)| *pending)
            .filter(|pending| *pending > ticket);
        if let Some(pending) = newer {
            // A concurrent caller already stored a newer timer
            debug!(ticket, pending, "Dropping superseded debounce timer");
            timer.abort();
            return;
        }

        if let Some((_, previous)) = slot.replace((ticket, timer)) {
            debug!(ticket, "Cancelling pending debounce timer");
            previous.abort();
        }
    }
}

//! Test fixtures and a scripted in-memory backend.

use resources_client::{Resource, ResourceId};

pub(crate) fn resource(id: i64, name: &str, description: &str) -> Resource {
    Resource {
        id: ResourceId::Number(id),
        name: name.to_string(),
        description: description.to_string(),
        category: "mental-health".to_string(),
        location: "National".to_string(),
        phone: "555-0100".to_string(),
        website: None,
        available_24h: false,
    }
}

/// One resource per location, ids counting up from 1.
pub(crate) fn resources_at(locations: &[&str]) -> Vec<Resource> {
    locations
        .iter()
        .enumerate()
        .map(|(i, location)| Resource {
            location: location.to_string(),
            ..resource(i as i64 + 1, &format!("Resource in {}", location), "")
        })
        .collect()
}

#[cfg(feature = "runtime")]
pub(crate) use scripted::ScriptedApi;

#[cfg(feature = "runtime")]
mod scripted {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use resources_client::{FilterOptions, Resource, ResourceApi, ResourceFilters, Result};
    use tokio::sync::oneshot;

    type Reply = Result<Vec<Resource>>;

    /// Backend whose responses are released by the test, in call order.
    ///
    /// Calls beyond the scripted replies answer with an empty list.
    #[derive(Default)]
    pub(crate) struct ScriptedApi {
        replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
        calls: Mutex<Vec<ResourceFilters>>,
        filter_options: Mutex<Option<Result<FilterOptions>>>,
    }

    impl ScriptedApi {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Script the next call; it completes when the returned sender fires.
        pub(crate) fn defer(&self) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.replies.lock().unwrap().push_back(rx);
            tx
        }

        /// Script the next call to complete immediately.
        pub(crate) fn reply(&self, reply: Reply) {
            let _ = self.defer().send(reply);
        }

        pub(crate) fn set_filter_options(&self, options: Result<FilterOptions>) {
            *self.filter_options.lock().unwrap() = Some(options);
        }

        pub(crate) fn calls(&self) -> Vec<ResourceFilters> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResourceApi for ScriptedApi {
        async fn fetch_resources(&self, filters: &ResourceFilters) -> Result<Vec<Resource>> {
            self.calls.lock().unwrap().push(filters.clone());
            let pending = self.replies.lock().unwrap().pop_front();
            match pending {
                Some(rx) => rx.await.unwrap_or_else(|_| Ok(Vec::new())),
                None => Ok(Vec::new()),
            }
        }

        async fn fetch_filter_options(&self) -> Result<FilterOptions> {
            self.filter_options
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(FilterOptions::default()))
        }
    }
}

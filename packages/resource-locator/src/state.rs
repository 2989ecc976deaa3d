//! Query and fetch state owned by the resource query machine

use resources_client::{Resource, ResourceFilters, ALL};

use crate::options::FilterChoices;
use crate::search;
use crate::view::{self, ResourceView};

/// Shown when a fetch fails. Intentionally empty: no sample data is served.
pub fn fallback_resources() -> Vec<Resource> {
    Vec::new()
}

/// Outcome of the most recent fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Ready(Vec<Resource>),
    Failed { error: String, fallback: Vec<Resource> },
}

/// Everything a front end needs to render the resource directory.
///
/// Cheap to clone; drivers publish a copy after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub(crate) selected_category: String,
    pub(crate) selected_location: String,
    pub(crate) search_term: String,
    pub(crate) debounced_search_term: String,
    pub(crate) fetch: FetchState,
    pub(crate) choices: FilterChoices,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            selected_category: ALL.to_string(),
            selected_location: ALL.to_string(),
            search_term: String::new(),
            debounced_search_term: String::new(),
            fetch: FetchState::Loading,
            choices: FilterChoices::new(),
        }
    }
}

impl QueryState {
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn selected_location(&self) -> &str {
        &self.selected_location
    }

    /// Raw search input, echoed back to the text box.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Search term actually applied to the list.
    pub fn debounced_search_term(&self) -> &str {
        &self.debounced_search_term
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.fetch {
            FetchState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Fetched set, or the fallback after a failure. Empty while loading.
    pub fn resources(&self) -> &[Resource] {
        match &self.fetch {
            FetchState::Loading => &[],
            FetchState::Ready(resources) => resources,
            FetchState::Failed { fallback, .. } => fallback,
        }
    }

    /// Resources narrowed by the debounced search term.
    pub fn filtered_resources(&self) -> Vec<&Resource> {
        search::filter(self.resources(), &self.debounced_search_term)
    }

    /// Filters the current selection sends to the backend.
    pub fn filters(&self) -> ResourceFilters {
        ResourceFilters::from_selection(&self.selected_category, &self.selected_location)
    }

    pub fn category_options(&self) -> Vec<String> {
        self.choices.category_options()
    }

    pub fn location_options(&self) -> Vec<String> {
        self.choices.location_options()
    }

    pub fn view(&self) -> ResourceView {
        view::present(self)
    }
}

//! Presentation derived from query state.
//!
//! A pure function of [`QueryState`]; front ends render whatever this
//! returns and make no decisions of their own.

use resources_client::Resource;

use crate::state::QueryState;

pub const LOADING_TEXT: &str = "Loading resources...";
pub const BANNER_TITLE: &str = "API Connection Issue";
pub const NO_RESOURCES_TITLE: &str = "Currently there are no resources";
pub const NO_RESOURCES_DETAIL: &str = "We're working to add more resources to help you. Please check back later or contact us if you need immediate assistance.";
pub const NO_MATCHES_TITLE: &str = "No resources found";
pub const NO_MATCHES_DETAIL: &str = "Try adjusting your search criteria or filters.";

/// Non-fatal warning shown above the list after a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub error: String,
}

impl Banner {
    pub fn title(&self) -> &'static str {
        BANNER_TITLE
    }

    pub fn message(&self) -> String {
        format!("Unable to fetch resources from API: {}", self.error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Loading,
    /// Cards to render, plus the size of the set they were filtered from
    Grid { resources: Vec<Resource>, total: usize },
    /// The backend holds nothing for this selection
    NoResources,
    /// Resources exist but the search term excludes all of them
    NoMatches { total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceView {
    pub banner: Option<Banner>,
    pub body: ViewBody,
}

impl ResourceView {
    /// "Showing X of Y resources", absent while loading.
    pub fn summary(&self) -> Option<String> {
        match &self.body {
            ViewBody::Loading => None,
            ViewBody::Grid { resources, total } => {
                Some(format!("Showing {} of {} resources", resources.len(), total))
            }
            ViewBody::NoResources => Some("Showing 0 of 0 resources".to_string()),
            ViewBody::NoMatches { total } => Some(format!("Showing 0 of {} resources", total)),
        }
    }
}

pub fn present(state: &QueryState) -> ResourceView {
    if state.is_loading() {
        return ResourceView {
            banner: None,
            body: ViewBody::Loading,
        };
    }

    let resources = state.resources();
    let filtered: Vec<Resource> = state.filtered_resources().into_iter().cloned().collect();

    if let Some(error) = state.error() {
        // The fallback set is rendered beneath the banner as-is
        return ResourceView {
            banner: Some(Banner {
                error: error.to_string(),
            }),
            body: ViewBody::Grid {
                resources: filtered,
                total: resources.len(),
            },
        };
    }

    let body = if resources.is_empty() {
        ViewBody::NoResources
    } else if filtered.is_empty() {
        ViewBody::NoMatches {
            total: resources.len(),
        }
    } else {
        ViewBody::Grid {
            resources: filtered,
            total: resources.len(),
        }
    };

    ResourceView { banner: None, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DEBOUNCE;
    use crate::machine::{QueryCommand, QueryEvent, ResourceQueryMachine};
    use crate::testing::resource;

    /// Mount and apply `outcome` to the initial fetch.
    fn mounted_with(outcome: Result<Vec<Resource>, &str>) -> ResourceQueryMachine {
        let mut machine = ResourceQueryMachine::new(DEFAULT_DEBOUNCE);
        let Some(QueryCommand::Fetch { generation, .. }) = machine.decide(&QueryEvent::Mounted)
        else {
            panic!("mount must fetch");
        };
        let event = match outcome {
            Ok(resources) => QueryEvent::FetchSucceeded {
                generation,
                resources,
            },
            Err(error) => QueryEvent::FetchFailed {
                generation,
                error: error.to_string(),
            },
        };
        machine.decide(&event);
        machine
    }

    fn search(machine: &mut ResourceQueryMachine, term: &str) {
        let Some(QueryCommand::ScheduleDebounce { ticket, .. }) =
            machine.decide(&QueryEvent::SearchChanged(term.into()))
        else {
            panic!("search must schedule a debounce");
        };
        machine.decide(&QueryEvent::DebounceElapsed { ticket });
    }

    #[test]
    fn test_loading_suppresses_everything() {
        let mut machine = mounted_with(Err("HTTP error! status: 500"));
        machine.decide(&QueryEvent::CategorySelected("housing".into()));

        let view = present(machine.state());
        assert_eq!(view.banner, None);
        assert_eq!(view.body, ViewBody::Loading);
        assert_eq!(view.summary(), None);
    }

    #[test]
    fn test_empty_response_is_no_resources() {
        let machine = mounted_with(Ok(Vec::new()));
        let view = present(machine.state());

        assert_eq!(view.banner, None);
        assert_eq!(view.body, ViewBody::NoResources);
    }

    #[test]
    fn test_everything_filtered_out_is_no_matches() {
        let mut machine = mounted_with(Ok(vec![
            resource(1, "Mental Health Resource", "Mental health support"),
            resource(2, "Housing Resource", "Housing assistance"),
        ]));
        search(&mut machine, "veterans");

        let view = present(machine.state());
        assert_eq!(view.body, ViewBody::NoMatches { total: 2 });
        assert_eq!(view.summary().as_deref(), Some("Showing 0 of 2 resources"));
    }

    #[test]
    fn test_search_narrows_grid() {
        let mut machine = mounted_with(Ok(vec![
            resource(1, "Mental Health Resource", "Mental health support"),
            resource(2, "Housing Resource", "Housing assistance"),
        ]));
        search(&mut machine, "Mental");

        let view = present(machine.state());
        match &view.body {
            ViewBody::Grid { resources, total } => {
                assert_eq!(*total, 2);
                assert_eq!(resources.len(), 1);
                assert_eq!(resources[0].name, "Mental Health Resource");
            }
            other => panic!("expected grid, got {:?}", other),
        }
        assert_eq!(view.summary().as_deref(), Some("Showing 1 of 2 resources"));
    }

    #[test]
    fn test_failure_shows_banner_over_empty_fallback() {
        let machine = mounted_with(Err("HTTP error! status: 404"));
        let view = present(machine.state());

        let banner = view.banner.clone().expect("banner");
        assert_eq!(banner.title(), "API Connection Issue");
        assert_eq!(
            banner.message(),
            "Unable to fetch resources from API: HTTP error! status: 404"
        );
        // Not the "no resources exist" state: the fallback grid sits under the banner
        assert_eq!(
            view.body,
            ViewBody::Grid {
                resources: Vec::new(),
                total: 0
            }
        );
    }
}

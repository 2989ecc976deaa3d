//! Dropdown options for the category and location filters

use indexmap::IndexSet;
use resources_client::{Resource, ALL};

/// Categories offered when the backend does not seed its own list.
pub const PREDEFINED_CATEGORIES: &[&str] = &[
    "domestic-violence",
    "mental-health",
    "legal-aid",
    "housing",
];

/// Filter dropdown state.
///
/// Locations accumulate across every response and are never removed, so a
/// narrowed fetch cannot shrink the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChoices {
    categories: Vec<String>,
    locations_seen: IndexSet<String>,
}

impl Default for FilterChoices {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterChoices {
    pub fn new() -> Self {
        Self {
            categories: PREDEFINED_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            locations_seen: IndexSet::new(),
        }
    }

    /// Record every distinct location in a fetched set. Returns how many were new.
    pub fn observe(&mut self, resources: &[Resource]) -> usize {
        self.add_locations(resources.iter().map(|r| r.location.as_str()))
    }

    /// Merge backend-provided seeds. Non-empty categories replace the predefined list.
    pub fn seed(&mut self, categories: &[String], locations: &[String]) {
        let categories: Vec<String> = categories
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty() && *c != ALL)
            .map(str::to_string)
            .collect();
        if !categories.is_empty() {
            self.categories = categories;
        }
        self.add_locations(locations.iter().map(String::as_str));
    }

    fn add_locations<'a>(&mut self, locations: impl Iterator<Item = &'a str>) -> usize {
        let before = self.locations_seen.len();
        for location in locations {
            let location = location.trim();
            if !location.is_empty() && location != ALL {
                self.locations_seen.insert(location.to_string());
            }
        }
        self.locations_seen.len() - before
    }

    /// `All` followed by the category list.
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    /// `All` followed by every location seen, in first-seen order.
    pub fn location_options(&self) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(self.locations_seen.iter().cloned())
            .collect()
    }
}

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ResourcesError, Result};

/// Selection value meaning "no filter".
pub const ALL: &str = "All";

/// Stable identifier of a resource. The backend sends either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{}", n),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

/// A single listed support service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub phone: String,
    pub website: Option<String>,
    #[serde(rename = "available24h")]
    pub available_24h: bool,
}

impl Resource {
    pub fn availability_label(&self) -> &'static str {
        if self.available_24h {
            "Available 24/7"
        } else {
            "Business hours"
        }
    }
}

/// Wire shape of a resource before validation. Every field is optional so a
/// single malformed entry never fails the whole response.
#[derive(Debug, Deserialize)]
struct RawResource {
    id: Option<Value>,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    location: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    #[serde(rename = "available24h")]
    available_24h: Option<bool>,
}

impl TryFrom<RawResource> for Resource {
    type Error = String;

    fn try_from(raw: RawResource) -> std::result::Result<Self, Self::Error> {
        let id = match raw.id {
            Some(Value::Number(n)) => n
                .as_i64()
                .map(ResourceId::Number)
                .ok_or_else(|| format!("non-integer id {}", n))?,
            Some(Value::String(s)) if !s.trim().is_empty() => ResourceId::Text(s),
            Some(other) => return Err(format!("unusable id {}", other)),
            None => return Err("missing id".to_string()),
        };

        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| format!("resource {} has no name", id))?;

        Ok(Self {
            id,
            name,
            description: raw.description.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            location: raw.location.unwrap_or_default(),
            phone: raw.phone.unwrap_or_default(),
            website: raw.website.filter(|w| !w.trim().is_empty()),
            available_24h: raw.available_24h.unwrap_or(false),
        })
    }
}

/// Server-side narrowing criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilters {
    pub category: Option<String>,
    pub location: Option<String>,
}

impl ResourceFilters {
    /// Build filters from dropdown selections; `"All"` means unfiltered.
    pub fn from_selection(category: &str, location: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            location: Some(location.to_string()),
        }
    }

    /// Query parameters actually sent. Absent, blank and `"All"` values are dropped.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(category) = active(&self.category) {
            pairs.push(("category", category));
        }
        if let Some(location) = active(&self.location) {
            pairs.push(("location", location));
        }
        pairs
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL)
}

/// Dropdown seeds served by `GET /resources/filters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Strip the `{ success: true, data }` envelope.
///
/// A body that is not an envelope is returned untouched. An envelope that
/// reports `success: false` (or carries no data) is an error.
fn unwrap_envelope(body: Value) -> Result<Value> {
    let Value::Object(mut map) = body else {
        return Ok(body);
    };

    match map.get("success") {
        Some(Value::Bool(true)) => match map.remove("data") {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(ResourcesError::UnexpectedShape(
                "envelope reported success without data".into(),
            )),
        },
        Some(_) => {
            let reason = map
                .get("message")
                .or_else(|| map.get("error"))
                .and_then(Value::as_str)
                .unwrap_or("backend reported failure");
            Err(ResourcesError::UnexpectedShape(reason.to_string()))
        }
        None => Ok(Value::Object(map)),
    }
}

/// Decode a `/resources` response body into validated resources.
pub(crate) fn decode_resources(body: Value) -> Result<Vec<Resource>> {
    let Value::Array(items) = unwrap_envelope(body)? else {
        return Err(ResourcesError::UnexpectedShape(
            "expected an array of resources".into(),
        ));
    };

    let mut seen = HashSet::new();
    let mut resources = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let resource = match serde_json::from_value::<RawResource>(item)
            .map_err(|e| e.to_string())
            .and_then(Resource::try_from)
        {
            Ok(resource) => resource,
            Err(reason) => {
                tracing::warn!(index, %reason, "Rejected malformed resource");
                continue;
            }
        };

        if !seen.insert(resource.id.clone()) {
            tracing::warn!(id = %resource.id, "Dropped resource with duplicate id");
            continue;
        }
        resources.push(resource);
    }

    Ok(resources)
}

/// Decode a `/resources/filters` response body.
pub(crate) fn decode_filter_options(body: Value) -> Result<FilterOptions> {
    let payload = unwrap_envelope(body)?;
    if !payload.is_object() {
        return Err(ResourcesError::UnexpectedShape(
            "expected an object with categories and locations".into(),
        ));
    }
    Ok(serde_json::from_value(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_is_unwrapped() {
        let body = json!({
            "success": true,
            "data": [{
                "id": 1,
                "name": "Crisis Line",
                "description": "Call any time",
                "category": "mental-health",
                "location": "National",
                "phone": "988",
                "website": "https://988lifeline.org",
                "available24h": true
            }]
        });

        let resources = decode_resources(body).unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].id, ResourceId::Number(1));
        assert!(resources[0].available_24h);
        assert_eq!(resources[0].availability_label(), "Available 24/7");
    }

    #[test]
    fn test_bare_array_is_accepted() {
        let body = json!([{ "id": "abc", "name": "Shelter" }]);
        let resources = decode_resources(body).unwrap();
        assert_eq!(resources[0].id, ResourceId::Text("abc".into()));
        assert_eq!(resources[0].description, "");
        assert_eq!(resources[0].website, None);
        assert!(!resources[0].available_24h);
    }

    #[test]
    fn test_empty_data_is_empty_list() {
        let resources = decode_resources(json!({ "success": true, "data": [] })).unwrap();
        assert!(resources.is_empty());
    }

    #[test]
    fn test_other_shapes_are_rejected() {
        let err = decode_resources(json!({ "items": [] })).unwrap_err();
        assert!(matches!(err, ResourcesError::UnexpectedShape(_)));

        let err = decode_resources(json!({ "success": false, "message": "db down" })).unwrap_err();
        assert!(matches!(err, ResourcesError::UnexpectedShape(ref m) if m == "db down"));

        let err = decode_resources(json!("nope")).unwrap_err();
        assert!(matches!(err, ResourcesError::UnexpectedShape(_)));
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let body = json!([
            { "id": 1, "name": "Legal Aid" },
            { "name": "No id" },
            { "id": 2 },
            { "id": 3, "name": "   " },
            { "id": 4.5, "name": "Fractional" },
            "not an object",
            { "id": 5, "name": "Housing Help", "website": "" }
        ]);

        let resources = decode_resources(body).unwrap();
        let names: Vec<_> = resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Legal Aid", "Housing Help"]);
        assert_eq!(resources[1].website, None);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let body = json!([
            { "id": 7, "name": "First" },
            { "id": 7, "name": "Second" },
            { "id": "7", "name": "Text id is distinct" }
        ]);

        let resources = decode_resources(body).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name, "First");
    }

    #[test]
    fn test_filters_skip_all_and_blank() {
        let filters = ResourceFilters::from_selection(ALL, "New York");
        assert_eq!(filters.query_pairs(), vec![("location", "New York")]);

        let filters = ResourceFilters {
            category: Some("housing".into()),
            location: Some("  ".into()),
        };
        assert_eq!(filters.query_pairs(), vec![("category", "housing")]);

        assert!(ResourceFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn test_filter_options_decoding() {
        let options = decode_filter_options(json!({
            "success": true,
            "data": { "categories": ["housing"], "locations": ["Duluth"] }
        }))
        .unwrap();
        assert_eq!(options.categories, vec!["housing"]);
        assert_eq!(options.locations, vec!["Duluth"]);

        let options = decode_filter_options(json!({ "locations": ["National"] })).unwrap();
        assert!(options.categories.is_empty());

        assert!(decode_filter_options(json!([])).is_err());
    }
}

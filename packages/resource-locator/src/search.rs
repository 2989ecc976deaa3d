//! Client-side keyword search over a fetched resource set

use resources_client::Resource;

/// Case-insensitive substring match against name or description.
///
/// An empty term matches everything.
pub fn matches(resource: &Resource, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    resource.name.to_lowercase().contains(&needle)
        || resource.description.to_lowercase().contains(&needle)
}

/// Narrow `resources` to those matching `term`, preserving order.
///
/// Category and location are not re-checked here; the fetch already scoped
/// the set.
pub fn filter<'a>(resources: &'a [Resource], term: &str) -> Vec<&'a Resource> {
    resources.iter().filter(|r| matches(r, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use resources_client::ResourceId;

    fn make_resource(id: i64, name: &str, description: &str) -> Resource {
        Resource {
            id: ResourceId::Number(id),
            name: name.to_string(),
            description: description.to_string(),
            category: "housing".to_string(),
            location: "Minneapolis".to_string(),
            phone: "555-0100".to_string(),
            website: None,
            available_24h: false,
        }
    }

    #[test]
    fn test_empty_term_matches_all() {
        let items = vec![
            make_resource(1, "Alpha", "first"),
            make_resource(2, "Beta", "second"),
        ];

        assert_eq!(filter(&items, "").len(), 2);
    }

    #[test]
    fn test_name_or_description_case_insensitive() {
        let items = vec![
            make_resource(1, "Mental Health Resource", "Mental health support"),
            make_resource(2, "Housing Resource", "Housing assistance"),
            make_resource(3, "Tenant Union", "Eviction defense and HOUSING rights"),
        ];

        let results = filter(&items, "mental");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Mental Health Resource");

        let results = filter(&items, "housing");
        let ids: Vec<_> = results.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![ResourceId::Number(2), ResourceId::Number(3)]);

        assert!(filter(&items, "xyz123").is_empty());
    }

    #[test]
    fn test_category_and_location_are_not_searched() {
        let items = vec![make_resource(1, "Alpha", "first")];

        assert!(filter(&items, "minneapolis").is_empty());
        assert!(filter(&items, "housing").is_empty());
    }

    #[test]
    fn test_matches_definition_over_many_terms() {
        let items = vec![
            make_resource(1, "Legal Aid Society", "Free legal assistance"),
            make_resource(2, "Crisis Text Line", "Text HOME to 741741"),
            make_resource(3, "Food Shelf", ""),
        ];

        for term in ["", "a", "LEGAL", "text", "home", "shelf", "zzz", "aid soc"] {
            let expected: Vec<_> = items
                .iter()
                .filter(|r| {
                    term.is_empty()
                        || r.name.to_lowercase().contains(&term.to_lowercase())
                        || r.description.to_lowercase().contains(&term.to_lowercase())
                })
                .collect();
            assert_eq!(filter(&items, term), expected, "term {:?}", term);
        }
    }
}

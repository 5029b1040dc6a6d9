use serde::Serialize;

use crate::notion::model::DatabaseSchema;

pub const PAGE_SIZE: u32 = 100;

pub const HIDE_PROPERTY: &str = "Hide";
pub const PINNED_PROPERTY: &str = "Pinned";
pub const PUBLISH_DATE_PROPERTY: &str = "Publish Date";

/// Body sent to `POST /databases/{id}/query`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DatabaseQuery {
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<QueryFilter>,
    pub sorts: Vec<QuerySort>,
}

impl DatabaseQuery {
    /// True when the query asks Notion to leave hidden rows out.
    pub fn excludes_hidden(&self) -> bool {
        matches!(&self.filter, Some(filter) if filter.property == HIDE_PROPERTY && !filter.checkbox.equals)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QueryFilter {
    pub property: String,
    pub checkbox: CheckboxCondition,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CheckboxCondition {
    pub equals: bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum QuerySort {
    Property { property: String, direction: Direction },
    Timestamp { timestamp: String, direction: Direction },
}

/// Builds the grid query.
///
/// Without a schema every optional clause is included, which is what the
/// content database is expected to look like. With a schema, clauses that
/// name a property the database doesn't have are left out, since Notion
/// rejects the whole query otherwise.
pub fn build_query(schema: Option<&DatabaseSchema>) -> DatabaseQuery {
    let has = |name: &str| schema.map_or(true, |s| s.has_property(name));
    // The filter is a checkbox condition, any other kind of Hide would fail the query
    let hide_is_checkbox = schema.map_or(true, |s| s.has_property_of_kind(HIDE_PROPERTY, "checkbox"));

    let filter = if hide_is_checkbox {
        Some(QueryFilter {
            property: HIDE_PROPERTY.to_string(),
            checkbox: CheckboxCondition { equals: false },
        })
    } else {
        None
    };

    let mut sorts = vec![];
    for name in [PINNED_PROPERTY, PUBLISH_DATE_PROPERTY] {
        if has(name) {
            sorts.push(QuerySort::Property { property: name.to_string(), direction: Direction::Descending });
        }
    }
    sorts.push(QuerySort::Timestamp { timestamp: "created_time".to_string(), direction: Direction::Descending });

    DatabaseQuery {
        page_size: PAGE_SIZE,
        filter,
        sorts,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_query_without_schema() {
        let query = build_query(None);
        assert!(query.excludes_hidden());
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({
            "page_size": 100,
            "filter": { "property": "Hide", "checkbox": { "equals": false } },
            "sorts": [
                { "property": "Pinned", "direction": "descending" },
                { "property": "Publish Date", "direction": "descending" },
                { "timestamp": "created_time", "direction": "descending" }
            ]
        }));
    }

    #[test]
    fn test_hide_filter_needs_checkbox() {
        let schema: DatabaseSchema = serde_json::from_value(json!({
            "properties": {
                "Hide": { "type": "select", "select": { "options": [] } },
                "Pinned": { "type": "select" }
            }
        })).unwrap();
        let query = build_query(Some(&schema));
        assert!(query.filter.is_none());
        assert!(!query.excludes_hidden());
        assert_eq!(query.sorts.len(), 2);

        let schema: DatabaseSchema = serde_json::from_value(json!({
            "properties": { "Hide": { "type": "checkbox", "checkbox": {} } }
        })).unwrap();
        assert!(build_query(Some(&schema)).excludes_hidden());
    }

    #[test]
    fn test_query_with_partial_schema() {
        let schema: DatabaseSchema = serde_json::from_value(json!({
            "properties": { "Publish Date": { "type": "date" } }
        })).unwrap();
        let query = build_query(Some(&schema));
        assert!(!query.excludes_hidden());
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({
            "page_size": 100,
            "sorts": [
                { "property": "Publish Date", "direction": "descending" },
                { "timestamp": "created_time", "direction": "descending" }
            ]
        }));
    }
}

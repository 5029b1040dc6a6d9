//! Readers that pull plain values out of Notion properties.
//!
//! Every reader accepts a missing property and any property kind. When the
//! kind doesn't match what the reader understands, it returns the default
//! (empty string, `None`, `false` or an empty list) instead of failing.

use crate::notion::model::{Property, PropertyValue, RichText, Rollup};
use crate::text_utils::non_empty;

pub const RELATION_PLACEHOLDER: &str = "(relation)";

fn value(prop: Option<&Property>) -> Option<&PropertyValue> {
    prop.and_then(Property::value)
}

fn join_text(runs: &[RichText]) -> String {
    runs.iter().map(|t| t.plain_text.as_str()).collect()
}

pub fn read_title(prop: Option<&Property>) -> String {
    match value(prop) {
        Some(PropertyValue::Title { title }) => join_text(title),
        Some(PropertyValue::RichText { rich_text }) => join_text(rich_text),
        _ => String::new(),
    }
}

pub fn read_rich_text(prop: Option<&Property>) -> String {
    match value(prop) {
        Some(PropertyValue::RichText { rich_text }) => join_text(rich_text).trim().to_string(),
        Some(PropertyValue::Title { title }) => join_text(title).trim().to_string(),
        _ => String::new(),
    }
}

pub fn read_date(prop: Option<&Property>) -> Option<String> {
    match value(prop) {
        Some(PropertyValue::Date { date: Some(date) }) => date.start.as_deref().and_then(non_empty),
        _ => None,
    }
}

pub fn read_checkbox(prop: Option<&Property>) -> bool {
    matches!(value(prop), Some(PropertyValue::Checkbox { checkbox: true }))
}

/// Name of the chosen option. Status properties share the select shape.
pub fn read_select(prop: Option<&Property>) -> Option<String> {
    match value(prop) {
        Some(PropertyValue::Select { select: Some(option) })
        | Some(PropertyValue::Status { status: Some(option) }) => non_empty(&option.name),
        _ => None,
    }
}

pub fn read_multi_select(prop: Option<&Property>) -> Vec<String> {
    match value(prop) {
        Some(PropertyValue::MultiSelect { multi_select }) => multi_select.iter()
            .filter_map(|option| non_empty(&option.name))
            .collect(),
        _ => vec![],
    }
}

/// Only the first assignee counts: a post has a single owner.
pub fn read_people(prop: Option<&Property>) -> Option<String> {
    match value(prop) {
        Some(PropertyValue::People { people }) => people.first()
            .and_then(|person| person.name.as_deref())
            .and_then(non_empty),
        _ => None,
    }
}

pub fn read_rollup_name(prop: Option<&Property>) -> Option<String> {
    let Some(PropertyValue::Rollup { rollup }) = value(prop) else {
        return None;
    };

    match rollup {
        Rollup::Array { array } => match array.first().and_then(Property::value) {
            Some(PropertyValue::Title { title: runs })
            | Some(PropertyValue::RichText { rich_text: runs }) => runs.first()
                .and_then(|run| non_empty(&run.plain_text)),
            _ => None,
        },
        Rollup::Number { number: Some(number) } => Some(number.to_string()),
        _ => None,
    }
}

/// Resolving the linked page's title would take another request, so a
/// non-empty relation only yields a placeholder.
pub fn read_relation_name(prop: Option<&Property>) -> Option<String> {
    match value(prop) {
        Some(PropertyValue::Relation { relation }) if !relation.is_empty() => Some(RELATION_PLACEHOLDER.to_string()),
        _ => None,
    }
}

/// A link can live in a url, rich text or title property, or come as a bare string.
pub fn read_text_url(prop: Option<&Property>) -> Option<String> {
    match prop? {
        Property::Value(PropertyValue::Url { url }) => url.as_deref().and_then(non_empty),
        Property::Value(PropertyValue::RichText { rich_text }) => non_empty(&join_text(rich_text)),
        Property::Value(PropertyValue::Title { title }) => non_empty(&join_text(title)),
        Property::Text(text) => non_empty(text),
        _ => None,
    }
}

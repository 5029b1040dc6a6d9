use std::collections::HashMap;

use serde::Deserialize;

/// Property bag of a page, keyed by the property name shown in Notion.
pub type Properties = HashMap<String, Property>;

/// A database row as returned by the query endpoint.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawPage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub properties: Properties,
}

/// A property value as found in the page.
///
/// Decoding never fails for a single property: a shape we don't understand
/// ends up in `Malformed` and readers treat it as absent. This keeps schema
/// drift in the database from failing the whole page.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Property {
    Value(PropertyValue),
    Text(String),
    Malformed(serde_json::Value),
}

impl Property {
    pub fn value(&self) -> Option<&PropertyValue> {
        match self {
            Property::Value(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    Status {
        #[serde(default)]
        status: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    Checkbox {
        #[serde(default)]
        checkbox: bool,
    },
    Date {
        #[serde(default)]
        date: Option<DateValue>,
    },
    People {
        #[serde(default)]
        people: Vec<Person>,
    },
    Files {
        #[serde(default)]
        files: Vec<FileObject>,
    },
    Url {
        #[serde(default)]
        url: Option<String>,
    },
    Relation {
        #[serde(default)]
        relation: Vec<RelationRef>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    Rollup {
        rollup: Rollup,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DateValue {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
}

/// Entry of a `files` property. Uploaded files carry `file.url`,
/// linked files carry `external.url`.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FileObject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file: Option<FileUrl>,
    #[serde(default)]
    pub external: Option<FileUrl>,
}

impl FileObject {
    pub fn url(&self) -> Option<&str> {
        self.file.as_ref()
            .or(self.external.as_ref())
            .map(|f| f.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FileUrl {
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RelationRef {
    #[serde(default)]
    pub id: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rollup {
    Array {
        #[serde(default)]
        array: Vec<Property>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    #[serde(other)]
    Unsupported,
}

/// Body of a database query response.
#[derive(Deserialize, Debug, Default)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Option<Vec<RawPage>>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Body of a database retrieve response. Only the property kinds are kept.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DatabaseSchema {
    #[serde(default)]
    pub properties: HashMap<String, SchemaProperty>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SchemaProperty {
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl DatabaseSchema {
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn has_property_of_kind(&self, name: &str, kind: &str) -> bool {
        self.properties.get(name).is_some_and(|p| p.kind == kind)
    }
}

/// Error body Notion sends along with non-2xx statuses.
#[derive(Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

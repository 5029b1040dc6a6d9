use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::asset::{extract_assets, Asset, AssetType};
use crate::notion::model::{Properties, RawPage};
use crate::property_reader::*;

pub const UNTITLED: &str = "Untitled";
pub const DEFAULT_STATUS: &str = "Draft";

/// A database row flattened into what the grid shows.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub publish_date: Option<String>,
    pub caption: String,
    pub pinned: bool,
    pub hide: bool,
    pub brand: Option<String>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub platform: Option<String>,
    pub status: String,
    pub owner: Option<String>,
    pub assets: Vec<Asset>,
    pub is_video: bool,
    pub created_time: String,
    pub url: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, date={}, status={}, owner={}\ntitle={}\nassets={}",
               self.id,
               self.publish_date.as_deref().unwrap_or("-"),
               self.status,
               self.owner.as_deref().unwrap_or("-"),
               self.title,
               self.assets.len(),
        )
    }
}

impl Post {
    pub fn from_page(page: &RawPage) -> Post {
        let props = &page.properties;
        let assets = extract_assets(props);
        let is_video = assets.iter().any(|a| a.kind == AssetType::Video);

        let title = read_title(props.get("Name"));
        let title = if title.is_empty() { UNTITLED.to_string() } else { title };

        Post {
            id: page.id.clone(),
            title,
            publish_date: read_date(props.get("Publish Date")),
            caption: read_rich_text(props.get("Caption")),
            pinned: Self::read_pinned(props),
            hide: read_checkbox(props.get("Hide")),
            brand: read_select(props.get("Brand")),
            client: Self::read_linked_name(props, "ClientName", "Client"),
            project: Self::read_linked_name(props, "ProjectName", "Project"),
            platform: read_select(props.get("Platform"))
                .or_else(|| read_multi_select(props.get("Platform")).into_iter().next()),
            status: read_select(props.get("Status")).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            owner: read_people(props.get("Owner")),
            assets,
            is_video,
            created_time: page.created_time.clone(),
            url: page.url.clone(),
        }
    }

    /// Pinned is a checkbox in some databases and a select in others, where
    /// any chosen option marks the post.
    fn read_pinned(props: &Properties) -> bool {
        let pinned = props.get("Pinned");
        read_checkbox(pinned) || read_select(pinned).is_some()
    }

    /// Clients and projects are linked records. The rollup carries the
    /// readable name; older rows use a plain select; as a last resort a
    /// non-empty relation gives a placeholder.
    fn read_linked_name(props: &Properties, rollup: &str, name: &str) -> Option<String> {
        read_rollup_name(props.get(rollup))
            .or_else(|| read_select(props.get(name)))
            .or_else(|| read_relation_name(props.get(name)))
    }
}

pub fn normalize_post(page: &RawPage) -> Post {
    Post::from_page(page)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::asset::AssetSource;
    use crate::test_data::{sample_pages, FULL_PAGE};

    use super::*;

    #[test]
    fn test_from_full_page() {
        let page: RawPage = serde_json::from_str(FULL_PAGE).unwrap();
        let post = normalize_post(&page);
        println!("{}", post);

        assert_eq!(post.id, "2f1a6c1e-0d7c-4a53-9f0e-6a1b5f0c9a01");
        assert_eq!(post.title, "Summer drop teaser");
        assert_eq!(post.publish_date.as_deref(), Some("2024-06-14"));
        assert_eq!(post.caption, "New colors, same fit.");
        assert!(post.pinned);
        assert!(!post.hide);
        assert_eq!(post.brand.as_deref(), Some("Northwind"));
        assert_eq!(post.client.as_deref(), Some("Acme Retail"));
        assert_eq!(post.project.as_deref(), Some("Summer 24"));
        assert_eq!(post.platform.as_deref(), Some("Instagram"));
        assert_eq!(post.status, "Scheduled");
        assert_eq!(post.owner.as_deref(), Some("Ana Ruiz"));
        assert_eq!(post.assets.len(), 2);
        assert!(post.assets.iter().all(|a| a.source == AssetSource::Attachment));
        assert!(post.is_video);
        assert_eq!(post.created_time, "2024-06-01T09:30:00.000Z");
        assert_eq!(post.url, "https://www.notion.so/Summer-drop-teaser-2f1a6c1e0d7c4a539f0e6a1b5f0c9a01");
    }

    #[test]
    fn test_empty_page_defaults() {
        let post = normalize_post(&RawPage::default());
        assert_eq!(post.title, "Untitled");
        assert_eq!(post.status, "Draft");
        assert_eq!(post.publish_date, None);
        assert_eq!(post.caption, "");
        assert!(!post.pinned);
        assert!(!post.hide);
        assert_eq!(post.client, None);
        assert_eq!(post.project, None);
        assert_eq!(post.owner, None);
        assert!(post.assets.is_empty());
        assert!(!post.is_video);
    }

    #[test]
    fn test_malformed_properties_degrade() {
        let page: RawPage = serde_json::from_value(json!({
            "id": "p9",
            "properties": {
                "Name": { "type": "title", "title": null },
                "Status": { "type": "select", "select": { "name": "" } },
                "Hide": "true",
                "Owner": { "type": "people", "people": [{ "object": "user" }] },
                "Attachment": 12
            }
        })).unwrap();
        let post = normalize_post(&page);
        assert_eq!(post.title, "Untitled");
        assert_eq!(post.status, "Draft");
        assert!(!post.hide);
        assert_eq!(post.owner, None);
        assert!(post.assets.is_empty());
    }

    #[test]
    fn test_linked_name_fallbacks() {
        let page: RawPage = serde_json::from_value(json!({
            "id": "p2",
            "properties": {
                "ClientName": { "type": "rollup", "rollup": { "type": "array", "array": [] } },
                "Client": { "type": "select", "select": { "name": "Globex" } },
                "Project": { "type": "relation", "relation": [{ "id": "r1" }] }
            }
        })).unwrap();
        let post = normalize_post(&page);
        assert_eq!(post.client.as_deref(), Some("Globex"));
        assert_eq!(post.project.as_deref(), Some("(relation)"));
    }

    #[test]
    fn test_pinned_as_checkbox_or_select() {
        let checkbox: RawPage = serde_json::from_value(json!({
            "properties": { "Pinned": { "type": "checkbox", "checkbox": true } }
        })).unwrap();
        assert!(normalize_post(&checkbox).pinned);

        let unset: RawPage = serde_json::from_value(json!({
            "properties": { "Pinned": { "type": "select", "select": null } }
        })).unwrap();
        assert!(!normalize_post(&unset).pinned);
    }

    #[test]
    fn test_platform_from_multi_select() {
        let page: RawPage = serde_json::from_value(json!({
            "properties": {
                "Platform": { "type": "multi_select", "multi_select": [{ "name": "TikTok" }, { "name": "YouTube" }] }
            }
        })).unwrap();
        assert_eq!(normalize_post(&page).platform.as_deref(), Some("TikTok"));
    }

    #[test]
    fn test_serialized_keys() {
        let pages = sample_pages();
        let value = serde_json::to_value(normalize_post(&pages[1])).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in ["id", "title", "publishDate", "caption", "pinned", "hide", "brand", "client", "project",
            "platform", "status", "owner", "assets", "isVideo", "createdTime", "url"] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
        assert_eq!(value["assets"][0]["source"], "link");
    }
}

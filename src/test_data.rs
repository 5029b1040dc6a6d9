#[cfg(test)]
use crate::notion::model::RawPage;

#[cfg(test)]
pub const FULL_PAGE: &str = r##"{
  "object": "page",
  "id": "2f1a6c1e-0d7c-4a53-9f0e-6a1b5f0c9a01",
  "created_time": "2024-06-01T09:30:00.000Z",
  "last_edited_time": "2024-06-10T16:02:00.000Z",
  "archived": false,
  "url": "https://www.notion.so/Summer-drop-teaser-2f1a6c1e0d7c4a539f0e6a1b5f0c9a01",
  "properties": {
    "Name": { "id": "title", "type": "title", "title": [
      { "type": "text", "text": { "content": "Summer drop" }, "plain_text": "Summer drop" },
      { "type": "text", "text": { "content": " teaser" }, "plain_text": " teaser" }
    ] },
    "Publish Date": { "id": "a%3Bd", "type": "date", "date": { "start": "2024-06-14", "end": null, "time_zone": null } },
    "Caption": { "id": "b%3Bc", "type": "rich_text", "rich_text": [{ "plain_text": " New colors, same fit. " }] },
    "Hide": { "id": "h", "type": "checkbox", "checkbox": false },
    "Pinned": { "id": "p", "type": "select", "select": { "id": "1", "name": "Yes", "color": "red" } },
    "Brand": { "id": "br", "type": "select", "select": { "id": "2", "name": "Northwind", "color": "blue" } },
    "Platform": { "id": "pl", "type": "select", "select": { "id": "3", "name": "Instagram", "color": "pink" } },
    "Status": { "id": "st", "type": "status", "status": { "id": "4", "name": "Scheduled", "color": "yellow" } },
    "Owner": { "id": "ow", "type": "people", "people": [
      { "object": "user", "id": "u1", "name": "Ana Ruiz" },
      { "object": "user", "id": "u2", "name": "Luis Mora" }
    ] },
    "ClientName": { "id": "cn", "type": "rollup", "rollup": { "type": "array", "function": "show_original", "array": [
      { "type": "title", "title": [{ "plain_text": "Acme Retail" }] }
    ] } },
    "Client": { "id": "cl", "type": "relation", "relation": [{ "id": "c-1" }], "has_more": false },
    "ProjectName": { "id": "pn", "type": "rollup", "rollup": { "type": "array", "function": "show_original", "array": [
      { "type": "rich_text", "rich_text": [{ "plain_text": "Summer 24" }] }
    ] } },
    "Attachment": { "id": "at", "type": "files", "files": [
      { "name": "cover.jpg", "type": "file", "file": { "url": "https://prod-files.s3.amazonaws.com/cover.jpg?X-Amz-Signature=abc", "expiry_time": "2024-06-10T17:00:00.000Z" } },
      { "name": "reel.mp4", "type": "external", "external": { "url": "https://cdn.example.com/reel.mp4" } }
    ] },
    "Link": { "id": "ln", "type": "url", "url": "https://example.com/ignored.png" }
  }
}"##;

/// Small database: a pinned post, a link post, a hidden post and a bare one.
#[cfg(test)]
pub fn sample_pages() -> Vec<RawPage> {
    let value = serde_json::json!([
        {
            "id": "page-1",
            "created_time": "2024-06-01T09:30:00.000Z",
            "url": "https://www.notion.so/page-1",
            "properties": {
                "Name": { "type": "title", "title": [{ "plain_text": "Launch" }] },
                "Owner": { "type": "people", "people": [{ "name": "Ana" }] },
                "Brand": { "type": "select", "select": { "name": "Northwind" } },
                "Client": { "type": "select", "select": { "name": "Acme" } },
                "Hide": { "type": "checkbox", "checkbox": false }
            }
        },
        {
            "id": "page-2",
            "created_time": "2024-05-20T12:00:00.000Z",
            "url": "https://www.notion.so/page-2",
            "properties": {
                "Name": { "type": "title", "title": [{ "plain_text": "Behind the scenes" }] },
                "Owner": { "type": "people", "people": [{ "name": "Luis" }] },
                "Link": { "type": "url", "url": "https://drive.example.com/bts.mov" },
                "ProjectName": { "type": "rollup", "rollup": { "type": "array", "array": [
                    { "type": "title", "title": [{ "plain_text": "Campaign X" }] }
                ] } },
                "Hide": { "type": "checkbox", "checkbox": false }
            }
        },
        {
            "id": "page-3",
            "created_time": "2024-05-18T08:00:00.000Z",
            "url": "https://www.notion.so/page-3",
            "properties": {
                "Name": { "type": "title", "title": [{ "plain_text": "Old draft" }] },
                "Owner": { "type": "people", "people": [{ "name": "Ana" }] },
                "Client": { "type": "select", "select": { "name": "Zeta" } },
                "Hide": { "type": "checkbox", "checkbox": true }
            }
        },
        {
            "id": "page-4",
            "created_time": "2024-05-10T08:00:00.000Z",
            "url": "https://www.notion.so/page-4",
            "properties": {}
        }
    ]);
    serde_json::from_value(value).unwrap()
}

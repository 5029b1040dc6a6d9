use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::notion::model::{Properties, PropertyValue};
use crate::property_reader::read_text_url;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Video,
    Unknown,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetSource {
    Attachment,
    Link,
    Canva,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Asset {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub source: AssetSource,
}

impl Asset {
    fn new(url: &str, source: AssetSource) -> Self {
        Asset {
            url: url.to_string(),
            kind: guess_asset_type(url),
            source,
        }
    }
}

/// Infers the media kind from the URL path, ignoring the query string.
/// An empty URL counts as an image.
pub fn guess_asset_type(url: &str) -> AssetType {
    lazy_static! {
        static ref VIDEO_EXT: Regex = Regex::new(r"\.(mp4|mov|webm)$").unwrap();
        static ref IMAGE_EXT: Regex = Regex::new(r"\.(png|jpg|jpeg|gif|webp)$").unwrap();
    }

    if url.is_empty() {
        return AssetType::Image;
    }

    let clean = url.split('?').next().unwrap_or_default().to_lowercase();
    if VIDEO_EXT.is_match(&clean) || clean.contains("video") {
        AssetType::Video
    } else if IMAGE_EXT.is_match(&clean) || clean.contains("image") {
        AssetType::Image
    } else {
        AssetType::Unknown
    }
}

/// Collects the media of a post. Sources are tried in the order
/// Attachment, Link, Canva and the first one with content wins.
pub fn extract_assets(props: &Properties) -> Vec<Asset> {
    if let Some(PropertyValue::Files { files }) = props.get("Attachment").and_then(|p| p.value()) {
        if !files.is_empty() {
            return files.iter()
                .filter_map(|file| file.url())
                .map(|url| Asset::new(url, AssetSource::Attachment))
                .collect();
        }
    }

    if let Some(link) = read_text_url(props.get("Link")) {
        return vec![Asset::new(&link, AssetSource::Link)];
    }

    if let Some(canva) = read_text_url(props.get("Canva")) {
        return vec![Asset::new(&canva, AssetSource::Canva)];
    }

    vec![]
}

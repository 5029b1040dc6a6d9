use std::fmt;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use spdlog::{debug, warn};

use crate::error::{GridError, QUERY_FAILED_MSG};
use crate::notion::model::{ApiErrorBody, DatabaseSchema, QueryResponse};
use crate::notion::query::DatabaseQuery;
use crate::text_utils::non_empty;

pub const DEFAULT_API_BASE: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Where database pages come from.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn database_schema(&self, database_id: &str) -> Result<DatabaseSchema, GridError>;

    async fn query_pages(&self, database_id: &str, query: &DatabaseQuery) -> Result<QueryResponse, GridError>;
}

pub struct NotionClient {
    http: reqwest::Client,
    api_base: String,
    notion_version: String,
    token: String,
}

impl fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionClient")
            .field("api_base", &self.api_base)
            .field("notion_version", &self.notion_version)
            .finish()
    }
}

impl NotionClient {
    pub fn new(api_base: &str, notion_version: &str, token: &str) -> Result<Self, GridError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            notion_version: notion_version.to_string(),
            token: token.to_string(),
        })
    }

    fn database_url(&self, database_id: &str) -> String {
        format!("{}/databases/{}", self.api_base, database_id)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GridError> {
        let response = request
            .bearer_auth(&self.token)
            .header("Notion-Version", self.notion_version.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err_body = serde_json::from_str::<ApiErrorBody>(&body).unwrap_or_default();
            let message = upstream_message(&err_body, status.as_u16());
            warn!("Notion answered {} [{}]: {}", status, err_body.code.as_deref().unwrap_or("-"), message);
            return Err(GridError::Upstream(message));
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            debug!("Unable to decode Notion response: {}", e);
            GridError::InvalidResponse
        })
    }
}

impl PageSource for NotionClient {
    async fn database_schema(&self, database_id: &str) -> Result<DatabaseSchema, GridError> {
        let request = self.http.get(self.database_url(database_id));
        self.send(request).await
    }

    async fn query_pages(&self, database_id: &str, query: &DatabaseQuery) -> Result<QueryResponse, GridError> {
        let url = format!("{}/query", self.database_url(database_id));
        let request = self.http.post(url).json(query);
        self.send(request).await
    }
}

/// Notion's own message when it sent one, else a generic message naming
/// the error code (or the HTTP status when there is no code either).
fn upstream_message(err: &ApiErrorBody, status: u16) -> String {
    if let Some(message) = err.message.as_deref().and_then(non_empty) {
        return message;
    }

    match err.code.as_deref().and_then(non_empty) {
        Some(code) => format!("{} ({})", QUERY_FAILED_MSG, code),
        None => format!("{} (HTTP {})", QUERY_FAILED_MSG, status),
    }
}

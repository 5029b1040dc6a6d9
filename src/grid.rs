use serde::Serialize;
use spdlog::{debug, info, warn};

use crate::error::GridError;
use crate::filters::{build_filters, FilterSet};
use crate::notion::client::PageSource;
use crate::notion::query::build_query;
use crate::post::{normalize_post, Post};

#[derive(Debug, Clone, Copy)]
pub struct GridOptions {
    /// Look at the database schema before building the query
    pub detect_schema: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { detect_schema: true }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    pub ok: bool,
    pub db_id: String,
    pub items: Vec<Post>,
    pub filters: FilterSet,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// Fetches one page of the database and turns it into grid items plus facets.
pub async fn load_grid<S: PageSource>(source: &S, database_id: &str, options: GridOptions) -> Result<GridResponse, GridError> {
    let schema = if options.detect_schema {
        match source.database_schema(database_id).await {
            Ok(schema) => Some(schema),
            Err(e) => {
                warn!("Unable to read schema of database {}, querying with defaults: {}", database_id, e);
                None
            }
        }
    } else {
        None
    };

    let query = build_query(schema.as_ref());
    debug!("Querying database {} (hide filter: {}, sorts: {})", database_id, query.excludes_hidden(), query.sorts.len());

    let response = source.query_pages(database_id, &query).await?;
    let Some(pages) = response.results else {
        return Err(GridError::InvalidResponse);
    };

    let mut items: Vec<Post> = pages.iter().map(normalize_post).collect();
    if query.excludes_hidden() {
        let before = items.len();
        items.retain(|post| !post.hide);
        if items.len() != before {
            warn!("Dropped {} hidden rows that passed the Hide filter", before - items.len());
        }
    }

    let filters = build_filters(&items);
    info!("Loaded {} items from database {}", items.len(), database_id);

    Ok(GridResponse {
        ok: true,
        db_id: database_id.to_string(),
        items,
        filters,
        has_more: response.has_more,
        next_cursor: response.next_cursor,
    })
}

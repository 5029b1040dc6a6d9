use std::sync::Arc;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use ntex::http::StatusCode;
use ntex::web;
use serde::Serialize;
use spdlog::{error, info};

use crate::config::Config;
use crate::error::GridError;
use crate::grid::{load_grid, GridOptions};
use crate::notion::client::NotionClient;

struct AppState {
    client: Option<NotionClient>,
    database_id: Option<String>,
    options: GridOptions,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Health<'a> {
    ok: bool,
    notion_token: bool,
    /// Same id the grid queries, resolved once at startup
    db_id: Option<&'a str>,
    now: String,
}

fn error_response(err: &GridError) -> web::HttpResponse {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    web::HttpResponse::build(status).json(&err.to_body())
}

#[web::get("/api/grid")]
async fn grid(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let (Some(client), Some(database_id)) = (&state.client, &state.database_id) else {
        return error_response(&GridError::MissingCredentials);
    };

    match load_grid(client, database_id, state.options).await {
        Ok(response) => web::HttpResponse::Ok().json(&response),
        Err(e) => {
            error!("Notion API Error: {}", e);
            error_response(&e)
        }
    }
}

#[web::get("/api/health")]
async fn health(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    web::HttpResponse::Ok().json(&Health {
        ok: true,
        notion_token: state.client.is_some(),
        db_id: state.database_id.as_deref(),
        now: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn server_run(config: Config) -> Result<()> {
    let notion = &config.notion;
    let database_id = notion.resolve_database_id();
    let client = match notion.resolve_token() {
        Some(token) => Some(NotionClient::new(notion.api_base(), notion.notion_version(), &token)?),
        None => None,
    };

    if client.is_none() || database_id.is_none() {
        error!("Notion token or database id is not configured. /api/grid will answer 400");
    } else {
        info!("Serving database {} from {}", database_id.as_deref().unwrap_or_default(), notion.api_base());
    }

    let app_state = Arc::new(AppState {
        client,
        database_id,
        options: GridOptions { detect_schema: notion.detect_schema() },
    });

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(grid)
            .service(health)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await?;

    Ok(())
}

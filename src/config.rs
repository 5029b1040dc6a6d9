use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

use crate::notion::client::{DEFAULT_API_BASE, DEFAULT_NOTION_VERSION};
use crate::text_utils::non_empty;

/// Environment variables holding the integration token, most preferred first.
pub const TOKEN_VARS: [&str; 4] = ["NOTION_TOKEN", "NOTION_API_TOKEN", "NOTION_SECRET", "NOTION_API_KEY"];

/// Environment variables holding the database id, most preferred first.
pub const DATABASE_ID_VARS: [&str; 4] = ["NOTION_DATABASE_ID", "NOTION_DB_ID", "NOTION_DB", "NOTION_CONTENT_DB_ID"];

#[derive(Deserialize, Clone, Debug)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            address: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Notion {
    pub token: Option<String>,
    pub database_id: Option<String>,
    pub api_base: Option<String>,
    pub notion_version: Option<String>,
    pub detect_schema: Option<bool>,
}

impl Notion {
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn notion_version(&self) -> &str {
        self.notion_version.as_deref().unwrap_or(DEFAULT_NOTION_VERSION)
    }

    pub fn detect_schema(&self) -> bool {
        self.detect_schema.unwrap_or(true)
    }

    /// Token from the config file, else from the first non-empty environment variable.
    pub fn resolve_token(&self) -> Option<String> {
        resolve(self.token.as_deref(), &TOKEN_VARS, |name| env::var(name).ok())
    }

    pub fn resolve_database_id(&self) -> Option<String> {
        resolve(self.database_id.as_deref(), &DATABASE_ID_VARS, |name| env::var(name).ok())
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub notion: Notion,
    pub log: Option<Log>,
}

fn resolve<F>(configured: Option<&str>, vars: &[&str], lookup: F) -> Option<String>
    where F: Fn(&str) -> Option<String>
{
    configured.and_then(non_empty)
        .or_else(|| vars.iter().find_map(|name| lookup(*name).as_deref().and_then(non_empty)))
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_string_lossy().to_string()));
    match exe_dir {
        Some(exe_dir) => PathBuf::from(path.to_string_lossy().replace("${exe_dir}", &exe_dir)),
        None => path,
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

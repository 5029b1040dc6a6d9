use serde::Serialize;

pub const MISSING_CREDENTIALS_MSG: &str = "Missing NOTION_TOKEN or NOTION_DATABASE_ID env vars.";
pub const INVALID_RESPONSE_MSG: &str = "Invalid Notion response";
pub const QUERY_FAILED_MSG: &str = "Notion query failed";

#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("{}", MISSING_CREDENTIALS_MSG)]
    MissingCredentials,

    #[error("{}", INVALID_RESPONSE_MSG)]
    InvalidResponse,

    /// Failure reported by Notion itself, carrying its message.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

impl GridError {
    pub fn status_code(&self) -> u16 {
        match self {
            GridError::MissingCredentials => 400,
            _ => 500,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let message = self.to_string();
        ErrorBody {
            ok: false,
            error: if message.is_empty() { QUERY_FAILED_MSG.to_string() } else { message },
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variables are missing or empty: {}", .0.join(", "))]
    MissingTokens(Vec<&'static str>),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("homework API request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("homework API returned {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("homework API response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("homework API response must be an object, got {found}")]
    NotAnObject { found: &'static str },
    #[error("`homeworks` must be a list, got {found}")]
    HomeworksNotAList { found: &'static str },
    #[error("homework API response has no `homeworks` key")]
    MissingHomeworks,
    #[error("`current_date` must be an integer timestamp, got {found}")]
    InvalidCurrentDate { found: &'static str },
    #[error("homework #{index} is malformed: {source}")]
    InvalidHomework {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("unknown homework status: {0:?}")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Telegram request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Telegram API error: {status} - {description}")]
    Rejected {
        status: reqwest::StatusCode,
        description: String,
    },
}

pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    }
}

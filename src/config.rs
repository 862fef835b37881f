use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_RETRY_SECS: u64 = 600;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_time: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing = missing_tokens(&lookup);
        if !missing.is_empty() {
            return Err(ConfigError::MissingTokens(missing));
        }

        let required = |key: &str| lookup(key).unwrap_or_default();
        let seconds = |key: &str, default: u64| {
            lookup(key)
                .and_then(|val| val.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(default)
        };

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN"),
            telegram_token: required("TELEGRAM_TOKEN"),
            telegram_chat_id: required("TELEGRAM_CHAT_ID"),
            endpoint: lookup("PRACTICUM_ENDPOINT")
                .filter(|val| !val.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .filter(|val| !val.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_time: Duration::from_secs(seconds("RETRY_TIME", DEFAULT_RETRY_SECS)),
            request_timeout: Duration::from_secs(seconds("REQUEST_TIMEOUT", DEFAULT_TIMEOUT_SECS)),
        })
    }
}

pub fn check_tokens<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    missing_tokens(&lookup).is_empty()
}

fn missing_tokens<F>(lookup: &F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_VARS
        .into_iter()
        .filter(|key| lookup(*key).map_or(true, |val| val.is_empty()))
        .collect()
}

use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::Config;
use crate::error::{ApiError, ConfigError};

#[derive(Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }

    /// Errors are returned, not logged; the poll loop reports them once.
    pub async fn get_api_answer(&self, from_date: Option<i64>) -> Result<Value, ApiError> {
        let timestamp = from_date.unwrap_or_else(|| Utc::now().timestamp());
        tracing::debug!(from_date = timestamp, "Requesting homework statuses");

        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.without_url()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.without_url()))?;

        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus { status, body });
        }

        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ConfigError, NotifyError};

#[derive(Clone)]
pub struct TelegramBot {
    http: reqwest::Client,
    api_url: String,
    token: String,
    chat_id: String,
}

impl TelegramBot {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self {
            http,
            api_url: config.telegram_api_url.trim_end_matches('/').to_string(),
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        })
    }

    pub async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let resp = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| NotifyError::Transport(err.without_url()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| NotifyError::Transport(err.without_url()))?;
        let reply: Option<SendMessageResponse> = serde_json::from_str(&body).ok();

        match reply {
            Some(SendMessageResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(SendMessageResponse {
                description: Some(description),
                ..
            }) => Err(NotifyError::Rejected {
                status,
                description,
            }),
            _ => Err(NotifyError::Rejected {
                status,
                description: body,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_config, unreachable_url};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn posts_text_to_configured_chat() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:bot/sendMessage"))
            .and(body_json(json!({"chat_id": "42", "text": "Привет"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": {"message_id": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let bot = TelegramBot::new(&test_config(&server.uri())).unwrap();
        bot.send_message("Привет").await.unwrap();
    }

    #[tokio::test]
    async fn api_rejection_carries_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let bot = TelegramBot::new(&test_config(&server.uri())).unwrap();
        let err = bot.send_message("hello").await.unwrap_err();
        match err {
            NotifyError::Rejected { status, description } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn non_json_failure_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let bot = TelegramBot::new(&test_config(&server.uri())).unwrap();
        let err = bot.send_message("hello").await.unwrap_err();
        assert!(matches!(err, NotifyError::Rejected { ref description, .. } if description == "Bad Gateway"));
    }

    #[tokio::test]
    async fn transport_error_hides_bot_token() {
        let bot = TelegramBot::new(&test_config(&unreachable_url())).unwrap();
        let err = bot.send_message("hi").await.unwrap_err();

        assert!(matches!(err, NotifyError::Transport(_)));
        let report = format!("Сбой в работе программы: {err}");
        assert!(!report.contains("123:bot"), "token leaked: {report}");
    }
}

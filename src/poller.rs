use std::time::Duration;

use anyhow::Result;
use chrono::Utc;

use crate::config::Config;
use crate::error::ConfigError;
use crate::homework::{check_response, parse_status};
use crate::practicum::PracticumClient;
use crate::telegram::TelegramBot;

// ~1 month
pub const INITIAL_LOOKBACK_SECS: i64 = 2_629_743;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Notified { homework_name: String },
    NoUpdates,
}

pub struct Poller {
    api: PracticumClient,
    bot: TelegramBot,
    cursor: i64,
    retry_time: Duration,
}

impl Poller {
    pub fn new(api: PracticumClient, bot: TelegramBot, cursor: i64, retry_time: Duration) -> Self {
        Self {
            api,
            bot,
            cursor,
            retry_time,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(
            PracticumClient::new(config)?,
            TelegramBot::new(config)?,
            Utc::now().timestamp() - INITIAL_LOOKBACK_SECS,
            config.retry_time,
        ))
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub async fn run(mut self) {
        tracing::info!(
            cursor = self.cursor,
            retry_secs = self.retry_time.as_secs(),
            "Polling homework statuses"
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.retry_time).await;
        }
    }

    /// One cycle with its failure boundary. Returns `None` when the cycle failed.
    pub async fn run_cycle(&mut self) -> Option<CycleOutcome> {
        match self.poll_once().await {
            Ok(outcome) => {
                match &outcome {
                    CycleOutcome::Notified { homework_name } => {
                        tracing::info!(homework = %homework_name, "Homework status notification sent")
                    }
                    CycleOutcome::NoUpdates => tracing::debug!("No homework status changes"),
                }
                Some(outcome)
            }
            Err(err) => {
                self.report_failure(&err).await;
                None
            }
        }
    }

    async fn poll_once(&mut self) -> Result<CycleOutcome> {
        let raw = self.api.get_api_answer(Some(self.cursor)).await?;
        let response = check_response(raw)?;

        let outcome = match response.latest() {
            Some(homework) => {
                let message = parse_status(homework)?;
                self.bot.send_message(&message).await?;
                CycleOutcome::Notified {
                    homework_name: homework.homework_name.clone(),
                }
            }
            None => CycleOutcome::NoUpdates,
        };

        match response.current_date {
            Some(current_date) => self.cursor = current_date,
            None => tracing::warn!(
                cursor = self.cursor,
                "Response has no current_date, keeping previous cursor"
            ),
        }

        Ok(outcome)
    }

    async fn report_failure(&self, err: &anyhow::Error) {
        let message = format!("Сбой в работе программы: {err}");
        tracing::error!(error = %err, "Poll cycle failed");

        if let Err(notify_err) = self.bot.send_message(&message).await {
            tracing::error!(error = %notify_err, "Failed to deliver error report");
        }
    }
}

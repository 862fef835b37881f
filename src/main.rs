mod config;
mod error;
mod homework;
mod logger;
mod models;
mod poller;
mod practicum;
mod telegram;
#[cfg(test)]
mod test_support;

use std::env;

use anyhow::{Context, Result};

use crate::config::{check_tokens, Config};
use crate::poller::Poller;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging()?;

    if !check_tokens(|key| env::var(key).ok()) {
        tracing::error!(
            severity = "CRITICAL",
            "PRACTICUM_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID must all be set"
        );
        anyhow::bail!("Required environment variables are missing");
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    let poller = Poller::from_config(&config).context("Failed to initialize HTTP clients")?;

    tracing::info!(
        endpoint = %config.endpoint,
        chat_id = %config.telegram_chat_id,
        "Starting homework status bot"
    );

    poller.run().await;
    Ok(())
}

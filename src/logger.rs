use std::env;
use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub fn init_logging() -> Result<()> {
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
    let level = level.to_lowercase();

    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(level),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match env::var("LOG_FILE") {
        Ok(path) if !path.trim().is_empty() => {
            let file = File::create(&path).with_context(|| format!("Failed to open log file {path}"))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        _ => builder.init(),
    }

    Ok(())
}

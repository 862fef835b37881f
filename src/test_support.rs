use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Config;

pub(crate) fn test_config(base_url: &str) -> Config {
    Config {
        practicum_token: "secret".to_string(),
        telegram_token: "123:bot".to_string(),
        telegram_chat_id: "42".to_string(),
        endpoint: format!("{base_url}/api/user_api/homework_statuses/"),
        telegram_api_url: base_url.to_string(),
        retry_time: Duration::from_secs(600),
        request_timeout: Duration::from_secs(5),
    }
}

/// Base URL of a local port with nothing listening on it.
pub(crate) fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub(crate) fn count(&self, level: &str) -> usize {
        let needle = format!(" {level} ");
        self.contents().lines().filter(|line| line.contains(&needle)).count()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes this thread's `tracing` events into a buffer until the guard drops.
/// Works with `#[tokio::test]`, which polls everything on the current thread.
pub(crate) fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("homework_status_bot=debug")
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_target(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tracing::subscriber::{DefaultGuard, set_default};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Registry, fmt};
use wiremock::MockServer;

use aliyunpan_auth::Config;

struct VecWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl std::io::Write for VecWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut guard = self.lines.lock().unwrap();
        guard.push(String::from_utf8_lossy(buf).into_owned());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Routes `tracing` output of the current thread into a buffer until the guard drops.
pub fn capture_logs() -> (Arc<Mutex<Vec<String>>>, DefaultGuard) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let writer_lines = lines.clone();
    let subscriber = Registry::default().with(
        fmt::Layer::default()
            .with_writer(move || VecWriter {
                lines: writer_lines.clone(),
            })
            .with_target(false)
            .with_level(true)
            .with_ansi(false),
    );
    let guard = set_default(subscriber);
    (lines, guard)
}

pub fn config(server: &MockServer) -> Config {
    Config::from_values(server.uri(), Some(5))
}

pub fn token_reply(access_token: &str, refresh_token: &str, expire_time: &str) -> serde_json::Value {
    serde_json::json!({
        "access_token": access_token,
        "refresh_token": refresh_token,
        "expires_in": 7200,
        "token_type": "Bearer",
        "user_id": "4b5d7a2e",
        "user_name": "138***000",
        "nick_name": "tester",
        "default_drive_id": "1234",
        "default_sbox_drive_id": "1235",
        "role": "user",
        "status": "enabled",
        "expire_time": expire_time,
        "device_id": "d41d8cd9"
    })
}

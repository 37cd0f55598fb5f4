use std::time::SystemTime;

use tracing::{Level, event};
use uuid::Uuid;

use crate::errors::Error;
use crate::token::AccessToken;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Issued,
    Rejected,
    Failed,
}

impl ExchangeOutcome {
    pub fn of(error: &Error) -> Self {
        match error {
            Error::Api { .. } => ExchangeOutcome::Rejected,
            _ => ExchangeOutcome::Failed,
        }
    }
}

/// Structured events for one refresh-token exchange. Token values are never recorded.
#[derive(Clone, Debug)]
pub struct ExchangeTelemetry {
    attempt_id: Uuid,
    url: String,
}

impl ExchangeTelemetry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            url: url.into(),
        }
    }

    pub fn emit_start(&self, at: SystemTime) {
        event!(
            Level::INFO,
            attempt_id = %self.attempt_id,
            url = %self.url,
            timestamp = ?at,
            "exchange.start"
        );
    }

    /// Records how the exchange ended: success or failure.
    pub fn finish(&self, result: &Result<AccessToken, Error>) {
        let at = SystemTime::now();
        match result {
            Ok(token) => event!(
                Level::INFO,
                attempt_id = %self.attempt_id,
                url = %self.url,
                timestamp = ?at,
                outcome = ?ExchangeOutcome::Issued,
                token_type = token.access_token_type(),
                expires_in = token.expires_in(),
                "exchange.success"
            ),
            Err(error) => event!(
                Level::WARN,
                attempt_id = %self.attempt_id,
                url = %self.url,
                timestamp = ?at,
                outcome = ?ExchangeOutcome::of(error),
                kind = ?error.kind(),
                error = %error,
                "exchange.failure"
            ),
        }
    }
}

use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::RefreshTokenResult;

use super::expiry::{self, ExpiryStatus};

/// An access token minted from a refresh token.
///
/// The value is immutable; refreshing produces a new instance. It serializes
/// with camelCase keys so callers can persist it and later re-supply the
/// refresh token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    access_token_type: String,
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    /// Local time, [`super::LOCAL_TIME_FORMAT`]. Empty when the provider's expiry was unreadable.
    expire_time: String,
}

impl AccessToken {
    pub fn new(
        access_token_type: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
        expire_time: impl Into<String>,
    ) -> Self {
        Self {
            access_token_type: access_token_type.into(),
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_in,
            expire_time: expire_time.into(),
        }
    }

    /// Maps a provider reply, converting its UTC expiry into `tz` once.
    pub fn from_result(result: RefreshTokenResult, tz: &TimeZone) -> Self {
        let expire_time = match expiry::local_expire_time(&result.expire_time, tz) {
            Some(local) => local,
            None => {
                warn!(
                    expire_time = %result.expire_time,
                    "unreadable expire_time in token reply; token will report as expired"
                );
                String::new()
            }
        };
        Self {
            access_token_type: result.token_type,
            access_token: result.access_token,
            refresh_token: result.refresh_token,
            expires_in: result.expires_in,
            expire_time,
        }
    }

    pub fn access_token_type(&self) -> &str {
        &self.access_token_type
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Lifetime in seconds as reported at issuance. Advisory only.
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }

    pub fn expire_time(&self) -> &str {
        &self.expire_time
    }

    /// Value for the `Authorization` header, e.g. `Bearer eyJ...`.
    pub fn authorization_header_value(&self) -> String {
        format!("{} {}", self.access_token_type, self.access_token)
    }

    pub fn expires_at(&self, tz: &TimeZone) -> Option<Zoned> {
        expiry::parse_local(&self.expire_time, tz)
    }

    pub fn expiry_status_at(&self, now: Timestamp, tz: &TimeZone) -> ExpiryStatus {
        ExpiryStatus::evaluate(self.expires_at(tz).as_ref(), now)
    }

    /// True when the token expires within the safety margin or its expiry is unreadable.
    pub fn is_expired_at(&self, now: Timestamp, tz: &TimeZone) -> bool {
        self.expiry_status_at(now, tz).is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Timestamp::now(), &TimeZone::system())
    }
}

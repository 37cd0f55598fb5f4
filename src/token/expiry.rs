use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp, Zoned};

/// Tokens this close to expiry are treated as already expired.
pub const EXPIRY_MARGIN: SignedDuration = SignedDuration::from_secs(60);

/// Layout of the local expiry string stored on an access token.
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryStatus {
    Valid { remaining: SignedDuration },
    /// Expires within [`EXPIRY_MARGIN`] or already has.
    Expiring,
    /// The stored expiry could not be read.
    Unknown,
}

impl ExpiryStatus {
    pub fn is_expired(self) -> bool {
        !matches!(self, ExpiryStatus::Valid { .. })
    }

    pub(crate) fn evaluate(expire_at: Option<&Zoned>, now: Timestamp) -> Self {
        let Some(expire_at) = expire_at else {
            return ExpiryStatus::Unknown;
        };
        let remaining = expire_at.timestamp().as_second() - now.as_second();
        if remaining < EXPIRY_MARGIN.as_secs() {
            ExpiryStatus::Expiring
        } else {
            ExpiryStatus::Valid {
                remaining: SignedDuration::from_secs(remaining),
            }
        }
    }
}

/// Converts the provider's UTC expiry into a local time string.
///
/// Accepts RFC 3339 timestamps (`2024-01-01T00:00:00Z`); an offset-less
/// datetime is read as UTC. Returns `None` for anything else.
pub fn local_expire_time(utc: &str, tz: &TimeZone) -> Option<String> {
    let utc = utc.trim();
    if utc.is_empty() {
        return None;
    }
    let timestamp = match utc.parse::<Timestamp>() {
        Ok(ts) => ts,
        Err(_) => utc
            .parse::<DateTime>()
            .ok()?
            .to_zoned(TimeZone::UTC)
            .ok()?
            .timestamp(),
    };
    Some(
        timestamp
            .to_zoned(tz.clone())
            .strftime(LOCAL_TIME_FORMAT)
            .to_string(),
    )
}

pub(crate) fn parse_local(value: &str, tz: &TimeZone) -> Option<Zoned> {
    let datetime = DateTime::strptime(LOCAL_TIME_FORMAT, value).ok()?;
    datetime.to_zoned(tz.clone()).ok()
}

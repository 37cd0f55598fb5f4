use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

pub const REFRESH_GRANT_TYPE: &str = "refresh_token";

#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest<'a> {
    pub refresh_token: &'a str,
    pub grant_type: &'static str,
}

impl<'a> RefreshTokenRequest<'a> {
    pub fn new(refresh_token: &'a str) -> Self {
        Self {
            refresh_token,
            grant_type: REFRESH_GRANT_TYPE,
        }
    }
}

/// Success payload of `/v2/account/token`. Missing or `null` fields decode as empty.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RefreshTokenResult {
    #[serde_as(as = "DefaultOnNull")]
    pub access_token: String,
    #[serde_as(as = "DefaultOnNull")]
    pub refresh_token: String,
    #[serde_as(as = "DefaultOnNull")]
    pub expires_in: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub token_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub user_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub user_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub nick_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub default_drive_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub default_sbox_drive_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub role: String,
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub expire_time: String, // RFC 3339, UTC
    #[serde_as(as = "DefaultOnNull")]
    pub device_id: String,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorResponse {
    #[serde_as(as = "DefaultOnNull")]
    pub code: String,
    #[serde_as(as = "DefaultOnNull")]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExchangeReply {
    Rejected(ErrorResponse),
    Issued(RefreshTokenResult),
}

impl ExchangeReply {
    /// A body carrying a non-empty error code is a rejection even if it would
    /// also decode as a success payload.
    pub fn classify(body: &[u8]) -> Result<Self, serde_json::Error> {
        if let Ok(err) = serde_json::from_slice::<ErrorResponse>(body)
            && !err.code.is_empty()
        {
            return Ok(ExchangeReply::Rejected(err));
        }
        let result = serde_json::from_slice::<RefreshTokenResult>(body)?;
        Ok(ExchangeReply::Issued(result))
    }
}

//! read configuration from a file or the environment

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::errors::Error;

pub const DEFAULT_AUTH_URL: &str = "https://auth.aliyundrive.com";

pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";
pub const DEFAULT_REFERER: &str = "https://www.aliyundrive.com/";
pub const DEFAULT_ORIGIN: &str = "https://www.aliyundrive.com";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Browser-like headers sent with the token request. The provider rejects
/// requests that do not look like they came from its web client.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrowserHeaders {
    pub accept: String,
    pub referer: String,
    pub origin: String,
    pub content_type: String,
    pub user_agent: String,
}

impl Default for BrowserHeaders {
    fn default() -> Self {
        Self {
            accept: DEFAULT_ACCEPT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default)]
    pub headers: BrowserHeaders,
    /// Whole-request timeout applied when the client builds its own HTTP client.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            headers: BrowserHeaders::default(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_values(auth_url: impl Into<String>, timeout_secs: Option<u64>) -> Self {
        Self {
            auth_url: auth_url.into(),
            headers: BrowserHeaders::default(),
            timeout_secs,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Reads overrides from the environment; anything unset keeps its default.
    /// # ENV Vars
    /// * `ALIYUNPAN_AUTH_URL` - Base URL of the authorization service
    /// * `ALIYUNPAN_USER_AGENT` - User-Agent header sent to the provider
    /// * `ALIYUNPAN_HTTP_TIMEOUT_SECS` - Request timeout in seconds
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Config::default();
        if let Some(url) = get("ALIYUNPAN_AUTH_URL") {
            config.auth_url = url;
        }
        if let Some(agent) = get("ALIYUNPAN_USER_AGENT") {
            config.headers.user_agent = agent;
        }
        if let Some(raw) = get("ALIYUNPAN_HTTP_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!(
                    "Invalid ALIYUNPAN_HTTP_TIMEOUT_SECS '{}': {}",
                    raw, e
                ))
            })?;
            config.timeout_secs = Some(secs);
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Full URL of the refresh endpoint.
    pub fn token_url(&self) -> String {
        format!("{}/v2/account/token", self.auth_url.trim_end_matches('/'))
    }
}

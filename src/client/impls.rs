use std::time::SystemTime;

use jiff::tz::TimeZone;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use tracing::debug;

use crate::{
    TokenClient,
    config::Config,
    errors::Error,
    telemetry::ExchangeTelemetry,
    token::AccessToken,
    types::{ExchangeReply, RefreshTokenRequest},
};

impl TokenClient {
    /// Create a new TokenClient with its own HTTP client.
    /// # Arguments
    /// * `config` - Explicit configuration (`Config`), typically loaded via `Config::from_file` or `Config::from_env`.
    ///   `timeout_secs`, when set, becomes the request timeout.
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Self::with_http_client(http, config)
    }

    /// Create a TokenClient around a caller-supplied HTTP client, which keeps
    /// control over proxies, timeouts and connection pooling with the caller.
    pub fn with_http_client(http: Client, config: Config) -> Result<Self, Error> {
        let _ = reqwest::Url::parse(&config.auth_url).map_err(|e| {
            Error::Config(format!("Invalid auth URL '{}': {}", config.auth_url, e))
        })?;
        Ok(Self {
            http,
            config,
            time_zone: TimeZone::system(),
        })
    }

    /// Zone used when turning the provider's UTC expiry into a local time string.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// Performs exactly one POST. Nothing is retried; callers decide how to
    /// react based on [`Error::kind`].
    pub async fn exchange_access_token(&self, refresh_token: &str) -> Result<AccessToken, Error> {
        let url = self.config.token_url();
        debug!("do request url: {}", url);
        let telemetry = ExchangeTelemetry::new(url.as_str());
        telemetry.emit_start(SystemTime::now());

        let result = self.request_token(&url, refresh_token).await;
        telemetry.finish(&result);
        result
    }

    /// Mint a replacement for `token` using its refresh token.
    pub async fn refresh(&self, token: &AccessToken) -> Result<AccessToken, Error> {
        self.exchange_access_token(token.refresh_token()).await
    }

    async fn request_token(&self, url: &str, refresh_token: &str) -> Result<AccessToken, Error> {
        let headers = &self.config.headers;
        let payload = serde_json::to_vec(&RefreshTokenRequest::new(refresh_token))?;
        let resp = self
            .http
            .post(url)
            .header(ACCEPT, headers.accept.as_str())
            .header(REFERER, headers.referer.as_str())
            .header(ORIGIN, headers.origin.as_str())
            .header(CONTENT_TYPE, headers.content_type.as_str())
            .header(USER_AGENT, headers.user_agent.as_str())
            .body(payload)
            .send()
            .await?;

        // The provider reports failures in the body; the status only goes to the log.
        let status = resp.status();
        let body = resp.bytes().await?;
        debug!(status = %status, len = body.len(), "token response received");

        match ExchangeReply::classify(&body)? {
            ExchangeReply::Rejected(err) => Err(Error::Api {
                code: err.code,
                message: err.message,
            }),
            ExchangeReply::Issued(result) => Ok(AccessToken::from_result(result, &self.time_zone)),
        }
    }
}

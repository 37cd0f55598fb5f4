use jiff::tz::TimeZone;
use reqwest::Client;

use crate::config::Config;

mod impls;

/// Exchanges refresh tokens for access tokens against the provider's auth service.
///
/// Holds no mutable state; clone it or share it across tasks freely.
#[derive(Clone, Debug)]
pub struct TokenClient {
    http: Client,
    config: Config,
    time_zone: TimeZone,
}

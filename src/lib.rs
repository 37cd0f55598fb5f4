pub mod client;
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod token;
pub mod types;

pub use client::TokenClient;
pub use config::{BrowserHeaders, Config};
pub use errors::{Error, ErrorKind};
pub use token::{AccessToken, ExpiryStatus};

use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    Http(reqwest::Error),
    Api { code: String, message: String },
    Config(String),
}

/// Coarse classification callers branch on when deciding to retry or re-authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable reply (transport or decoding).
    Failed,
    /// The provider answered with an error payload.
    Api,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) | Error::Json(_) | Error::Http(_) => ErrorKind::Failed,
            Error::Api { .. } => ErrorKind::Api,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "io error: {}", err),
            Error::Json(err) => write!(f, "failed to parse response: {}", err),
            Error::Http(err) => write!(f, "request failed: {}", err),
            Error::Api { code, message } => write!(f, "api error {}: {}", code, message),
            Error::Config(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Api { .. } | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_provider_message() {
        let err = Error::Api {
            code: "InvalidParameter.RefreshToken".into(),
            message: "refresh_token is not valid".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(
            err.to_string(),
            "api error InvalidParameter.RefreshToken: refresh_token is not valid"
        );
    }

    #[test]
    fn decode_errors_are_failures() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Failed);
    }
}

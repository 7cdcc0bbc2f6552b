//! Error types for the Lacework SDK

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the SDK and CLI
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl Error {
    /// Shorthand for client-side validation failures
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// The normalized API error, if this is one
    pub fn as_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Api(ApiError::Response(resp)) => Some(resp),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(ApiError::Transport(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Api(ApiError::InvalidUrl(err))
    }
}

/// Errors raised while talking to the API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response, normalized
    #[error(transparent)]
    Response(ErrorResponse),

    /// Transport failure from the HTTP client, propagated unchanged
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("account cannot be empty")]
    MissingAccount,

    #[error("unable to generate access token: auth keys missing")]
    MissingApiKeys,

    #[error("unable to generate access token: empty token in response")]
    EmptyToken,

    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Error returned for any response outside the 2xx range.
///
/// Displays as `[METHOD] URL: [STATUS] MESSAGE`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{method}] {url}: [{status}] {message}")]
pub struct ErrorResponse {
    /// HTTP method of the failed request
    pub method: String,

    /// Fully resolved request URL
    pub url: String,

    /// HTTP status code
    pub status: u16,

    /// Best-effort human readable message
    pub message: String,
}

/// Keys looked up inside the `data` object of an error envelope, in order.
/// Matching is case-insensitive, so `Message` and `ErrorMsg` are covered too.
const MESSAGE_FIELDS: &[&str] = &["message", "statusMessage", "errorMsg"];

impl ErrorResponse {
    /// Build a normalized error from a failed response body
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        status: StatusCode,
        body: &[u8],
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            status: status.as_u16(),
            message: extract_message(status, body),
        }
    }

    /// HTTP status code of the response
    pub fn status(&self) -> u16 {
        self.status
    }

    /// True for 404 responses
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }
}

fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

/// Pull a message out of one of the known error payload shapes.
///
/// Non-JSON bodies are returned verbatim. JSON envelopes yield the first
/// recognized, non-empty field of `data`; anything else falls back to the
/// status reason phrase.
pub(crate) fn extract_message(status: StatusCode, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.trim().is_empty() {
        return status_text(status);
    }

    let envelope = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => return text.trim().to_string(),
    };

    let Some(Value::Object(data)) = envelope.get("data") else {
        return status_text(status);
    };

    MESSAGE_FIELDS
        .iter()
        .find_map(|field| {
            data.iter()
                .find(|(key, value)| {
                    key.eq_ignore_ascii_case(field)
                        && value.as_str().is_some_and(|s| !s.is_empty())
                })
                .and_then(|(_, value)| value.as_str())
        })
        .map(str::to_string)
        .unwrap_or_else(|| status_text(status))
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `lacework configure` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Profile '{0}' not found in configuration")]
    ProfileNotFound(String),

    #[error("account missing. Run `lacework configure` or set LW_ACCOUNT.")]
    MissingAccount,

    #[error("api_key missing. Run `lacework configure` or set LW_API_KEY.")]
    MissingApiKey,

    #[error("api_secret missing. Run `lacework configure` or set LW_API_SECRET.")]
    MissingApiSecret,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

//! Access token issuance and caching

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::Client;
use super::transport::Credential;
use crate::error::{ApiError, Result};

/// Path of the token issuance endpoint, relative to `api/v2/`
pub const TOKEN_PATH: &str = "access/tokens";

/// Header carrying the API secret on token requests
pub const TOKEN_SECRET_HEADER: &str = "X-LW-UAKS";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    key_id: &'a str,
    expiry_time: u64,
}

/// Response of the token issuance endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub data: Vec<TokenData>,

    #[serde(default)]
    pub ok: bool,

    #[serde(default)]
    pub message: String,
}

/// A single issued token
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    /// Expiry timestamp as reported by the server
    #[serde(default)]
    pub expires_at: String,

    #[serde(default)]
    pub token: String,
}

impl TokenResponse {
    /// The issued token, if the response carries a non-empty one
    pub fn token(&self) -> Option<&str> {
        self.data
            .first()
            .map(|d| d.token.as_str())
            .filter(|t| !t.is_empty())
    }
}

/// True when `path` addresses the token issuance endpoint
pub(crate) fn is_token_path(path: &str) -> bool {
    let path = path.trim_start_matches('/');
    path == TOKEN_PATH || path.strip_prefix("api/v2/") == Some(TOKEN_PATH)
}

impl Client {
    /// Issue a new access token and store it on the client
    pub async fn generate_token(&self) -> Result<TokenResponse> {
        let mut cached = self.token.lock().await;
        let response = self.fetch_token().await?;
        let token = response.token().ok_or(ApiError::EmptyToken)?;
        *cached = Some(token.to_string());
        Ok(response)
    }

    /// Cached access token, issuing one first if the client holds none.
    ///
    /// The cache lock is held across the issuance call so concurrent first
    /// callers wait for a single token request.
    pub(crate) async fn ensure_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| !t.is_empty()) {
            return Ok(token.clone());
        }

        let response = self.fetch_token().await?;
        let token = response.token().ok_or(ApiError::EmptyToken)?.to_string();
        *cached = Some(token.clone());
        Ok(token)
    }

    async fn fetch_token(&self) -> Result<TokenResponse> {
        let keys = self.api_keys.as_ref().ok_or(ApiError::MissingApiKeys)?;
        if keys.key.is_empty() || keys.secret.is_empty() {
            return Err(ApiError::MissingApiKeys.into());
        }

        let body = serde_json::to_vec(&TokenRequest {
            key_id: &keys.key,
            expiry_time: self.expiration_time,
        })?;

        log::debug!(
            "requesting access token id={} expiry_time={}",
            self.id,
            self.expiration_time
        );
        let request = self.build_request(
            Method::POST,
            TOKEN_PATH,
            Some(body),
            Credential::Secret(&keys.secret),
        )?;
        let response = self.do_request(request).await?;
        self.decode_json(response).await
    }
}

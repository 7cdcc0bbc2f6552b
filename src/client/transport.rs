//! Request building and execution

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap};
use reqwest::{Method, Request, Response};

use super::Client;
use super::auth::{TOKEN_SECRET_HEADER, is_token_path};
use crate::error::{ApiError, Result};

/// Credential attached to an outgoing request
pub(crate) enum Credential<'a> {
    /// API secret, only for token issuance
    Secret(&'a str),
    /// Access token sent as `Authorization`
    Token(String),
}

const MASKED_HEADERS: &[&str] = &["authorization", "x-lw-uaks"];

impl Client {
    /// Build a request for `path` with an optional JSON body.
    ///
    /// Every path but token issuance carries an `Authorization` header; a
    /// token is issued first if the client does not hold one yet.
    pub async fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request> {
        if is_token_path(path) {
            let keys = self.api_keys.as_ref().ok_or(ApiError::MissingApiKeys)?;
            return self.build_request(method, path, body, Credential::Secret(&keys.secret));
        }

        let token = self.ensure_token().await?;
        self.build_request(method, path, body, Credential::Token(token))
    }

    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        credential: Credential<'_>,
    ) -> Result<Request> {
        let url = self.resolve_url(path)?;

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .headers(self.headers.clone());

        builder = match credential {
            Credential::Secret(secret) => builder.header(TOKEN_SECRET_HEADER, secret),
            Credential::Token(token) => builder.header(AUTHORIZATION, token),
        };

        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let request = builder.build()?;
        if self.debug {
            self.log_request(&request);
        }
        Ok(request)
    }

    /// Send a request through the HTTP client.
    ///
    /// In debug mode the response body is buffered, logged, and handed back
    /// in a rebuilt response so the caller can still consume it.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let response = self.http.execute(request).await?;
        if !self.debug {
            return Ok(response);
        }

        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        log::debug!(
            "response id={} code={} proto={:?} headers={} body={}",
            self.id,
            status.as_u16(),
            version,
            format_headers(&headers),
            String::from_utf8_lossy(&body)
        );

        let mut rebuilt = http::Response::new(body);
        *rebuilt.status_mut() = status;
        *rebuilt.version_mut() = version;
        *rebuilt.headers_mut() = headers;
        Ok(Response::from(rebuilt))
    }

    fn log_request(&self, request: &Request) {
        let body = request
            .body()
            .and_then(|b| b.as_bytes())
            .map(String::from_utf8_lossy)
            .unwrap_or_default();

        log::debug!(
            "request id={} method={} url={} headers={} body={}",
            self.id,
            request.method(),
            request.url(),
            format_headers(request.headers()),
            body
        );
    }
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if MASKED_HEADERS.contains(&name.as_str()) {
                "*****".into()
            } else {
                String::from_utf8_lossy(value.as_bytes())
            };
            format!("{}: {}", name, value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

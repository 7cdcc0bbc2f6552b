//! Lacework API client implementation

use std::time::Duration;

use chrono::Utc;
use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tokio::sync::Mutex;
use url::Url;

use crate::error::{ApiError, Result};

/// API version every relative path is resolved under
pub const API_VERSION: &str = "v2";

/// Default lifetime, in seconds, requested for generated access tokens
pub const DEFAULT_TOKEN_EXPIRATION: u64 = 3600;

/// Default timeout applied to the underlying HTTP client
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable that turns on debug mode when set to `debug`
pub const LOG_LEVEL_ENV: &str = "LW_LOG";

const ACCOUNT_DOMAIN: &str = ".lacework.net";

/// API key pair used to issue access tokens
#[derive(Clone)]
pub(crate) struct ApiKeys {
    pub(crate) key: String,
    pub(crate) secret: String,
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys")
            .field("key", &self.key)
            .field("secret", &"*****")
            .finish()
    }
}

/// Lacework API v2 client.
///
/// Holds the credentials, the base URL and the cached access token. Resource
/// services are borrowed views over a single client, e.g.
/// `client.agent_access_tokens().list()`.
pub struct Client {
    pub(crate) id: String,
    account: String,
    subaccount: Option<String>,
    pub(crate) base_url: Url,
    pub(crate) api_keys: Option<ApiKeys>,
    pub(crate) expiration_time: u64,
    pub(crate) headers: HeaderMap,
    org_access: bool,
    pub(crate) debug: bool,
    pub(crate) http: HttpClient,
    pub(crate) token: Mutex<Option<String>>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.id)
            .field("account", &self.account)
            .field("subaccount", &self.subaccount)
            .field("base_url", &self.base_url.as_str())
            .field("org_access", &self.org_access)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Start building a client for the given account
    pub fn builder(account: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(account)
    }

    /// Base URL every request is resolved against
    pub fn url(&self) -> &Url {
        &self.base_url
    }

    /// Account name (the subdomain of `lacework.net`)
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Sub-account sent in the `Account-Name` header, if any
    pub fn subaccount(&self) -> Option<&str> {
        self.subaccount.as_deref()
    }

    /// API version used for relative paths
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Whether requests are made with organization level access
    pub fn org_access(&self) -> bool {
        self.org_access
    }

    /// Whether request/response sniffing is enabled
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Whether the client currently holds an access token
    pub async fn valid_auth(&self) -> bool {
        self.token
            .lock()
            .await
            .as_ref()
            .is_some_and(|t| !t.is_empty())
    }

    /// Resolve a relative API path against the base URL.
    ///
    /// Paths are placed under `api/v2/` unless they already start with `api/`.
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        let relative = if path.starts_with("api/") {
            path.to_string()
        } else {
            format!("api/{}/{}", API_VERSION, path)
        };
        Ok(self.base_url.join(&relative)?)
    }
}

/// Builder for [`Client`]
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    account: String,
    subaccount: Option<String>,
    base_url: Option<String>,
    api_keys: Option<ApiKeys>,
    token: Option<String>,
    expiration_time: u64,
    timeout: Duration,
    headers: Vec<(String, String)>,
    org_access: bool,
    debug: bool,
}

impl ClientBuilder {
    /// Create a builder for the given account
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            subaccount: None,
            base_url: None,
            api_keys: None,
            token: None,
            expiration_time: DEFAULT_TOKEN_EXPIRATION,
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
            org_access: false,
            debug: false,
        }
    }

    /// API key and secret used to issue access tokens
    pub fn api_keys(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.api_keys = Some(ApiKeys {
            key: key.into(),
            secret: secret.into(),
        });
        self
    }

    /// Pre-issued access token; no token request is made while it is set
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into()).filter(|t: &String| !t.is_empty());
        self
    }

    /// Lifetime in seconds requested for generated tokens
    pub fn expiration_time(mut self, seconds: u64) -> Self {
        self.expiration_time = seconds;
        self
    }

    /// Override the base URL (defaults to `https://{account}.lacework.net`)
    pub fn url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Timeout applied by the underlying HTTP client
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Extra header sent with every request; empty names or values are ignored
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        if !name.is_empty() && !value.is_empty() {
            self.headers.push((name, value));
        }
        self
    }

    /// Access the organization level of the account
    pub fn org_access(mut self, enabled: bool) -> Self {
        self.org_access = enabled;
        self
    }

    /// Sub-account to operate on
    pub fn subaccount(mut self, subaccount: impl Into<String>) -> Self {
        self.subaccount = Some(subaccount.into()).filter(|s: &String| !s.is_empty());
        self
    }

    /// Log every request and response at debug level
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<Client> {
        let account = normalize_account(&self.account);
        if account.is_empty() {
            return Err(ApiError::MissingAccount.into());
        }

        let mut base_url = match &self.base_url {
            Some(url) => Url::parse(url)?,
            None => Url::parse(&format!("https://{}{}/", account, ACCOUNT_DOMAIN))?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("lacework-sdk-rust/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?,
        );
        for (name, value) in &self.headers {
            insert_header(&mut headers, name, value)?;
        }
        if let Some(subaccount) = &self.subaccount {
            insert_header(&mut headers, "Account-Name", subaccount)?;
        }
        if self.org_access {
            insert_header(&mut headers, "Org-Access", "true")?;
        }

        let debug = self.debug || debug_from_env();
        let http = HttpClient::builder().timeout(self.timeout).build()?;
        let id = format!("{:x}", Utc::now().timestamp_nanos_opt().unwrap_or_default());

        log::debug!(
            "api client created id={} account={} url={} version={} org_access={}",
            id,
            account,
            base_url,
            API_VERSION,
            self.org_access
        );

        Ok(Client {
            id,
            account,
            subaccount: self.subaccount,
            base_url,
            api_keys: self.api_keys,
            expiration_time: self.expiration_time,
            headers,
            org_access: self.org_access,
            debug,
            http,
            token: Mutex::new(self.token),
        })
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
    headers.insert(name, value);
    Ok(())
}

fn debug_from_env() -> bool {
    std::env::var(LOG_LEVEL_ENV).is_ok_and(|level| level.eq_ignore_ascii_case("debug"))
}

/// Reduce `acme.lacework.net` (or a full URL host) to `acme`
fn normalize_account(account: &str) -> String {
    let account = account.trim();
    let account = account
        .strip_prefix("https://")
        .or_else(|| account.strip_prefix("http://"))
        .unwrap_or(account);
    match account.find(ACCOUNT_DOMAIN) {
        Some(idx) => account[..idx].to_string(),
        None => account.trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_account() {
        assert_eq!(normalize_account("acme"), "acme");
        assert_eq!(normalize_account("acme.lacework.net"), "acme");
        assert_eq!(normalize_account("https://acme.lacework.net/"), "acme");
        assert_eq!(normalize_account("  acme.fra.lacework.net "), "acme.fra");
    }

    #[test]
    fn test_build_requires_account() {
        let err = Client::builder("").build().unwrap_err();
        assert_eq!(err.to_string(), "account cannot be empty");

        let err = Client::builder(".lacework.net").build().unwrap_err();
        assert_eq!(err.to_string(), "account cannot be empty");
    }

    #[test]
    fn test_default_url() {
        let client = Client::builder("acme.lacework.net").build().unwrap();
        assert_eq!(client.account(), "acme");
        assert_eq!(client.url().as_str(), "https://acme.lacework.net/");
        assert_eq!(client.api_version(), "v2");
    }

    #[test]
    fn test_resolve_url() {
        let client = Client::builder("acme")
            .url("http://127.0.0.1:8080")
            .build()
            .unwrap();

        assert_eq!(
            client.resolve_url("AgentAccessTokens").unwrap().as_str(),
            "http://127.0.0.1:8080/api/v2/AgentAccessTokens"
        );
        assert_eq!(
            client
                .resolve_url("/api/v2/Alerts?startTime=a&endTime=b")
                .unwrap()
                .as_str(),
            "http://127.0.0.1:8080/api/v2/Alerts?startTime=a&endTime=b"
        );
    }

    #[test]
    fn test_url_with_prefix_keeps_prefix() {
        let client = Client::builder("acme")
            .url("http://proxy.local/lacework")
            .build()
            .unwrap();
        assert_eq!(
            client.resolve_url("Policies").unwrap().as_str(),
            "http://proxy.local/lacework/api/v2/Policies"
        );
    }

    #[test]
    fn test_headers() {
        let client = Client::builder("acme")
            .subaccount("child")
            .org_access(true)
            .header("X-Custom", "1")
            .header("", "ignored")
            .header("X-Empty", "")
            .build()
            .unwrap();

        assert_eq!(client.subaccount(), Some("child"));
        assert!(client.org_access());
        assert_eq!(client.headers.get("Account-Name").unwrap(), "child");
        assert_eq!(client.headers.get("Org-Access").unwrap(), "true");
        assert_eq!(client.headers.get("X-Custom").unwrap(), "1");
        assert!(client.headers.get("X-Empty").is_none());
        assert!(
            client
                .headers
                .get(USER_AGENT)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("lacework-sdk-rust/")
        );
    }

    #[test]
    fn test_invalid_header_name() {
        let err = Client::builder("acme")
            .header("bad header", "x")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("invalid header"));
    }

    #[tokio::test]
    async fn test_valid_auth_with_token() {
        let client = Client::builder("acme").build().unwrap();
        assert!(!client.valid_auth().await);

        let client = Client::builder("acme").token("TOKEN").build().unwrap();
        assert!(client.valid_auth().await);
    }

    #[test]
    fn test_api_keys_debug_hides_secret() {
        let client = Client::builder("acme")
            .api_keys("KEY", "SUPERSECRET")
            .build()
            .unwrap();
        let debug = format!("{:?}", client.api_keys);
        assert!(debug.contains("KEY"));
        assert!(!debug.contains("SUPERSECRET"));
        assert_eq!(client.expiration_time, DEFAULT_TOKEN_EXPIRATION);
    }
}

//! Agent access token service

use reqwest::Method;

use crate::client::Client;
use crate::client::api::escape;
use crate::client::models::{
    AgentAccessToken, AgentAccessTokenProps, AgentAccessTokenRequest, Envelope, Filter,
    SearchFilter,
};
use crate::error::{Error, Result};

const TOKENS_PATH: &str = "AgentAccessTokens";
const TOKENS_SEARCH_PATH: &str = "AgentAccessTokens/search";

/// Manage the tokens agents use to talk to the platform
pub struct AgentAccessTokens<'a> {
    client: &'a Client,
}

impl<'a> AgentAccessTokens<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    /// List every agent access token
    pub async fn list(&self) -> Result<Vec<AgentAccessToken>> {
        let resp: Envelope<Vec<AgentAccessToken>> = self
            .client
            .request_decoder(Method::GET, TOKENS_PATH, None)
            .await?;
        Ok(resp.data)
    }

    /// Fetch a single token
    pub async fn get(&self, token: &str) -> Result<AgentAccessToken> {
        let resp: Envelope<AgentAccessToken> = self
            .client
            .request_decoder(Method::GET, &token_path(token), None)
            .await?;
        Ok(resp.data)
    }

    /// Find tokens by alias
    pub async fn search_alias(&self, alias: &str) -> Result<Vec<AgentAccessToken>> {
        if alias.is_empty() {
            return Err(Error::invalid_input("specify a token alias to search"));
        }

        let filter = SearchFilter::with_filter(Filter::eq("tokenAlias", alias));
        let resp: Envelope<Vec<AgentAccessToken>> = self
            .client
            .request_encoder_decoder(Method::POST, TOKENS_SEARCH_PATH, &filter)
            .await?;
        Ok(resp.data)
    }

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Create an enabled token
    pub async fn create(&self, alias: &str, description: &str) -> Result<AgentAccessToken> {
        if alias.is_empty() {
            return Err(Error::invalid_input("token alias is required"));
        }

        let request = AgentAccessTokenRequest {
            enabled: 1,
            token_alias: alias.to_string(),
            props: Some(AgentAccessTokenProps {
                description: description.to_string(),
                ..Default::default()
            }),
        };
        let resp: Envelope<AgentAccessToken> = self
            .client
            .request_encoder_decoder(Method::POST, TOKENS_PATH, &request)
            .await?;
        Ok(resp.data)
    }

    /// Patch a token
    pub async fn update(
        &self,
        token: &str,
        request: &AgentAccessTokenRequest,
    ) -> Result<AgentAccessToken> {
        let resp: Envelope<AgentAccessToken> = self
            .client
            .request_encoder_decoder(Method::PATCH, &token_path(token), request)
            .await?;
        Ok(resp.data)
    }

    /// Enable or disable a token
    pub async fn update_state(&self, token: &str, enable: bool) -> Result<AgentAccessToken> {
        let request = AgentAccessTokenRequest {
            enabled: i32::from(enable),
            ..Default::default()
        };
        self.update(token, &request).await
    }
}

fn token_path(token: &str) -> String {
    format!("{}/{}", TOKENS_PATH, escape(token))
}

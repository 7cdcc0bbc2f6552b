//! Agent access token display model

use lacework_sdk::client::models::AgentAccessToken;
use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AccessTokenDisplay {
    #[tabled(rename = "TOKEN")]
    pub token: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "STATE")]
    pub state: String,
}

impl From<AgentAccessToken> for AccessTokenDisplay {
    fn from(token: AgentAccessToken) -> Self {
        Self {
            state: token.pretty_state().to_string(),
            token: token.access_token,
            name: token.token_alias,
            description: or_dash(&token.props.description),
        }
    }
}

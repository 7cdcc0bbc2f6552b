//! Agent access token models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token used by agents to report to the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAccessToken {
    /// The token itself, also its identifier
    pub access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub props: AgentAccessTokenProps,

    /// Human friendly name
    #[serde(default)]
    pub token_alias: String,

    /// 1 when enabled, 0 when disabled
    #[serde(rename = "tokenEnabled", default)]
    pub enabled: i32,

    #[serde(default)]
    pub version: String,
}

impl AgentAccessToken {
    pub fn is_enabled(&self) -> bool {
        self.enabled == 1
    }

    /// `Enabled` or `Disabled`
    pub fn pretty_state(&self) -> &'static str {
        if self.is_enabled() {
            "Enabled"
        } else {
            "Disabled"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAccessTokenProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Body of create and update calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAccessTokenRequest {
    #[serde(rename = "tokenEnabled")]
    pub enabled: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token_alias: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<AgentAccessTokenProps>,
}

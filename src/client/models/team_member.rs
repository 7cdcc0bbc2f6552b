//! Team member models

use serde::{Deserialize, Serialize};

use super::string_or_number;

/// User of the account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cust_guid: String,

    #[serde(default)]
    pub props: TeamMemberProps,

    /// 1 when enabled
    #[serde(default)]
    pub user_enabled: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_guid: String,

    /// Email address used to log in
    #[serde(default)]
    pub user_name: String,
}

impl TeamMember {
    /// Enabled member with the given username
    pub fn new(username: impl Into<String>, props: TeamMemberProps) -> Self {
        Self {
            props,
            user_enabled: 1,
            user_name: username.into(),
            ..Default::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.user_enabled == 1
    }
}

/// Team member properties. Timestamps arrive as strings or epoch numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberProps {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub account_admin: bool,

    #[serde(default)]
    pub company: String,

    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub created_time: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub jit_created: bool,

    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub last_login_time: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub last_session_created_time: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub org_admin: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub org_user: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_by: String,

    #[serde(
        rename = "UpdatedTime",
        alias = "updatedTime",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub updated_time: String,
}

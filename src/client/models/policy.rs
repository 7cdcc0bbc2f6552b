//! Policy and policy exception models

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Policy as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default)]
    pub evaluator_id: String,

    pub policy_id: String,

    #[serde(default)]
    pub policy_type: String,

    #[serde(default)]
    pub query_id: String,

    #[serde(default)]
    pub query_text: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub remediation: String,

    #[serde(default)]
    pub severity: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default)]
    pub eval_frequency: String,

    #[serde(default)]
    pub alert_enabled: bool,

    #[serde(default)]
    pub alert_profile: String,

    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub last_update_time: String,

    #[serde(default)]
    pub last_update_user: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Policy {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl crate::severity::HasSeverity for Policy {
    fn severity(&self) -> &str {
        &self.severity
    }
}

/// Body of a policy create call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPolicy {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub evaluator_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub policy_id: String,

    #[serde(default)]
    pub policy_type: String,

    #[serde(default)]
    pub query_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_language: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub remediation: String,

    #[serde(default)]
    pub severity: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub eval_frequency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default)]
    pub alert_enabled: bool,

    #[serde(default)]
    pub alert_profile: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Body of a policy update call; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolicy {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub evaluator_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub policy_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub policy_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remediation: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub severity: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub eval_frequency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alert_profile: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// One entry of a bulk policy update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdatePolicy {
    pub policy_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub severity: String,
}

/// Exception that suppresses a policy for matching resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyException {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub exception_id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub constraints: Vec<PolicyExceptionConstraint>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_update_time: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_update_user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyExceptionConstraint {
    pub field_key: String,

    #[serde(default)]
    pub field_values: Vec<String>,
}

const INVALID_POLICY_BLOB: &str = "policy must be valid JSON or YAML";

/// Parse a policy to create from a JSON or YAML blob.
///
/// YAML documents with a top-level `policies:` list yield their first entry.
pub fn parse_new_policy(blob: &str) -> Result<NewPolicy> {
    parse_policy_blob(blob)
}

/// Parse a policy update from a JSON or YAML blob
pub fn parse_update_policy(blob: &str) -> Result<UpdatePolicy> {
    parse_policy_blob(blob)
}

fn parse_policy_blob<T: DeserializeOwned>(blob: &str) -> Result<T> {
    if let Ok(policy) = serde_json::from_str::<T>(blob) {
        return Ok(policy);
    }

    let invalid = || Error::invalid_input(INVALID_POLICY_BLOB);
    let serde_yaml::Value::Mapping(mut doc) =
        serde_yaml::from_str::<serde_yaml::Value>(blob).map_err(|_| invalid())?
    else {
        return Err(invalid());
    };

    match doc.remove("policies") {
        Some(policies) => serde_yaml::from_value::<Vec<T>>(policies)
            .map_err(|_| invalid())?
            .into_iter()
            .next()
            .ok_or_else(invalid),
        None => serde_yaml::from_value(serde_yaml::Value::Mapping(doc)).map_err(|_| invalid()),
    }
}

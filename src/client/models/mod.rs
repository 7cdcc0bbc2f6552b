//! Lacework API v2 data models
//!
//! Request and response types for each resource, organized by resource type.
//! Most responses wrap their payload in an [`Envelope`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

mod agent_access_token;
mod alert;
mod policy;
mod recommendation;
mod report;
mod report_rule;
mod search;
mod suppression;
mod team_member;
mod vulnerability;

pub use agent_access_token::{AgentAccessToken, AgentAccessTokenProps, AgentAccessTokenRequest};
pub use alert::{
    Alert, AlertComment, AlertCommentMessage, AlertCommentUser, AlertDerivedFields, AlertDetails,
    AlertInfo, AlertSpec, AlertsResponse, VALID_ALERT_STATUSES,
};
pub use policy::{
    BulkUpdatePolicy, NewPolicy, Policy, PolicyException, PolicyExceptionConstraint, UpdatePolicy,
    parse_new_policy, parse_update_policy,
};
pub use recommendation::{Recommendation, RecommendationState};
pub(crate) use recommendation::RecommendationsResponse;
pub use report::{ComplianceViolation, Report, ReportConfig, ReportRecommendation, ReportSummary};
pub use report_rule::{
    NOTIFICATION_TYPES, REPORT_RULE_EVENT_TYPE, ReportRule, ReportRuleConfig, ReportRuleFilter,
    ReportRuleNotificationTypes, ReportRuleSeverities,
};
pub use search::{Filter, SearchFilter, TimeFilter, days_before, validate_range};
pub use suppression::{Suppression, SuppressionConditions};
pub(crate) use suppression::SuppressionsResponse;
pub use team_member::{TeamMember, TeamMemberProps};
pub use vulnerability::{
    VulnerabilityContainer, VulnerabilityContainersResponse, VulnerabilityFeatureKey,
    VulnerabilityFixInfo,
};

/// Standard response envelope: `{ "data": ..., "ok": ..., "message": ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Cloud provider a compliance resource belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
}

impl CloudProvider {
    /// Lowercase name used in API paths
    pub fn as_str(self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Azure => "azure",
            CloudProvider::Gcp => "gcp",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aws" => Ok(CloudProvider::Aws),
            "azure" => Ok(CloudProvider::Azure),
            "gcp" => Ok(CloudProvider::Gcp),
            other => Err(Error::invalid_input(format!(
                "invalid cloud provider '{}', valid: aws, azure, gcp",
                other
            ))),
        }
    }
}

/// Deserialize a field the API sends either as a string or as a number
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Stamp {
        #[serde(default, deserialize_with = "string_or_number")]
        time: String,
    }

    #[test]
    fn test_string_or_number() {
        let s: Stamp = serde_json::from_str(r#"{"time":"2021-01-01"}"#).unwrap();
        assert_eq!(s.time, "2021-01-01");
        let s: Stamp = serde_json::from_str(r#"{"time":1612345678000}"#).unwrap();
        assert_eq!(s.time, "1612345678000");
        let s: Stamp = serde_json::from_str(r#"{"time":null}"#).unwrap();
        assert_eq!(s.time, "");
        let s: Stamp = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(s.time, "");
    }

    #[test]
    fn test_cloud_provider_parse() {
        assert_eq!("AWS".parse::<CloudProvider>().unwrap(), CloudProvider::Aws);
        assert_eq!("gcp".parse::<CloudProvider>().unwrap().to_string(), "gcp");
        let err = "oci".parse::<CloudProvider>().unwrap_err();
        assert!(err.to_string().contains("invalid cloud provider 'oci'"));
    }

    #[test]
    fn test_envelope() {
        let env: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"data":["a"],"ok":true,"message":"SUCCESS"}"#).unwrap();
        assert_eq!(env.data, vec!["a"]);
        assert_eq!(env.ok, Some(true));
    }
}

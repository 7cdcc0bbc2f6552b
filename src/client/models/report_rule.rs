//! Report rule models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::severity::Severity;

/// Event type of every report rule
pub const REPORT_RULE_EVENT_TYPE: &str = "Report";

/// Report notification types understood by the API
pub const NOTIFICATION_TYPES: &[&str] = &[
    "agentEvents",
    "awsCisS3",
    "awsCloudtrailEvents",
    "awsComplianceEvents",
    "hipaa",
    "iso2700",
    "nist800-53Rev4",
    "nist800-171Rev2",
    "pci",
    "soc",
    "awsSocRev2",
    "azureActivityLogEvents",
    "azureCis",
    "azureCis131",
    "azureComplianceEvents",
    "azurePci",
    "azureSoc",
    "gcpAuditTrailEvents",
    "gcpCis",
    "gcpComplianceEvents",
    "gcpHipaa",
    "gcpHipaaRev2",
    "gcpIso27001",
    "gcpCis12",
    "gcpK8s",
    "gcpPci",
    "gcpPciRev2",
    "gcpSoc",
    "gcpSocRev2",
    "openShiftCompliance",
    "openShiftComplianceEvents",
    "platformEvents",
    "trendReport",
];

/// Severities a report rule matches, as numeric levels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportRuleSeverities(pub Vec<u8>);

impl ReportRuleSeverities {
    /// Build from severity names, dropping unknown ones
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self(
            names
                .iter()
                .map(|n| Severity::parse(n.as_ref()))
                .filter(|s| !s.is_unknown())
                .map(Severity::level)
                .collect(),
        )
    }

    /// Display names of the known levels
    pub fn to_names(&self) -> Vec<&'static str> {
        self.0
            .iter()
            .map(|level| Severity::parse(&level.to_string()))
            .filter(|s| !s.is_unknown())
            .map(Severity::as_str)
            .collect()
    }
}

/// Which reports a rule sends, keyed by notification type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportRuleNotificationTypes(pub BTreeMap<String, bool>);

impl ReportRuleNotificationTypes {
    /// Enable the given types, every other known type is disabled
    pub fn new<S: AsRef<str>>(types: &[S]) -> Result<Self> {
        let mut map: BTreeMap<String, bool> = NOTIFICATION_TYPES
            .iter()
            .map(|t| (t.to_string(), false))
            .collect();

        for t in types {
            let t = t.as_ref();
            match map.get_mut(t) {
                None => {
                    return Err(Error::invalid_input(format!(
                        "unknown report notification type: {}",
                        t
                    )));
                }
                Some(true) => {
                    return Err(Error::invalid_input(format!(
                        "notification types contains a duplicate type: {}",
                        t
                    )));
                }
                Some(enabled) => *enabled = true,
            }
        }

        Ok(Self(map))
    }

    /// Names of the enabled types
    pub fn enabled(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Inputs to [`ReportRule::new`]
#[derive(Debug, Clone, Default)]
pub struct ReportRuleConfig {
    pub email_alert_channels: Vec<String>,
    pub description: String,
    pub severities: ReportRuleSeverities,
    pub notification_types: Vec<String>,
    pub resource_groups: Vec<String>,
}

/// Rule deciding which reports go to which email channels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRule {
    #[serde(rename = "mcGuid", default, skip_serializing_if = "String::is_empty")]
    pub guid: String,

    #[serde(rename = "type", default)]
    pub rule_type: String,

    #[serde(rename = "intgGuidList", default)]
    pub email_alert_channels: Vec<String>,

    #[serde(rename = "filters", default)]
    pub filter: ReportRuleFilter,

    #[serde(rename = "reportNotificationTypes", default)]
    pub notification_types: ReportRuleNotificationTypes,
}

impl ReportRule {
    /// New enabled rule
    pub fn new(name: impl Into<String>, config: ReportRuleConfig) -> Result<Self> {
        Ok(Self {
            guid: String::new(),
            rule_type: REPORT_RULE_EVENT_TYPE.to_string(),
            email_alert_channels: config.email_alert_channels,
            filter: ReportRuleFilter {
                name: name.into(),
                enabled: 1,
                description: config.description,
                severity: config.severities,
                resource_groups: config.resource_groups,
                ..Default::default()
            },
            notification_types: ReportRuleNotificationTypes::new(&config.notification_types)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRuleFilter {
    pub name: String,

    #[serde(default)]
    pub enabled: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default)]
    pub severity: ReportRuleSeverities,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_groups: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_or_updated_time: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_or_updated_by: String,
}

impl ReportRuleFilter {
    /// `Enabled` or `Disabled`
    pub fn status(&self) -> &'static str {
        if self.enabled == 1 {
            "Enabled"
        } else {
            "Disabled"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severities() {
        let sevs = ReportRuleSeverities::from_names(&["critical", "bogus", "Low"]);
        assert_eq!(sevs.0, vec![1, 4]);
        assert_eq!(sevs.to_names(), vec!["Critical", "Low"]);
        assert_eq!(ReportRuleSeverities(vec![0, 2, 9]).to_names(), vec!["High"]);
    }

    #[test]
    fn test_notification_types() {
        let types = ReportRuleNotificationTypes::new(&["trendReport", "gcpCis"]).unwrap();
        assert_eq!(types.0.len(), NOTIFICATION_TYPES.len());
        assert_eq!(types.enabled(), vec!["gcpCis", "trendReport"]);
    }

    #[test]
    fn test_notification_types_errors() {
        let err = ReportRuleNotificationTypes::new(&["gcpCis", "gcpCis"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "notification types contains a duplicate type: gcpCis"
        );

        let err = ReportRuleNotificationTypes::new(&["nope"]).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_new_rule_serialization() {
        let rule = ReportRule::new(
            "weekly",
            ReportRuleConfig {
                email_alert_channels: vec!["TECHALLY_000".into()],
                severities: ReportRuleSeverities::from_names(&["high"]),
                notification_types: vec!["platformEvents".into()],
                ..Default::default()
            },
        )
        .unwrap();

        let body = serde_json::to_value(&rule).unwrap();
        assert_eq!(body["type"], "Report");
        assert_eq!(body["intgGuidList"][0], "TECHALLY_000");
        assert_eq!(body["filters"]["name"], "weekly");
        assert_eq!(body["filters"]["enabled"], 1);
        assert_eq!(body["filters"]["severity"], serde_json::json!([2]));
        assert_eq!(body["reportNotificationTypes"]["platformEvents"], true);
        assert_eq!(body["reportNotificationTypes"]["trendReport"], false);
        assert!(body.get("mcGuid").is_none());
        assert_eq!(rule.filter.status(), "Enabled");
    }
}

//! Compliance report models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::CloudProvider;
use crate::client::api::escape;
use crate::error::{Error, Result};
use crate::severity::Severity;

/// Identifies a compliance report to fetch.
///
/// The primary id is the AWS account, Azure tenant or GCP organization; the
/// secondary id is the Azure subscription or GCP project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub cloud: CloudProvider,
    pub primary_id: String,
    pub secondary_id: Option<String>,
    /// Report type, e.g. `AWS_CIS_14` or `GCP_CIS13`
    pub report_type: String,
}

impl ReportConfig {
    pub fn aws(account_id: impl Into<String>, report_type: impl Into<String>) -> Self {
        Self {
            cloud: CloudProvider::Aws,
            primary_id: account_id.into(),
            secondary_id: None,
            report_type: report_type.into(),
        }
    }

    pub fn azure(
        tenant_id: impl Into<String>,
        subscription_id: impl Into<String>,
        report_type: impl Into<String>,
    ) -> Self {
        Self {
            cloud: CloudProvider::Azure,
            primary_id: tenant_id.into(),
            secondary_id: Some(subscription_id.into()),
            report_type: report_type.into(),
        }
    }

    pub fn gcp(
        organization_id: impl Into<String>,
        project_id: impl Into<String>,
        report_type: impl Into<String>,
    ) -> Self {
        Self {
            cloud: CloudProvider::Gcp,
            primary_id: organization_id.into(),
            secondary_id: Some(project_id.into()),
            report_type: report_type.into(),
        }
    }

    /// Check the ids required by the cloud provider are present
    pub fn validate(&self) -> Result<()> {
        let secondary_missing = self.secondary_id.as_deref().is_none_or(str::is_empty);
        let msg = match self.cloud {
            CloudProvider::Aws if self.primary_id.is_empty() => "account id is required",
            CloudProvider::Azure if self.primary_id.is_empty() || secondary_missing => {
                "tenant id and subscription id are required"
            }
            CloudProvider::Gcp if self.primary_id.is_empty() || secondary_missing => {
                "project id and org id are required"
            }
            _ => return Ok(()),
        };
        Err(Error::invalid_input(msg))
    }

    /// Report path for the given output format (`json` or `pdf`)
    pub(crate) fn path(&self, format: &str) -> String {
        let mut path = format!(
            "Reports?primaryQueryId={}&format={}",
            escape(&self.primary_id),
            format
        );
        if let Some(secondary) = self.secondary_id.as_deref().filter(|s| !s.is_empty()) {
            path.push_str(&format!("&secondaryQueryId={}", escape(secondary)));
        }
        if !self.report_type.is_empty() {
            path.push_str(&format!("&reportType={}", escape(&self.report_type)));
        }
        path
    }
}

/// Compliance report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub report_type: String,

    #[serde(default)]
    pub report_title: String,

    #[serde(default)]
    pub recommendations: Vec<ReportRecommendation>,

    #[serde(default)]
    pub summary: Vec<ReportSummary>,

    #[serde(default)]
    pub report_time: String,

    /// Cloud specific identifiers (account, tenant, project, ...)
    #[serde(flatten)]
    pub identifiers: BTreeMap<String, serde_json::Value>,
}

impl Report {
    pub fn recommendation(&self, id: &str) -> Option<&ReportRecommendation> {
        self.recommendations.iter().find(|r| r.rec_id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ReportSummary {
    #[serde(default)]
    pub num_recommendations: u32,
    #[serde(default)]
    pub num_severity_1_non_compliance: u32,
    #[serde(default)]
    pub num_severity_2_non_compliance: u32,
    #[serde(default)]
    pub num_severity_3_non_compliance: u32,
    #[serde(default)]
    pub num_severity_4_non_compliance: u32,
    #[serde(default)]
    pub num_severity_5_non_compliance: u32,
    #[serde(default)]
    pub num_compliant: u32,
    #[serde(default)]
    pub num_not_compliant: u32,
    #[serde(default)]
    pub num_suppressed: u32,
    #[serde(default)]
    pub assessed_resource_count: u32,
    #[serde(default)]
    pub violated_resource_count: u32,
    #[serde(default)]
    pub suppressed_resource_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ReportRecommendation {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub account_alias: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub suppressions: Vec<String>,
    #[serde(default)]
    pub info_link: String,
    #[serde(default)]
    pub assessed_resource_count: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub rec_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub violations: Vec<ComplianceViolation>,
    #[serde(default)]
    pub resource_count: u32,
    #[serde(default)]
    pub severity: u8,
}

impl ReportRecommendation {
    pub fn severity(&self) -> Severity {
        Severity::parse(&self.severity.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceViolation {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub reasons: Vec<String>,
}

//! Alert models

use serde::{Deserialize, Serialize};

use super::string_or_number;
use crate::client::pagination::{Pageable, V2Pagination};
use crate::severity::HasSeverity;

/// Statuses an alert can be in
pub const VALID_ALERT_STATUSES: [&str; 2] = ["Open", "Closed"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertInfo {
    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertSpec {
    #[serde(rename = "alertProfile", default)]
    pub profile: String,

    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertDerivedFields {
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub sub_category: String,

    #[serde(default)]
    pub source: String,
}

/// A platform alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(rename = "alertId")]
    pub id: i64,

    #[serde(rename = "alertName", default)]
    pub name: String,

    #[serde(rename = "alertType", default)]
    pub alert_type: String,

    #[serde(default)]
    pub severity: String,

    #[serde(rename = "alertInfo", default)]
    pub info: AlertInfo,

    #[serde(rename = "alertSpec", default)]
    pub spec: AlertSpec,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub start_time: String,

    #[serde(default)]
    pub end_time: String,

    #[serde(
        rename = "lastUserUpdateTime",
        alias = "lastUserUpdatedTime",
        default,
        deserialize_with = "string_or_number"
    )]
    pub update_time: String,

    #[serde(default)]
    pub policy_id: String,

    #[serde(default)]
    pub derived_fields: AlertDerivedFields,

    #[serde(default)]
    pub reachability: String,
}

impl HasSeverity for Alert {
    fn severity(&self) -> &str {
        &self.severity
    }
}

/// Alert with the extra context returned by the details scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDetails {
    #[serde(flatten)]
    pub alert: Alert,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_source: Option<String>,

    /// Entities involved in the alert, keyed by entity type
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub entity_map: serde_json::Value,
}

/// Timeline entry created by commenting on an alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertComment {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub alert_id: i64,

    #[serde(default)]
    pub entry_type: String,

    #[serde(default)]
    pub entry_author_type: String,

    #[serde(default)]
    pub message: AlertCommentMessage,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AlertCommentUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertCommentMessage {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCommentUser {
    #[serde(default)]
    pub user_guid: String,

    #[serde(default)]
    pub username: String,
}

/// Page of alerts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertsResponse {
    #[serde(default)]
    pub data: Vec<Alert>,

    #[serde(default)]
    pub paging: V2Pagination,
}

impl AlertsResponse {
    /// Newest first
    pub fn sort_by_id(&mut self) {
        self.data.sort_by(|a, b| b.id.cmp(&a.id));
    }

    /// Critical first
    pub fn sort_by_severity(&mut self) {
        crate::severity::sort_by_severity(&mut self.data);
    }
}

impl Pageable for AlertsResponse {
    fn page_info(&self) -> Option<&V2Pagination> {
        Some(&self.paging)
    }

    fn reset_paging(&mut self) {
        self.paging = V2Pagination::default();
    }

    fn append(&mut self, next: Self) {
        self.data.extend(next.data);
    }
}

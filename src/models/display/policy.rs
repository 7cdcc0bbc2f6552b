//! Policy display model

use lacework_sdk::client::models::Policy;
use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PolicyDisplay {
    #[tabled(rename = "POLICY ID")]
    pub id: String,

    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "STATE")]
    pub state: String,

    #[tabled(rename = "ALERTING")]
    pub alerting: String,

    #[tabled(rename = "TYPE")]
    pub policy_type: String,
}

impl From<Policy> for PolicyDisplay {
    fn from(policy: Policy) -> Self {
        Self {
            id: policy.policy_id,
            severity: policy.severity,
            title: truncate_string(&policy.title, 50),
            state: if policy.enabled { "Enabled" } else { "Disabled" }.to_string(),
            alerting: if policy.alert_enabled { "Enabled" } else { "Disabled" }.to_string(),
            policy_type: policy.policy_type,
        }
    }
}

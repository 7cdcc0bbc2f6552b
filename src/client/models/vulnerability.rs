//! Container vulnerability models

use serde::{Deserialize, Serialize};

use crate::client::pagination::{Pageable, V2Pagination};
use crate::severity::HasSeverity;

/// Package a vulnerability was found in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityFeatureKey {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityFixInfo {
    #[serde(default)]
    pub compare_result: i32,

    /// 1 when a fix exists
    #[serde(default)]
    pub fix_available: i32,

    #[serde(default)]
    pub fixed_version: String,
}

/// A vulnerability observed in a container image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityContainer {
    /// Evaluation context (image info, scan batch, ...)
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub eval_ctx: serde_json::Value,

    #[serde(default)]
    pub feature_key: VulnerabilityFeatureKey,

    #[serde(default)]
    pub fix_info: VulnerabilityFixInfo,

    #[serde(default)]
    pub image_id: String,

    #[serde(default)]
    pub severity: String,

    #[serde(default)]
    pub start_time: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub vuln_id: String,
}

impl VulnerabilityContainer {
    pub fn fix_available(&self) -> bool {
        self.fix_info.fix_available == 1
    }
}

impl HasSeverity for VulnerabilityContainer {
    fn severity(&self) -> &str {
        &self.severity
    }
}

/// Page of container vulnerabilities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityContainersResponse {
    #[serde(default)]
    pub data: Vec<VulnerabilityContainer>,

    #[serde(default)]
    pub paging: V2Pagination,
}

impl Pageable for VulnerabilityContainersResponse {
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

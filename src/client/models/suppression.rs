//! Compliance suppression models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Exceptions configured for one recommendation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suppression {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub suppression_conditions: Vec<SuppressionConditions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionConditions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub account_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organization_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub region_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_labels: Vec<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_group_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_tags: Vec<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscription_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tenant_ids: Vec<String>,

    #[serde(rename = "comments", default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SuppressionData {
    #[serde(rename = "recommendationExceptions", default)]
    pub recommendation_suppressions: BTreeMap<String, serde_json::Value>,
}

/// Raw response: suppressions are loosely typed per recommendation
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SuppressionsResponse {
    #[serde(default)]
    pub data: Vec<SuppressionData>,
}

impl SuppressionsResponse {
    pub(crate) fn into_map(self) -> Result<BTreeMap<String, Suppression>> {
        let mut suppressions = BTreeMap::new();
        for data in self.data {
            for (id, raw) in data.recommendation_suppressions {
                suppressions.insert(id, serde_json::from_value(raw)?);
            }
        }
        Ok(suppressions)
    }
}

//! Compliance recommendation state models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether a single recommendation is evaluated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub enabled: bool,
}

/// Patch body: recommendation id to `"enable"` or `"disable"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationState(pub BTreeMap<String, String>);

impl RecommendationState {
    /// Keep each recommendation's own state
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        Self(
            recommendations
                .iter()
                .map(|r| (r.id.clone(), action(r.enabled).to_string()))
                .collect(),
        )
    }

    /// Set every recommendation to the same state
    pub fn with_state(recommendations: &[Recommendation], enabled: bool) -> Self {
        Self(
            recommendations
                .iter()
                .map(|r| (r.id.clone(), action(enabled).to_string()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn action(enabled: bool) -> &'static str {
    if enabled { "enable" } else { "disable" }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RecommendationEnabled {
    #[serde(default)]
    pub enabled: bool,
}

/// Raw response: a list holding one map of id to state
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RecommendationsResponse {
    #[serde(default)]
    pub data: Vec<BTreeMap<String, RecommendationEnabled>>,
}

impl RecommendationsResponse {
    pub(crate) fn into_list(self) -> Vec<Recommendation> {
        self.data
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .map(|(id, state)| Recommendation {
                id,
                enabled: state.enabled,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_list() {
        let resp: RecommendationsResponse = serde_json::from_str(
            r#"{"data":[{"AWS_CIS_1_1":{"enabled":true},"AWS_CIS_1_2":{"enabled":false}}],"ok":true,"message":"SUCCESS"}"#,
        )
        .unwrap();
        let list = resp.into_list();
        assert_eq!(
            list,
            vec![
                Recommendation {
                    id: "AWS_CIS_1_1".into(),
                    enabled: true
                },
                Recommendation {
                    id: "AWS_CIS_1_2".into(),
                    enabled: false
                },
            ]
        );
    }

    #[test]
    fn test_empty_response() {
        let resp: RecommendationsResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(resp.into_list().is_empty());
    }

    #[test]
    fn test_state() {
        let recs = vec![
            Recommendation {
                id: "A".into(),
                enabled: true,
            },
            Recommendation {
                id: "B".into(),
                enabled: false,
            },
        ];

        let state = RecommendationState::from_recommendations(&recs);
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({"A": "enable", "B": "disable"})
        );

        let state = RecommendationState::with_state(&recs, false);
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({"A": "disable", "B": "disable"})
        );
    }
}

//! Compliance recommendation service

use reqwest::Method;

use crate::client::Client;
use crate::client::models::{
    CloudProvider, Recommendation, RecommendationState, RecommendationsResponse,
};
use crate::error::Result;

/// Enable or disable compliance recommendations per cloud provider
pub struct Recommendations<'a> {
    client: &'a Client,
}

impl<'a> Recommendations<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, cloud: CloudProvider) -> Result<Vec<Recommendation>> {
        let resp: RecommendationsResponse = self
            .client
            .request_decoder(Method::GET, &recommendations_path(cloud), None)
            .await?;
        Ok(resp.into_list())
    }

    /// Apply `state` and return the resulting recommendation list
    pub async fn patch(
        &self,
        cloud: CloudProvider,
        state: &RecommendationState,
    ) -> Result<Vec<Recommendation>> {
        let resp: RecommendationsResponse = self
            .client
            .request_encoder_decoder(Method::PATCH, &recommendations_path(cloud), state)
            .await?;
        Ok(resp.into_list())
    }
}

fn recommendations_path(cloud: CloudProvider) -> String {
    format!("recommendations/{}", cloud)
}

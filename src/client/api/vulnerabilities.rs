//! Container vulnerability service

use reqwest::Method;

use crate::client::Client;
use crate::client::models::{SearchFilter, TimeFilter, VulnerabilityContainersResponse};
use crate::error::Result;

const CONTAINERS_SEARCH_PATH: &str = "Vulnerabilities/Containers/search";

/// Search vulnerabilities found in container images
pub struct Vulnerabilities<'a> {
    client: &'a Client,
}

impl<'a> Vulnerabilities<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// First page of results. Filters with an inverted time window are
    /// rejected before any request.
    pub async fn search_containers(
        &self,
        filter: &SearchFilter,
    ) -> Result<VulnerabilityContainersResponse> {
        filter.validate()?;
        self.client
            .request_encoder_decoder(Method::POST, CONTAINERS_SEARCH_PATH, filter)
            .await
    }

    /// Everything assessed over the last seven days, first page only
    pub async fn search_containers_last_week(&self) -> Result<VulnerabilityContainersResponse> {
        let filter = SearchFilter {
            time_filter: Some(TimeFilter::last_days(7)?),
            ..Default::default()
        };
        self.search_containers(&filter).await
    }

    /// Every page of results merged into one response
    pub async fn search_containers_all_pages(
        &self,
        filter: &SearchFilter,
    ) -> Result<VulnerabilityContainersResponse> {
        let first = self.search_containers(filter).await?;
        self.client.all_pages(first).await
    }
}

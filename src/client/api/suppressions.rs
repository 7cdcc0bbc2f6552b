//! Legacy compliance suppression service

use std::collections::BTreeMap;

use reqwest::Method;

use crate::client::Client;
use crate::client::models::{CloudProvider, Suppression, SuppressionsResponse};
use crate::error::Result;

/// Read the suppressions configured on compliance recommendations
pub struct Suppressions<'a> {
    client: &'a Client,
}

impl<'a> Suppressions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Suppressions keyed by recommendation id
    pub async fn list(&self, cloud: CloudProvider) -> Result<BTreeMap<String, Suppression>> {
        let path = format!("suppressions/{}/allExceptions", cloud);
        let resp: SuppressionsResponse =
            self.client.request_decoder(Method::GET, &path, None).await?;
        resp.into_map()
    }
}

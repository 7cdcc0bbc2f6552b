//! Report rule service

use reqwest::Method;

use crate::client::Client;
use crate::client::api::escape;
use crate::client::models::{Envelope, ReportRule};
use crate::error::{Error, Result};

const REPORT_RULES_PATH: &str = "ReportRules";

/// Manage which reports are emailed to which channels
pub struct ReportRules<'a> {
    client: &'a Client,
}

impl<'a> ReportRules<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<ReportRule>> {
        let resp: Envelope<Vec<ReportRule>> = self
            .client
            .request_decoder(Method::GET, REPORT_RULES_PATH, None)
            .await?;
        Ok(resp.data)
    }

    pub async fn get(&self, guid: &str) -> Result<ReportRule> {
        if guid.is_empty() {
            return Err(Error::invalid_input("specify a Guid"));
        }
        let path = format!("{}/{}", REPORT_RULES_PATH, escape(guid));
        let resp: Envelope<ReportRule> =
            self.client.request_decoder(Method::GET, &path, None).await?;
        Ok(resp.data)
    }

    pub async fn create(&self, rule: &ReportRule) -> Result<ReportRule> {
        let resp: Envelope<ReportRule> = self
            .client
            .request_encoder_decoder(Method::POST, REPORT_RULES_PATH, rule)
            .await?;
        Ok(resp.data)
    }

    /// Patch the rule identified by `rule.guid`
    pub async fn update(&self, rule: &ReportRule) -> Result<ReportRule> {
        if rule.guid.is_empty() {
            return Err(Error::invalid_input("specify a Guid"));
        }
        let path = format!("{}/{}", REPORT_RULES_PATH, escape(&rule.guid));

        let mut body = rule.clone();
        body.guid.clear();
        body.filter.created_or_updated_by.clear();
        body.filter.created_or_updated_time.clear();

        let resp: Envelope<ReportRule> = self
            .client
            .request_encoder_decoder(Method::PATCH, &path, &body)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete(&self, guid: &str) -> Result<()> {
        if guid.is_empty() {
            return Err(Error::invalid_input("specify an intgGuid"));
        }
        let path = format!("{}/{}", REPORT_RULES_PATH, escape(guid));
        self.client.request_discard(Method::DELETE, &path, None).await
    }
}

//! Alert service

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde::Serialize;

use crate::client::Client;
use crate::client::models::{
    AlertComment, AlertDetails, AlertsResponse, Envelope, validate_range,
};
use crate::error::{Error, Result};

const ALERTS_PATH: &str = "Alerts";

/// Extra context requested with [`Alerts::get_details`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertScope {
    #[default]
    Details,
    Investigation,
    Events,
    RelatedAlerts,
    Integrations,
    Timeline,
}

impl AlertScope {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertScope::Details => "Details",
            AlertScope::Investigation => "Investigation",
            AlertScope::Events => "Events",
            AlertScope::RelatedAlerts => "RelatedAlerts",
            AlertScope::Integrations => "Integrations",
            AlertScope::Timeline => "Timeline",
        }
    }
}

#[derive(Serialize)]
struct CommentRequest<'c> {
    comment: &'c str,
}

/// Read alerts and comment on them
pub struct Alerts<'a> {
    client: &'a Client,
}

impl<'a> Alerts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    // ========================================================================
    // Listing
    // ========================================================================

    /// First page of alerts for the default window
    pub async fn list(&self) -> Result<AlertsResponse> {
        self.client
            .request_decoder(Method::GET, ALERTS_PATH, None)
            .await
    }

    /// Every alert for the default window, across all pages
    pub async fn list_all(&self) -> Result<AlertsResponse> {
        let first = self.list().await?;
        self.client.all_pages(first).await
    }

    /// First page of alerts between `start` and `end`.
    ///
    /// An inverted range is rejected without contacting the server.
    pub async fn list_by_time(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<AlertsResponse> {
        validate_range(Some(start), Some(end))?;

        let path = format!(
            "{}?startTime={}&endTime={}",
            ALERTS_PATH,
            format_time(start),
            format_time(end)
        );
        self.client.request_decoder(Method::GET, &path, None).await
    }

    /// Every alert between `start` and `end`, across all pages
    pub async fn list_all_by_time(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<AlertsResponse> {
        let first = self.list_by_time(start, end).await?;
        self.client.all_pages(first).await
    }

    // ========================================================================
    // Single Alert
    // ========================================================================

    pub async fn get_details(&self, id: i64, scope: AlertScope) -> Result<AlertDetails> {
        let path = format!("{}/{}?scope={}", ALERTS_PATH, id, scope.as_str());
        let resp: Envelope<AlertDetails> =
            self.client.request_decoder(Method::GET, &path, None).await?;
        Ok(resp.data)
    }

    /// Add a comment to the alert timeline
    pub async fn comment(&self, id: i64, comment: &str) -> Result<AlertComment> {
        if comment.trim().is_empty() {
            return Err(Error::invalid_input("alert comment must be provided"));
        }

        let path = format!("{}/{}/comment", ALERTS_PATH, id);
        let resp: Envelope<AlertComment> = self
            .client
            .request_encoder_decoder(Method::POST, &path, &CommentRequest { comment })
            .await?;
        Ok(resp.data)
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

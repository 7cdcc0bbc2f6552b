//! Compliance report service

use std::path::Path;

use reqwest::Method;
use tokio::io::AsyncWrite;

use crate::client::Client;
use crate::client::response::copy_body;
use crate::client::models::{Envelope, Report, ReportConfig};
use crate::error::Result;

/// Fetch compliance reports as JSON or PDF
pub struct Reports<'a> {
    client: &'a Client,
}

impl<'a> Reports<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, config: &ReportConfig) -> Result<Vec<Report>> {
        config.validate()?;
        let resp: Envelope<Vec<Report>> = self
            .client
            .request_decoder(Method::GET, &config.path("json"), None)
            .await?;
        Ok(resp.data)
    }

    /// Stream the PDF rendition into `writer`, returning the bytes written
    pub async fn download_pdf_to<W>(&self, config: &ReportConfig, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        config.validate()?;
        self.client
            .request_writer(Method::GET, &config.path("pdf"), None, writer)
            .await
    }

    /// Save the PDF rendition to `path`.
    ///
    /// The file is only created once the API answered with success, and is
    /// removed again if the body cannot be read to the end.
    pub async fn download_pdf(&self, config: &ReportConfig, path: &Path) -> Result<u64> {
        config.validate()?;
        let request = self
            .client
            .new_request(Method::GET, &config.path("pdf"), None)
            .await?;
        let response = self.client.do_request(request).await?;

        let mut file = tokio::fs::File::create(path).await?;
        match copy_body(response, &mut file).await {
            Ok(written) => {
                log::debug!("saved report pdf to {} ({} bytes)", path.display(), written);
                Ok(written)
            }
            Err(e) => {
                drop(file);
                if let Err(rm) = tokio::fs::remove_file(path).await {
                    log::debug!("unable to remove {}: {}", path.display(), rm);
                }
                Err(e)
            }
        }
    }
}

//! Response checking and decoding

use reqwest::{Method, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use super::Client;
use crate::error::{ApiError, ErrorResponse, Result};

/// Turn a non-2xx response into an [`ErrorResponse`]
pub(crate) async fn check_response(
    method: &Method,
    url: &Url,
    response: Response,
) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await?;
    let err = ErrorResponse::new(method.as_str(), url.as_str(), status, &body);
    log::debug!("api error {}", err);
    Err(ApiError::Response(err).into())
}

impl Client {
    /// Execute a request and check its status
    pub async fn do_request(&self, request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        let response = self.execute(request).await?;
        check_response(&method, &url, response).await
    }

    /// Decode a successful response body as JSON
    pub(crate) async fn decode_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Response> {
        let request = self.new_request(method, path, body).await?;
        self.do_request(request).await
    }

    /// Send a request and decode the JSON response into `T`
    pub async fn request_decoder<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let response = self.send(method, path, body).await?;
        self.decode_json(response).await
    }

    /// Encode `data` as the JSON body, send, and decode the response into `T`
    pub async fn request_encoder_decoder<D, T>(
        &self,
        method: Method,
        path: &str,
        data: &D,
    ) -> Result<T>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(data)?;
        self.request_decoder(method, path, Some(body)).await
    }

    /// Send a request and ignore the response body
    pub async fn request_discard(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<()> {
        self.send(method, path, body).await?;
        Ok(())
    }

    /// Send a request and copy the raw response body into `writer`.
    ///
    /// Returns the number of bytes written.
    pub async fn request_writer<W>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        writer: &mut W,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let response = self.send(method, path, body).await?;
        copy_body(response, writer).await
    }
}

/// Stream a response body into `writer`, returning the bytes written
pub(crate) async fn copy_body<W>(mut response: Response, writer: &mut W) -> Result<u64>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await? {
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    writer.flush().await?;
    Ok(written)
}

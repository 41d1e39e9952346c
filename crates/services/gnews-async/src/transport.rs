//! Injectable HTTP transport: one GET with query parameters, returning status and body.

use bytes::Bytes;
use futures::future::BoxFuture;
use reqwest::StatusCode;

use crate::error::GNewsError;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw response body
    pub body: Bytes,
}

impl RawResponse {
    /// Creates a response from a status and body
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single HTTP GET with query parameters
pub trait Transport: Send + Sync {
    /// Issues the request and returns the status and body.
    ///
    /// Implementations must report network-level failures as
    /// [`GNewsError::Transport`]; HTTP error statuses are not failures here.
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a [(String, String)],
    ) -> BoxFuture<'a, Result<RawResponse, GNewsError>>;
}

/// [`Transport`] backed by a `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing `reqwest::Client`
    #[must_use]
    pub const fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a [(String, String)],
    ) -> BoxFuture<'a, Result<RawResponse, GNewsError>> {
        Box::pin(async move {
            let response = self.http.get(url).query(query).send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok(RawResponse { status, body })
        })
    }
}

//! Remote script fetching
//!
//! Retrieves url-sourced PAC script bodies. Fetch failures are
//! distinguishable errors and must never overwrite a record's previously
//! stored content; callers fetch first and only then touch the store.

use http::{Request, StatusCode};
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::{Connect, HttpConnector};
use hyper_util::rt::TokioExecutor;
use thiserror::Error;

use bytes::Bytes;

use crate::Url;
use crate::error::BoxError;

/// Failures while fetching a url-sourced script body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid script URL: {0}")]
    InvalidUrl(String),
    #[error("request failed")]
    Request(#[source] BoxError),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("response body was empty")]
    EmptyBody,
}

/// Boundary for retrieving remote PAC script bodies.
#[allow(async_fn_in_trait)]
pub trait ScriptFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// HTTP fetcher over the hyper client stack.
///
/// Generic over the connector so hosts can bring a TLS-capable one; the
/// default handles plain HTTP.
#[derive(Clone)]
pub struct HttpFetcher<C = HttpConnector> {
    client: Client<C, Empty<Bytes>>,
}

impl<C> std::fmt::Debug for HttpFetcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher").finish_non_exhaustive()
    }
}

impl HttpFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> HttpFetcher<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Build over a custom connector (e.g. a TLS connector).
    #[must_use]
    pub fn with_connector(connector: C) -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build(connector),
        }
    }
}

impl<C> ScriptFetcher for HttpFetcher<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let uri: http::Uri = url
            .as_str()
            .parse()
            .map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        tracing::debug!(target: "paxy::scripts", url = %url, "fetching remote PAC script");

        let request = Request::builder()
            .uri(uri)
            .body(Empty::new())
            .map_err(|error| FetchError::Request(Box::new(error)))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|error| FetchError::Request(Box::new(error)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let collected = response
            .into_body()
            .collect()
            .await
            .map_err(|error| FetchError::Request(Box::new(error)))?;

        let body = String::from_utf8_lossy(&collected.to_bytes())
            .trim()
            .to_owned();
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(body)
    }
}

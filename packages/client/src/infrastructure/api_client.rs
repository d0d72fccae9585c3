//! Reqwest-backed API client.
//!
//! This client owns transport details only: URL resolution against the
//! configured base, status checking, error-envelope extraction and JSON
//! decoding. It has no retry and no timeout; failures reach the caller as-is.

use reqwest::{
    Client, RequestBuilder, Response,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use url::Url;

use super::endpoint::Endpoint;
use crate::{
    config::{ApiConfig, ConfigError, ExecutionContext},
    error::{RawResponse, ServiceError, status_text},
    schema::ErrorResponse,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// HTTP client bound to one base URL.
///
/// Build it once and clone it; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client for an already resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
        })
    }

    /// Resolve the base URL for `context` from the environment and build a client.
    pub fn from_env(context: ExecutionContext) -> Result<Self, ClientInitError> {
        let config = ApiConfig::from_env(context)?;
        Ok(Self::new(config)?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of `endpoint`.
    ///
    /// The base URL's own path is kept, so `https://host/team-7` and
    /// `/activities/1` give `https://host/team-7/activities/1`.
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{}", endpoint.path()))
    }

    /// `GET` `endpoint` and decode the JSON body.
    pub async fn get_json<T>(
        &self,
        endpoint: &Endpoint,
        operation: &'static str,
    ) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let url = self.resolve(endpoint, operation)?;
        let response = send(self.client.get(url), operation).await?;
        decode(response, operation).await
    }

    /// `GET` `endpoint` with `query` serialized into the query string.
    pub async fn get_json_with_query<T, Q>(
        &self,
        endpoint: &Endpoint,
        query: &Q,
        operation: &'static str,
    ) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.resolve(endpoint, operation)?;
        let response = send(self.client.get(url).query(query), operation).await?;
        decode(response, operation).await
    }

    /// `DELETE` `endpoint` and hand back the raw response.
    pub async fn delete(
        &self,
        endpoint: &Endpoint,
        operation: &'static str,
    ) -> Result<RawResponse, ServiceError> {
        let url = self.resolve(endpoint, operation)?;
        let response = send(self.client.delete(url), operation).await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }

    fn resolve(&self, endpoint: &Endpoint, operation: &'static str) -> Result<Url, ServiceError> {
        self.url(endpoint)
            .map_err(|source| ServiceError::InvalidUrl { operation, source })
    }
}

/// Send the request and turn a non-success status into `ServiceError::Status`.
async fn send(request: RequestBuilder, operation: &'static str) -> Result<Response, ServiceError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // A body without a usable message only loses the backend message
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| ErrorResponse::message_from_body(&body));

    tracing::warn!(
        "Backend rejected '{}' with {}{}",
        operation,
        status,
        message
            .as_deref()
            .map(|m| format!(": {m}"))
            .unwrap_or_default()
    );

    Err(ServiceError::Status {
        operation,
        status,
        status_text: status_text(status),
        message,
    })
}

async fn decode<T>(response: Response, operation: &'static str) -> Result<T, ServiceError>
where
    T: DeserializeOwned,
{
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| ServiceError::Decode { operation, source })
}

//! One-shot GET + JSON decode against a configured API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::config::{ApiConfig, Envelope};
use crate::error::{FetchError, ResourceError};
use crate::request::ResourceRequest;

const USER_AGENT: &str = concat!("realworld/", env!("CARGO_PKG_VERSION"));

/// Stateless fetcher bound to one [`ApiConfig`].
///
/// Clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RemoteResourceFetcher {
    client: Arc<Client>,
    config: ApiConfig,
}

impl RemoteResourceFetcher {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    pub fn with_client(config: ApiConfig, client: Arc<Client>) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn request_uri(&self, request: &ResourceRequest) -> String {
        request.uri(&self.config)
    }

    /// GET `uri` and return the decoded payload.
    ///
    /// The payload is the `data` field or the whole body depending on the
    /// configured [`Envelope`].
    pub async fn fetch(&self, uri: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Request returned status {}", status);
            return Err(FetchError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;
        let value: Value = serde_json::from_slice(&body)?;

        self.unwrap_envelope(value)
    }

    #[instrument(skip(self, request), fields(path = %request.resource_path), level = "debug")]
    pub async fn fetch_resource(&self, request: &ResourceRequest) -> Result<Value, FetchError> {
        self.fetch(&self.request_uri(request)).await
    }

    /// Fetch and narrow the payload to `T`.
    pub async fn fetch_as<T: DeserializeOwned>(
        &self,
        request: &ResourceRequest,
    ) -> Result<T, FetchError> {
        let value = self.fetch_resource(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch a paged or listed collection, failing with `message`.
    #[instrument(skip(self, request), fields(path = %request.resource_path, page = ?request.page), level = "info")]
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        request: &ResourceRequest,
        message: &'static str,
    ) -> Result<T, ResourceError> {
        self.fetch_as(request).await.map_err(|e| {
            tracing::warn!("Collection fetch failed: {}", e);
            ResourceError::new(message, e)
        })
    }

    /// Fetch a single record, failing with `message`.
    #[instrument(skip(self, request), fields(path = %request.resource_path), level = "info")]
    pub async fn fetch_record<T: DeserializeOwned>(
        &self,
        request: &ResourceRequest,
        message: &'static str,
    ) -> Result<T, ResourceError> {
        self.fetch_as(request).await.map_err(|e| {
            tracing::warn!("Record fetch failed: {}", e);
            ResourceError::new(message, e)
        })
    }

    fn unwrap_envelope(&self, value: Value) -> Result<Value, FetchError> {
        match self.config.envelope() {
            Envelope::Body => Ok(value),
            Envelope::Data => match value {
                Value::Object(mut body) => body.remove("data").ok_or(FetchError::MissingField("data")),
                _ => Err(FetchError::MissingField("data")),
            },
        }
    }
}

//! Immutable endpoint configuration handed to a fetcher at construction.

use std::fmt;

/// Items per page used by paged collections unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Where the payload lives in a successful response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Envelope {
    /// Payload is wrapped in a top-level `data` field (Marvel style).
    Data,
    /// Payload is the whole body.
    #[default]
    Body,
}

/// Base endpoint, API key and paging constants for one remote API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    api_key_param: String,
    api_key: String,
    page_size: u32,
    envelope: Envelope,
}

impl ApiConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key_param: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key_param: api_key_param.into(),
            api_key: api_key.into(),
            page_size: DEFAULT_PAGE_SIZE,
            envelope: Envelope::default(),
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key_param(&self) -> &str {
        &self.api_key_param
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    /// The `param=key` signature placed first in every query string, key percent-encoded.
    pub fn api_sign(&self) -> String {
        crate::request::query_pair(&self.api_key_param, &self.api_key)
    }
}

// The key never appears in logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key_param", &self.api_key_param)
            .field("api_key", &"<redacted>")
            .field("page_size", &self.page_size)
            .field("envelope", &self.envelope)
            .finish()
    }
}

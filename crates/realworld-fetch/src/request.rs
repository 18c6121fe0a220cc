//! Request URI construction.
//!
//! A URI is always assembled as `base/resource?param=KEY<query><pagination>`.
//! Query fragments are appended verbatim; values that come from user input
//! should be built with [`query_pair`], which percent-encodes them.

use crate::config::ApiConfig;

/// Prefix an optional `key=value` fragment with the field separator.
pub fn build_query(option: Option<&str>) -> String {
    match option {
        Some(fragment) if !fragment.is_empty() => format!("&{}", fragment),
        _ => String::new(),
    }
}

/// Build a `key=value` fragment with the value percent-encoded.
pub fn query_pair(key: &str, value: &str) -> String {
    format!("{}={}", key, urlencoding::encode(value))
}

/// Translate a page number into an `&offset=` fragment.
///
/// Page `0` is the first page, which the APIs serve without an offset.
pub fn build_pagination(page: Option<u32>, page_size: u32) -> String {
    match page {
        Some(page) if page > 0 => {
            let offset = u64::from(page) * u64::from(page_size);
            format!("&offset={}", offset)
        }
        _ => String::new(),
    }
}

/// Join base endpoint, resource path, key signature and the prebuilt fragments.
pub fn build_request_uri(
    config: &ApiConfig,
    resource_path: &str,
    query: &str,
    pagination: &str,
) -> String {
    let base = config.base_url().trim_end_matches('/');
    let path = resource_path.trim_start_matches('/');
    format!("{}/{}?{}{}{}", base, path, config.api_sign(), query, pagination)
}

/// One remote call, described before its URI is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub resource_path: String,
    pub query: Option<String>,
    pub page: Option<u32>,
}

impl ResourceRequest {
    pub fn new(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            query: None,
            page: None,
        }
    }

    /// Append a raw `key=value` fragment. Repeated calls join with `&`.
    #[must_use]
    pub fn with_query(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        if fragment.is_empty() {
            return self;
        }
        self.query = Some(match self.query.take() {
            Some(existing) => format!("{}&{}", existing, fragment),
            None => fragment,
        });
        self
    }

    /// Append an escaped `key=value` pair.
    #[must_use]
    pub fn with_param(self, key: &str, value: &str) -> Self {
        self.with_query(query_pair(key, value))
    }

    #[must_use]
    pub fn with_page(mut self, page: Option<u32>) -> Self {
        self.page = page;
        self
    }

    pub fn uri(&self, config: &ApiConfig) -> String {
        let query = build_query(self.query.as_deref());
        let pagination = build_pagination(self.page, config.page_size());
        build_request_uri(config, &self.resource_path, &query, &pagination)
    }
}

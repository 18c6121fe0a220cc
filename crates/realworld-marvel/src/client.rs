//! Marvel API client.

use realworld_fetch::{
    ApiConfig, Envelope, FetchError, RemoteResourceFetcher, ResourceError, ResourceRequest,
};
use serde_json::Value;

use crate::types::{Characters, Comics, Path};

pub const MARVEL_API: &str = "https://gateway.marvel.com/v1/public";
const API_KEY_PARAM: &str = "apikey";

const READ_COMICS_FAILED: &str = "An error occurred while trying to read comics";
const SEARCH_CHARACTERS_FAILED: &str = "An error occurred while trying to search characters";

/// Endpoint configuration for the Marvel API. Payloads live under `data`.
pub fn api_config(base_url: &str, api_key: &str) -> ApiConfig {
    ApiConfig::new(base_url, API_KEY_PARAM, api_key).with_envelope(Envelope::Data)
}

/// Optional query fragment and page for a catalog request
#[derive(Debug, Clone, Default)]
pub struct ApiOptions {
    pub query: Option<String>,
    pub page: Option<u32>,
}

impl ApiOptions {
    fn request(&self, path: Path) -> ResourceRequest {
        let request = ResourceRequest::new(path.as_str()).with_page(self.page);
        match &self.query {
            Some(query) => request.with_query(query.clone()),
            None => request,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarvelClient {
    fetcher: RemoteResourceFetcher,
}

impl MarvelClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: RemoteResourceFetcher::new(config)?,
        })
    }

    /// Client against the public gateway
    pub fn with_key(api_key: &str) -> Result<Self, FetchError> {
        Self::new(api_config(MARVEL_API, api_key))
    }

    /// Untyped access to any catalog path.
    pub async fn fetch_path(&self, path: Path, options: &ApiOptions) -> Result<Value, FetchError> {
        self.fetcher.fetch_resource(&options.request(path)).await
    }

    /// One page of the comics catalog. Page 0 is the first page.
    pub async fn comics(&self, page: u32) -> Result<Comics, ResourceError> {
        let options = ApiOptions {
            query: None,
            page: Some(page),
        };
        let comics: Comics = self
            .fetcher
            .fetch_collection(&options.request(Path::Comics), READ_COMICS_FAILED)
            .await?;

        tracing::info!("Fetched {} of {} comics", comics.count, comics.total);
        Ok(comics)
    }

    /// Characters whose name starts with `name`.
    pub async fn search_characters(
        &self,
        name: &str,
        page: Option<u32>,
    ) -> Result<Characters, ResourceError> {
        let request = ResourceRequest::new(Path::Characters.as_str())
            .with_param("nameStartsWith", name)
            .with_page(page);

        let characters: Characters = self
            .fetcher
            .fetch_collection(&request, SEARCH_CHARACTERS_FAILED)
            .await?;

        tracing::info!("Found {} characters matching {:?}", characters.total, name);
        Ok(characters)
    }
}

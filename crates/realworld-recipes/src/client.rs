//! Spoonacular API client.

use realworld_fetch::{
    ApiConfig, Envelope, FetchError, RemoteResourceFetcher, ResourceError, ResourceRequest,
};

use crate::types::{Recipe, SearchRecipe};

pub const RECIPE_API: &str = "https://api.spoonacular.com";
const API_KEY_PARAM: &str = "apiKey";

const SEARCH_FAILED: &str = "An error occurred while trying to search recipes";
const INFORMATION_FAILED: &str = "An error occurred while trying to retrieve recipe information";

/// Endpoint configuration for Spoonacular. Payloads are the whole body.
pub fn api_config(base_url: &str, api_key: &str) -> ApiConfig {
    ApiConfig::new(base_url, API_KEY_PARAM, api_key).with_envelope(Envelope::Body)
}

#[derive(Debug, Clone)]
pub struct RecipeClient {
    fetcher: RemoteResourceFetcher,
}

impl RecipeClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: RemoteResourceFetcher::new(config)?,
        })
    }

    pub fn with_key(api_key: &str) -> Result<Self, FetchError> {
        Self::new(api_config(RECIPE_API, api_key))
    }

    pub async fn search(&self, query: &str) -> Result<SearchRecipe, ResourceError> {
        let request = ResourceRequest::new("recipes/search").with_param("query", query);
        let found: SearchRecipe = self.fetcher.fetch_collection(&request, SEARCH_FAILED).await?;

        tracing::info!("Found {} recipes for {:?}", found.total_results, query);
        Ok(found)
    }

    /// Full recipe information. `id` is embedded in the path, so it is escaped.
    pub async fn information(&self, id: &str) -> Result<Recipe, ResourceError> {
        let request = ResourceRequest::new(format!(
            "recipes/{}/information",
            urlencoding::encode(id)
        ));
        self.fetcher.fetch_record(&request, INFORMATION_FAILED).await
    }
}

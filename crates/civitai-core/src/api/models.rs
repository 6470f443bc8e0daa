//! Model listing and lookup.

use super::{page_limit, Listing, Lookup};
use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::{BaseModel, CommercialUse, Model, ModelCategory, ModelSort, ModelType, Period};
use crate::normalize;
use crate::pagination::{paginate, PageStream};
use crate::query::QueryParams;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Filters for the model listing. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelFilter {
    /// Results per page, clamped to `1..=ApiConfig::MAX_MODEL_PAGE_SIZE`.
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub query: Option<String>,
    pub tag: Option<String>,
    pub username: Option<String>,
    pub types: Vec<ModelType>,
    pub sort: Option<ModelSort>,
    pub period: Option<Period>,
    pub rating: Option<u32>,
    /// Only the authenticated user's favorites. Requires an API key.
    pub favorites: Option<bool>,
    /// Only the authenticated user's hidden models. Requires an API key.
    pub hidden: Option<bool>,
    pub primary_file_only: Option<bool>,
    pub allow_no_credit: Option<bool>,
    pub allow_derivatives: Option<bool>,
    pub allow_different_licenses: Option<bool>,
    pub base_models: Vec<BaseModel>,
    pub categories: Vec<ModelCategory>,
    pub allow_commercial_use: Vec<CommercialUse>,
    pub nsfw: Option<bool>,
}

impl ModelFilter {
    /// Wire parameters for this filter.
    ///
    /// List filters repeat their key, except `allowCommercialUse`, which the
    /// API only understands in indexed form.
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("limit", page_limit(self.limit, ApiConfig::MAX_MODEL_PAGE_SIZE))
            .push_opt("page", self.page)
            .push_opt("query", self.query.as_deref())
            .push_opt("tag", self.tag.as_deref())
            .push_opt("username", self.username.as_deref())
            .push_all("modelType", &self.types)
            .push_opt("sortBy", self.sort)
            .push_opt("period", self.period)
            .push_opt("rating", self.rating)
            .push_opt("favorites", self.favorites)
            .push_opt("hidden", self.hidden)
            .push_opt("primaryFileOnly", self.primary_file_only)
            .push_opt("allowNoCredit", self.allow_no_credit)
            .push_opt("allowDerivatives", self.allow_derivatives)
            .push_opt("allowDifferentLicenses", self.allow_different_licenses)
            .push_all("baseModel", &self.base_models)
            .push_all("category", &self.categories)
            .push_indexed("allowCommercialUse", &self.allow_commercial_use)
            .push_opt("nsfw", self.nsfw);
        params
    }
}

/// The `/models` endpoints.
#[derive(Debug, Clone)]
pub struct ModelsApi {
    client: Arc<ApiClient>,
}

impl ModelsApi {
    /// Create an endpoint with its own transport client.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self::with_client(Arc::new(ApiClient::new(api_key)?)))
    }

    pub fn with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Stream model pages matching `filter`, following the server's
    /// next-page links. No request is made until the stream is polled.
    pub fn pages(&self, filter: &ModelFilter) -> PageStream<Model> {
        paginate(
            Arc::clone(&self.client),
            "models",
            filter.to_query(),
            normalize::to_model,
        )
    }

    /// Fetch one model with all of its versions.
    pub async fn get_model(&self, model_id: u64) -> Result<Model> {
        debug!("Fetching model {}", model_id);
        let response = self
            .client
            .get(&format!("models/{}", model_id), &QueryParams::new())
            .await?;
        normalize::to_model(&response)
    }
}

#[async_trait]
impl Listing for ModelsApi {
    type Filter = ModelFilter;
    type Output = PageStream<Model>;

    async fn list(&self, filter: &ModelFilter) -> Result<PageStream<Model>> {
        Ok(self.pages(filter))
    }
}

#[async_trait]
impl Lookup for ModelsApi {
    type Key = u64;
    type Record = Model;

    async fn get(&self, model_id: u64) -> Result<Model> {
        self.get_model(model_id).await
    }
}

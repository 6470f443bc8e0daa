//! Image listing.

use super::{fetch_page, page_limit, Listing};
use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::{Image, ImageSort, Page, Period};
use crate::normalize;
use crate::query::QueryParams;
use async_trait::async_trait;
use std::sync::Arc;

/// Filters for the image listing. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFilter {
    /// Results per page, clamped to `1..=ApiConfig::MAX_PAGE_SIZE`.
    pub limit: Option<u32>,
    pub post_id: Option<u64>,
    /// Images from a model's gallery.
    pub model_id: Option<u64>,
    pub model_version_id: Option<u64>,
    pub username: Option<String>,
    pub nsfw: Option<bool>,
    pub sort: Option<ImageSort>,
    pub period: Option<Period>,
    pub page: Option<u32>,
}

impl ImageFilter {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("limit", page_limit(self.limit, ApiConfig::MAX_PAGE_SIZE))
            .push_opt("postId", self.post_id)
            .push_opt("modelId", self.model_id)
            .push_opt("modelVersionId", self.model_version_id)
            .push_opt("username", self.username.as_deref())
            .push_opt("nsfw", self.nsfw)
            .push_opt("sort", self.sort)
            .push_opt("period", self.period)
            .push_opt("page", self.page);
        params
    }
}

/// The `/images` endpoint.
#[derive(Debug, Clone)]
pub struct ImagesApi {
    client: Arc<ApiClient>,
}

impl ImagesApi {
    /// Create an endpoint with its own transport client.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self::with_client(Arc::new(ApiClient::new(api_key)?)))
    }

    pub fn with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// One page of images together with the response metadata.
    pub async fn page(&self, filter: &ImageFilter) -> Result<Page<Image>> {
        fetch_page(&self.client, "images", &filter.to_query(), normalize::to_image).await
    }
}

#[async_trait]
impl Listing for ImagesApi {
    type Filter = ImageFilter;
    type Output = Vec<Image>;

    async fn list(&self, filter: &ImageFilter) -> Result<Vec<Image>> {
        Ok(self.page(filter).await?.items)
    }
}

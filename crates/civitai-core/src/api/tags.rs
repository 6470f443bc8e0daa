//! Tag listing.

use super::{fetch_page, Listing, SearchFilter};
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Page, Tag};
use crate::normalize;
use async_trait::async_trait;
use std::sync::Arc;

/// The `/tags` endpoint.
#[derive(Debug, Clone)]
pub struct TagsApi {
    client: Arc<ApiClient>,
}

impl TagsApi {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self::with_client(Arc::new(ApiClient::new(api_key)?)))
    }

    pub fn with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn page(&self, filter: &SearchFilter) -> Result<Page<Tag>> {
        fetch_page(&self.client, "tags", &filter.to_query(), normalize::to_tag).await
    }
}

#[async_trait]
impl Listing for TagsApi {
    type Filter = SearchFilter;
    type Output = Vec<Tag>;

    async fn list(&self, filter: &SearchFilter) -> Result<Vec<Tag>> {
        Ok(self.page(filter).await?.items)
    }
}

//! Creator listing.

use super::{fetch_page, Listing, SearchFilter};
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Creator, Page};
use crate::normalize;
use async_trait::async_trait;
use std::sync::Arc;

/// The `/creators` endpoint.
#[derive(Debug, Clone)]
pub struct CreatorsApi {
    client: Arc<ApiClient>,
}

impl CreatorsApi {
    /// Create an endpoint with its own transport client.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self::with_client(Arc::new(ApiClient::new(api_key)?)))
    }

    pub fn with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// One page of creators together with the response metadata.
    pub async fn page(&self, filter: &SearchFilter) -> Result<Page<Creator>> {
        fetch_page(&self.client, "creators", &filter.to_query(), normalize::to_creator).await
    }
}

#[async_trait]
impl Listing for CreatorsApi {
    type Filter = SearchFilter;
    type Output = Vec<Creator>;

    async fn list(&self, filter: &SearchFilter) -> Result<Vec<Creator>> {
        Ok(self.page(filter).await?.items)
    }
}

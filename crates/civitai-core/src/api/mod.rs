//! Resource endpoints of the Civitai API.
//!
//! Each endpoint wraps a shared [`ApiClient`] and implements the capabilities
//! it supports: [`Listing`] for filtered lists, [`Lookup`] for fetching one
//! record by key.
//!
//! # Module Organization
//!
//! - [`models`] - Model listing (paginated) and lookup
//! - [`model_versions`] - Version lookup by id or file hash
//! - [`images`] - Image listing
//! - [`creators`] - Creator listing
//! - [`tags`] - Tag listing

mod creators;
mod images;
mod model_versions;
mod models;
mod tags;

pub use creators::CreatorsApi;
pub use images::{ImageFilter, ImagesApi};
pub use model_versions::ModelVersionsApi;
pub use models::{ModelFilter, ModelsApi};
pub use tags::TagsApi;

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::Page;
use crate::normalize;
use crate::pagination::Normalizer;
use crate::query::QueryParams;
use async_trait::async_trait;

/// Endpoints that return a filtered list.
#[async_trait]
pub trait Listing {
    type Filter: Sync;
    type Output: Send;

    async fn list(&self, filter: &Self::Filter) -> Result<Self::Output>;
}

/// Endpoints that return a single record by key.
#[async_trait]
pub trait Lookup {
    type Key: Send;
    type Record: Send;

    /// Fetch one record. An unknown key fails with
    /// [`CivitaiError::NotFound`](crate::CivitaiError::NotFound).
    async fn get(&self, key: Self::Key) -> Result<Self::Record>;
}

/// Text search filter shared by the creator and tag listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Results per page, clamped to `1..=ApiConfig::MAX_PAGE_SIZE`.
    pub limit: Option<u32>,
    pub page: Option<u32>,
    /// Matches usernames for creators, names for tags.
    pub query: Option<String>,
}

impl SearchFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("limit", page_limit(self.limit, ApiConfig::MAX_PAGE_SIZE))
            .push_opt("page", self.page)
            .push_opt("query", self.query.as_deref());
        params
    }
}

/// Clamp a requested page size into `1..=max`.
fn page_limit(limit: Option<u32>, max: u32) -> Option<u32> {
    limit.map(|limit| limit.clamp(1, max))
}

/// Fetch a single list page without following `nextPage`.
async fn fetch_page<T>(
    client: &ApiClient,
    endpoint: &str,
    params: &QueryParams,
    normalize_item: Normalizer<T>,
) -> Result<Page<T>> {
    let response = client.get(endpoint, params).await?;
    normalize::to_page(&response, normalize_item)
}

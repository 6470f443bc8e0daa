//! Civitai Client - Typed async access to the public Civitai REST API.
//!
//! The crate covers the read-only resources of `https://civitai.com/api/v1`:
//! models, model versions, images, creators and tags. Responses are
//! normalized into strict domain records; the model listing is exposed as a
//! lazy stream of pages that follows the server's next-page links.
//!
//! # Example
//!
//! ```rust,ignore
//! use civitai_client::{Civitai, Lookup, ModelFilter, ModelSort, ModelType};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> civitai_client::Result<()> {
//!     let civitai = Civitai::new(None)?;
//!
//!     let filter = ModelFilter {
//!         limit: Some(20),
//!         types: vec![ModelType::Lora],
//!         sort: Some(ModelSort::MostDownloaded),
//!         ..ModelFilter::default()
//!     };
//!     let mut pages = civitai.models().pages(&filter);
//!     if let Some(page) = pages.try_next().await? {
//!         for model in &page.items {
//!             println!("{} ({})", model.name, model.id);
//!         }
//!     }
//!
//!     let version = civitai.model_versions().get(128713).await?;
//!     println!("{} on {}", version.name, version.base_model);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod pagination;
pub mod query;

pub use api::{
    CreatorsApi, ImageFilter, ImagesApi, Listing, Lookup, ModelFilter, ModelVersionsApi,
    ModelsApi, SearchFilter, TagsApi,
};
pub use client::ApiClient;
pub use config::{ApiConfig, ClientConfig};
pub use error::{CivitaiError, Result};
pub use models::*;
pub use pagination::{collect_items, PageStream};
pub use query::QueryParams;

pub use reqwest::Method;

use std::sync::Arc;

/// Entry point bundling every resource endpoint over one shared transport.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Civitai {
    client: Arc<ApiClient>,
    creators: CreatorsApi,
    images: ImagesApi,
    models: ModelsApi,
    model_versions: ModelVersionsApi,
    tags: TagsApi,
}

impl Civitai {
    /// Connect to the public API. Without a key only public content is visible.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_client(Arc::new(ApiClient::with_config(config)?)))
    }

    /// Build every endpoint on top of an existing client.
    pub fn with_client(client: Arc<ApiClient>) -> Self {
        Self {
            creators: CreatorsApi::with_client(Arc::clone(&client)),
            images: ImagesApi::with_client(Arc::clone(&client)),
            models: ModelsApi::with_client(Arc::clone(&client)),
            model_versions: ModelVersionsApi::with_client(Arc::clone(&client)),
            tags: TagsApi::with_client(Arc::clone(&client)),
            client,
        }
    }

    /// The transport shared by all endpoints, for raw requests.
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn creators(&self) -> &CreatorsApi {
        &self.creators
    }

    pub fn images(&self) -> &ImagesApi {
        &self.images
    }

    pub fn models(&self) -> &ModelsApi {
        &self.models
    }

    pub fn model_versions(&self) -> &ModelVersionsApi {
        &self.model_versions
    }

    pub fn tags(&self) -> &TagsApi {
        &self.tags
    }
}

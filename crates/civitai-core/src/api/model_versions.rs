//! Model version lookup by id or file hash.

use super::Lookup;
use crate::client::ApiClient;
use crate::error::{CivitaiError, Result};
use crate::models::ModelVersion;
use crate::normalize;
use crate::query::QueryParams;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// The `/model-versions` endpoints.
#[derive(Debug, Clone)]
pub struct ModelVersionsApi {
    client: Arc<ApiClient>,
}

impl ModelVersionsApi {
    /// Create an endpoint with its own transport client.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self::with_client(Arc::new(ApiClient::new(api_key)?)))
    }

    pub fn with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_version(&self, version_id: u64) -> Result<ModelVersion> {
        debug!("Fetching model version {}", version_id);
        let response = self
            .client
            .get(&format!("model-versions/{}", version_id), &QueryParams::new())
            .await?;
        normalize::to_version(&response)
    }

    /// Find the version that owns a file with the given digest.
    ///
    /// Any of the API's hash kinds work: AutoV1, AutoV2, SHA256, CRC32 or
    /// BLAKE3 (see [`HashAlgorithm`](crate::models::HashAlgorithm)).
    pub async fn get_by_hash(&self, hash: &str) -> Result<ModelVersion> {
        let hash = hash.trim();
        if hash.is_empty() {
            return Err(CivitaiError::validation("hash", "hash must not be empty"));
        }

        debug!("Fetching model version by hash {}", hash);
        let response = self
            .client
            .get(
                &format!("model-versions/by-hash/{}", urlencoding::encode(hash)),
                &QueryParams::new(),
            )
            .await?;
        normalize::to_version(&response)
    }
}

#[async_trait]
impl Lookup for ModelVersionsApi {
    type Key = u64;
    type Record = ModelVersion;

    async fn get(&self, version_id: u64) -> Result<ModelVersion> {
        self.get_version(version_id).await
    }
}

//! Model version records: files, preview images, and stats.

use super::{BaseModel, HashAlgorithm};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Download and rating counters for a single version.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ModelVersionStats {
    pub download_count: u64,
    pub rating_count: u64,
    pub rating: f64,
}

/// A downloadable file attached to a version.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ModelVersionFile {
    pub name: String,
    pub id: u64,
    /// Size in kilobytes (wire field `sizeKB`).
    pub size_kb: f64,
    /// File role, e.g. `Model`, `Pruned Model`, `Training Data`.
    pub file_type: String,
    /// Serialization format, e.g. `SafeTensor`, `PickleTensor`.
    pub format: String,
    pub pickle_scan_result: String,
    pub pickle_scan_message: String,
    pub virus_scan_result: String,
    pub scanned_at: Option<DateTime<Utc>>,
    /// Digest by algorithm name as reported by the API (`SHA256`, `AutoV2`, ...).
    pub hashes: BTreeMap<String, String>,
    pub download_url: String,
    pub primary: Option<bool>,
}

impl ModelVersionFile {
    /// Digest for `algorithm`. Algorithm names are matched case-insensitively.
    pub fn hash(&self, algorithm: HashAlgorithm) -> Option<&str> {
        self.hashes
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(algorithm.as_str()))
            .map(|(_, digest)| digest.as_str())
    }

    pub fn is_primary(&self) -> bool {
        self.primary.unwrap_or(false)
    }
}

/// A preview image attached to a version.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ModelVersionImage {
    pub url: String,
    pub nsfw: bool,
    pub width: u32,
    pub height: u32,
    /// Blurhash of the image.
    pub hash: String,
    /// Generation parameters, when the uploader shared them.
    pub meta: Map<String, Value>,
}

/// A releasable revision of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ModelVersion {
    pub id: u64,
    /// Id of the owning model.
    pub model_id: u64,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub download_url: String,
    pub trained_words: Vec<String>,
    /// Free-form base model name, see [`ModelVersion::base_model_family`].
    pub base_model: String,
    pub files: Vec<ModelVersionFile>,
    /// `None` when the API returned no preview images.
    pub images: Option<Vec<ModelVersionImage>>,
    pub stats: ModelVersionStats,
}

impl ModelVersion {
    /// The known base-model family this version targets, if recognised.
    pub fn base_model_family(&self) -> Option<BaseModel> {
        self.base_model.parse().ok()
    }

    /// The file flagged as primary, falling back to the first file.
    pub fn primary_file(&self) -> Option<&ModelVersionFile> {
        self.files
            .iter()
            .find(|f| f.is_primary())
            .or_else(|| self.files.first())
    }
}

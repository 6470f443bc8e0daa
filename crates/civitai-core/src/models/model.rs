//! Model records.

use super::{ModelMode, ModelType, ModelVersion};
use serde::Serialize;

/// Creator reference embedded in a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ModelCreator {
    pub username: String,
    /// Avatar URL, when the creator has one.
    pub image: Option<String>,
}

/// Engagement counters for a model.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ModelStats {
    pub download_count: u64,
    pub favorite_count: u64,
    pub comment_count: u64,
    pub rating_count: u64,
    /// Average rating.
    pub rating: f64,
}

/// A shareable model resource and all of its published versions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    pub id: u64,
    pub name: String,
    /// HTML description as authored on the site.
    pub description: String,
    pub model_type: ModelType,
    pub nsfw: bool,
    pub tags: Vec<String>,
    pub creator: ModelCreator,
    pub stats: ModelStats,
    /// Versions in the order the API lists them (newest first).
    pub model_versions: Vec<ModelVersion>,
    pub mode: Option<ModelMode>,
}

impl Model {
    /// The most recent version, if any were returned.
    pub fn latest_version(&self) -> Option<&ModelVersion> {
        self.model_versions.first()
    }

    /// Look up a version by id.
    pub fn version(&self, version_id: u64) -> Option<&ModelVersion> {
        self.model_versions.iter().find(|v| v.id == version_id)
    }

    /// Whether the model is archived or taken down.
    pub fn is_unavailable(&self) -> bool {
        self.mode.is_some()
    }
}

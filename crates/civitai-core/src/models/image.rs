//! Image records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Reaction counters for an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ImageStats {
    pub cry_count: u64,
    pub laugh_count: u64,
    pub like_count: u64,
    pub heart_count: u64,
    pub comment_count: u64,
}

impl ImageStats {
    /// Sum of all emoji reactions (comments excluded).
    pub fn total_reactions(&self) -> u64 {
        self.cry_count
            .saturating_add(self.laugh_count)
            .saturating_add(self.like_count)
            .saturating_add(self.heart_count)
    }
}

/// An image posted to the site.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Image {
    pub id: u64,
    pub url: String,
    /// Blurhash of the image.
    pub hash: String,
    pub width: u32,
    pub height: u32,
    pub nsfw: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub post_id: Option<u64>,
    pub stats: ImageStats,
    /// Generation parameters, when the uploader shared them.
    pub meta: Map<String, Value>,
    /// Uploader's username.
    pub username: String,
}

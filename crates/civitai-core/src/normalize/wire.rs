//! Raw API payload shapes.
//!
//! Every field is optional on the wire; the readers in [`super::lenient`]
//! turn absent or mistyped values into neutral defaults. Enumerated fields
//! and timestamps stay as text here and are checked during conversion.

use super::lenient::*;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawCreator {
    #[serde(deserialize_with = "text")]
    pub username: String,
    #[serde(deserialize_with = "count")]
    pub model_count: u64,
    #[serde(deserialize_with = "text")]
    pub link: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawTag {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "count")]
    pub model_count: u64,
    #[serde(deserialize_with = "text")]
    pub link: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawImageStats {
    #[serde(deserialize_with = "count")]
    pub cry_count: u64,
    #[serde(deserialize_with = "count")]
    pub laugh_count: u64,
    #[serde(deserialize_with = "count")]
    pub like_count: u64,
    #[serde(deserialize_with = "count")]
    pub heart_count: u64,
    #[serde(deserialize_with = "count")]
    pub comment_count: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawImage {
    #[serde(deserialize_with = "count")]
    pub id: u64,
    #[serde(deserialize_with = "text")]
    pub url: String,
    #[serde(deserialize_with = "text")]
    pub hash: String,
    #[serde(deserialize_with = "dimension")]
    pub width: u32,
    #[serde(deserialize_with = "dimension")]
    pub height: u32,
    #[serde(deserialize_with = "flag")]
    pub nsfw: bool,
    #[serde(deserialize_with = "opt_text")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "opt_count")]
    pub post_id: Option<u64>,
    #[serde(deserialize_with = "nested")]
    pub stats: RawImageStats,
    #[serde(deserialize_with = "object")]
    pub meta: Map<String, Value>,
    #[serde(deserialize_with = "text")]
    pub username: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawModelCreator {
    #[serde(deserialize_with = "text")]
    pub username: String,
    #[serde(deserialize_with = "opt_text")]
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawModelStats {
    #[serde(deserialize_with = "count")]
    pub download_count: u64,
    #[serde(deserialize_with = "count")]
    pub favorite_count: u64,
    #[serde(deserialize_with = "count")]
    pub comment_count: u64,
    #[serde(deserialize_with = "count")]
    pub rating_count: u64,
    #[serde(deserialize_with = "float")]
    pub rating: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawModel {
    #[serde(deserialize_with = "count")]
    pub id: u64,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(rename = "type", deserialize_with = "opt_text")]
    pub model_type: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub nsfw: bool,
    #[serde(deserialize_with = "strings")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "opt_text")]
    pub mode: Option<String>,
    #[serde(deserialize_with = "nested")]
    pub creator: RawModelCreator,
    #[serde(deserialize_with = "nested")]
    pub stats: RawModelStats,
    #[serde(deserialize_with = "nested_list")]
    pub model_versions: Vec<RawModelVersion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawVersionStats {
    #[serde(deserialize_with = "count")]
    pub download_count: u64,
    #[serde(deserialize_with = "count")]
    pub rating_count: u64,
    #[serde(deserialize_with = "float")]
    pub rating: f64,
}

/// Older payloads spell the size field `sizeKb`. Both keys are read
/// separately since some payloads carry both; `sizeKB` wins.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawVersionFile {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "count")]
    pub id: u64,
    #[serde(rename = "sizeKB", deserialize_with = "opt_float")]
    pub size_kb: Option<f64>,
    #[serde(rename = "sizeKb", deserialize_with = "opt_float")]
    pub legacy_size_kb: Option<f64>,
    #[serde(rename = "type", deserialize_with = "text")]
    pub file_type: String,
    #[serde(deserialize_with = "text")]
    pub format: String,
    #[serde(deserialize_with = "text")]
    pub pickle_scan_result: String,
    #[serde(deserialize_with = "text")]
    pub pickle_scan_message: String,
    #[serde(deserialize_with = "text")]
    pub virus_scan_result: String,
    #[serde(deserialize_with = "opt_text")]
    pub scanned_at: Option<String>,
    #[serde(deserialize_with = "string_map")]
    pub hashes: BTreeMap<String, String>,
    #[serde(deserialize_with = "text")]
    pub download_url: String,
    #[serde(deserialize_with = "opt_flag")]
    pub primary: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawVersionImage {
    #[serde(deserialize_with = "text")]
    pub url: String,
    #[serde(deserialize_with = "flag")]
    pub nsfw: bool,
    #[serde(deserialize_with = "dimension")]
    pub width: u32,
    #[serde(deserialize_with = "dimension")]
    pub height: u32,
    #[serde(deserialize_with = "text")]
    pub hash: String,
    #[serde(deserialize_with = "object")]
    pub meta: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawModelVersion {
    #[serde(deserialize_with = "count")]
    pub id: u64,
    #[serde(deserialize_with = "count")]
    pub model_id: u64,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "opt_text")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "text")]
    pub download_url: String,
    #[serde(deserialize_with = "strings")]
    pub trained_words: Vec<String>,
    #[serde(deserialize_with = "text")]
    pub base_model: String,
    #[serde(deserialize_with = "nested_list")]
    pub files: Vec<RawVersionFile>,
    #[serde(deserialize_with = "nested_list")]
    pub images: Vec<RawVersionImage>,
    #[serde(deserialize_with = "nested")]
    pub stats: RawVersionStats,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawPageMetadata {
    #[serde(deserialize_with = "opt_count")]
    pub total_items: Option<u64>,
    #[serde(deserialize_with = "opt_count")]
    pub current_page: Option<u64>,
    #[serde(deserialize_with = "opt_count")]
    pub page_size: Option<u64>,
    #[serde(deserialize_with = "opt_count")]
    pub total_pages: Option<u64>,
    #[serde(deserialize_with = "opt_text")]
    pub next_page: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub prev_page: Option<String>,
}

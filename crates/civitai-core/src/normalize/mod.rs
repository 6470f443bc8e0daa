//! Conversion from raw API JSON into domain records.
//!
//! Every lookup is get-or-default: missing keys, `null`s, and missing nested
//! objects produce neutral values instead of errors. The exceptions are the
//! enumerated fields (`type`, and `mode` when present) and timestamps, which
//! must parse or the whole record fails with [`CivitaiError::Validation`].

mod lenient;
mod wire;

use crate::error::{CivitaiError, Result};
use crate::models::{
    Creator, Image, ImageStats, Model, ModelCreator, ModelStats, ModelVersion, ModelVersionFile,
    ModelVersionImage, ModelVersionStats, Page, PageMetadata, Tag,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use wire::*;

/// Normalize a creator listing item.
pub fn to_creator(json: &Value) -> Result<Creator> {
    let raw: RawCreator = read_object(json, "creator")?;
    Ok(Creator {
        username: raw.username,
        model_count: raw.model_count,
        link: raw.link,
    })
}

/// Normalize a tag listing item.
pub fn to_tag(json: &Value) -> Result<Tag> {
    let raw: RawTag = read_object(json, "tag")?;
    Ok(Tag {
        name: raw.name,
        model_count: raw.model_count,
        link: raw.link,
    })
}

/// Normalize an image listing item.
pub fn to_image(json: &Value) -> Result<Image> {
    let raw: RawImage = read_object(json, "image")?;
    Ok(Image {
        id: raw.id,
        url: raw.url,
        hash: raw.hash,
        width: raw.width,
        height: raw.height,
        nsfw: raw.nsfw,
        created_at: parse_opt_timestamp("createdAt", raw.created_at.as_deref())?,
        post_id: raw.post_id,
        stats: ImageStats {
            cry_count: raw.stats.cry_count,
            laugh_count: raw.stats.laugh_count,
            like_count: raw.stats.like_count,
            heart_count: raw.stats.heart_count,
            comment_count: raw.stats.comment_count,
        },
        meta: raw.meta,
        username: raw.username,
    })
}

/// Normalize a model, including its embedded versions.
pub fn to_model(json: &Value) -> Result<Model> {
    let raw: RawModel = read_object(json, "model")?;
    convert_model(raw)
}

/// Normalize a model version.
pub fn to_version(json: &Value) -> Result<ModelVersion> {
    let raw: RawModelVersion = read_object(json, "modelVersion")?;
    convert_version(raw)
}

/// Normalize the `metadata` object of a list response.
pub fn to_page_metadata(json: &Value) -> Result<PageMetadata> {
    let raw: RawPageMetadata = read_object(json, "metadata")?;
    Ok(PageMetadata {
        total_items: raw.total_items,
        current_page: raw.current_page,
        page_size: raw.page_size,
        total_pages: raw.total_pages,
        next_page: raw.next_page,
        prev_page: raw.prev_page,
    })
}

/// Normalize a whole list response: `items` through `normalize`, plus metadata.
///
/// A missing or `null` `items` array is an empty page, as is a missing
/// `metadata` object.
pub fn to_page<T, F>(json: &Value, normalize: F) -> Result<Page<T>>
where
    F: Fn(&Value) -> Result<T>,
{
    if !json.is_object() {
        return Err(CivitaiError::validation(
            "response",
            format!("expected a JSON object, got {}", kind_of(json)),
        ));
    }

    let items = match json.get("items") {
        Some(Value::Array(items)) => items.iter().map(&normalize).collect::<Result<Vec<_>>>()?,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            return Err(CivitaiError::validation(
                "items",
                format!("expected an array, got {}", kind_of(other)),
            ))
        }
    };

    let metadata = match json.get("metadata") {
        Some(metadata) if metadata.is_object() => to_page_metadata(metadata)?,
        _ => PageMetadata::default(),
    };

    Ok(Page { items, metadata })
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with a numeric offset or a trailing `Z`, plus
/// offset-less date-times and bare dates, which are read as UTC.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Some(naive) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }

    Err(CivitaiError::validation(
        field,
        format!("invalid timestamp '{}'", raw),
    ))
}

fn parse_opt_timestamp(field: &str, raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    raw.map(|s| parse_timestamp(field, s)).transpose()
}

fn convert_model(raw: RawModel) -> Result<Model> {
    let model_type = raw
        .model_type
        .ok_or_else(|| CivitaiError::validation("type", "missing model type"))?
        .parse()?;
    let mode = raw.mode.map(|m| m.parse()).transpose()?;

    let model_versions = raw
        .model_versions
        .into_iter()
        .map(|v| {
            let mut version = convert_version(v)?;
            // Versions embedded in a model omit their parent id.
            if version.model_id == 0 {
                version.model_id = raw.id;
            }
            Ok(version)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Model {
        id: raw.id,
        name: raw.name,
        description: raw.description,
        model_type,
        nsfw: raw.nsfw,
        tags: raw.tags,
        creator: ModelCreator {
            username: raw.creator.username,
            image: raw.creator.image,
        },
        stats: ModelStats {
            download_count: raw.stats.download_count,
            favorite_count: raw.stats.favorite_count,
            comment_count: raw.stats.comment_count,
            rating_count: raw.stats.rating_count,
            rating: raw.stats.rating,
        },
        model_versions,
        mode,
    })
}

fn convert_version(raw: RawModelVersion) -> Result<ModelVersion> {
    let files = raw
        .files
        .into_iter()
        .map(convert_file)
        .collect::<Result<Vec<_>>>()?;

    let images = if raw.images.is_empty() {
        None
    } else {
        Some(
            raw.images
                .into_iter()
                .map(|i| ModelVersionImage {
                    url: i.url,
                    nsfw: i.nsfw,
                    width: i.width,
                    height: i.height,
                    hash: i.hash,
                    meta: i.meta,
                })
                .collect(),
        )
    };

    Ok(ModelVersion {
        id: raw.id,
        model_id: raw.model_id,
        name: raw.name,
        created_at: parse_opt_timestamp("createdAt", raw.created_at.as_deref())?,
        download_url: raw.download_url,
        trained_words: raw.trained_words,
        base_model: raw.base_model,
        files,
        images,
        stats: ModelVersionStats {
            download_count: raw.stats.download_count,
            rating_count: raw.stats.rating_count,
            rating: raw.stats.rating,
        },
    })
}

fn convert_file(raw: RawVersionFile) -> Result<ModelVersionFile> {
    Ok(ModelVersionFile {
        name: raw.name,
        id: raw.id,
        size_kb: raw.size_kb.or(raw.legacy_size_kb).unwrap_or(0.0),
        file_type: raw.file_type,
        format: raw.format,
        pickle_scan_result: raw.pickle_scan_result,
        pickle_scan_message: raw.pickle_scan_message,
        virus_scan_result: raw.virus_scan_result,
        scanned_at: parse_opt_timestamp("scannedAt", raw.scanned_at.as_deref())?,
        hashes: raw.hashes,
        download_url: raw.download_url,
        primary: raw.primary,
    })
}

fn read_object<T: DeserializeOwned>(json: &Value, what: &str) -> Result<T> {
    if !json.is_object() {
        return Err(CivitaiError::validation(
            what,
            format!("expected a JSON object, got {}", kind_of(json)),
        ));
    }
    T::deserialize(json).map_err(|e| CivitaiError::validation(what, e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Tag listing records.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Tag {
    pub name: String,
    /// Number of models carrying the tag.
    pub model_count: u64,
    /// API link to the tagged models.
    pub link: String,
}

//! Creator listing records.

use serde::Serialize;

/// A user who publishes models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Creator {
    pub username: String,
    /// Number of models the creator owns.
    pub model_count: u64,
    /// API link to the creator's models.
    pub link: String,
}

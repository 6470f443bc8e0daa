//! List response envelope.

use serde::Serialize;

/// The `metadata` object of a list response.
///
/// Cursor-paginated endpoints leave the counters out and only send `nextPage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct PageMetadata {
    pub total_items: Option<u64>,
    pub current_page: Option<u64>,
    pub page_size: Option<u64>,
    pub total_pages: Option<u64>,
    /// Absolute URL of the next page.
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
}

impl PageMetadata {
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

/// One batch of normalized records from a single HTTP round-trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub metadata: PageMetadata,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

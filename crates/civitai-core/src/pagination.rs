//! Page-by-page traversal of list endpoints.
//!
//! The server drives pagination: each response may carry an absolute
//! `metadata.nextPage` link, and that link (with its own query string) is
//! the next request. Nothing is fetched until the stream is polled, and each
//! poll is exactly one HTTP round-trip.

use crate::client::ApiClient;
use crate::error::{CivitaiError, Result};
use crate::models::Page;
use crate::normalize;
use crate::query::QueryParams;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Lazy, forward-only sequence of pages.
///
/// The first error ends the stream; pages yielded before it stay valid.
/// Dropping the stream stops further requests.
pub type PageStream<T> = BoxStream<'static, Result<Page<T>>>;

/// Converts one raw list item into a record.
pub type Normalizer<T> = fn(&Value) -> Result<T>;

enum Cursor {
    /// Initial request built from caller filters.
    Start {
        endpoint: String,
        params: QueryParams,
    },
    /// Server-provided next-page link, parsed when it is requested.
    Link(String),
    Done,
}

/// Stream the pages of a list endpoint, starting at `endpoint` with `params`.
pub fn paginate<T>(
    client: Arc<ApiClient>,
    endpoint: impl Into<String>,
    params: QueryParams,
    normalize_item: Normalizer<T>,
) -> PageStream<T>
where
    T: Send + 'static,
{
    let start = Cursor::Start {
        endpoint: endpoint.into(),
        params,
    };

    stream::try_unfold(start, move |cursor| {
        let client = Arc::clone(&client);
        async move {
            let (endpoint, params) = match cursor {
                Cursor::Done => return Ok::<_, CivitaiError>(None),
                Cursor::Start { endpoint, params } => (endpoint, params),
                Cursor::Link(link) => {
                    let (url, params) = QueryParams::split_url(&link)?;
                    (url.to_string(), params)
                }
            };

            let response = client.get(&endpoint, &params).await?;
            let page = normalize::to_page(&response, normalize_item)?;

            let next = match page.metadata.next_page.clone() {
                Some(link) => {
                    debug!("Fetched {} items from {}, next page: {}", page.len(), endpoint, link);
                    Cursor::Link(link)
                }
                None => {
                    debug!("Fetched {} items from {}, no more pages", page.len(), endpoint);
                    Cursor::Done
                }
            };

            Ok(Some((page, next)))
        }
    })
    .boxed()
}

/// Drain up to `max_pages` pages (all of them when `None`) into one list.
pub async fn collect_items<T>(mut pages: PageStream<T>, max_pages: Option<usize>) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut fetched = 0usize;

    while max_pages.map_or(true, |max| fetched < max) {
        match pages.try_next().await? {
            Some(page) => {
                fetched += 1;
                items.extend(page.items);
            }
            None => break,
        }
    }

    Ok(items)
}

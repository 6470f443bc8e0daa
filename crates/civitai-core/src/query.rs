//! Query-string construction for the Civitai API.
//!
//! The API expects arrays as repeated keys (`baseModel=a&baseModel=b`), with
//! one exception: `allowCommercialUse` is sent in indexed form
//! (`allowCommercialUse[0]=Image`). Both forms are produced here; the
//! brackets of indexed keys are written literally.

use crate::error::{CivitaiError, Result};
use url::Url;

/// Ordered list of wire parameters.
///
/// Insertion order is preserved so repeated keys keep the order the caller
/// gave them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single `key=value` pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Append `key=value` only when a value is set.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Append one `key=value` occurrence per value.
    pub fn push_all<I, V>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.push(key, value);
        }
        self
    }

    /// Append `key[0]=a&key[1]=b...`.
    pub fn push_indexed<I, V>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for (index, value) in values.into_iter().enumerate() {
            self.push(format!("{}[{}]", key, index), value);
        }
        self
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encode into a query string (without the leading `?`).
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_key(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse a query string (without the leading `?`).
    pub fn decode(query: &str) -> Self {
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Split an absolute URL into its query-less form and its parameters.
    ///
    /// Used for server-provided next-page links: the parameters come from the
    /// link alone and replace whatever the previous request sent.
    pub fn split_url(raw: &str) -> Result<(Url, QueryParams)> {
        let mut url = Url::parse(raw).map_err(|e| CivitaiError::InvalidUrl {
            url: raw.to_string(),
            message: e.to_string(),
        })?;
        let params = url.query().map(Self::decode).unwrap_or_default();
        url.set_query(None);
        url.set_fragment(None);
        Ok((url, params))
    }

    /// Replace the query string of `url` with these parameters.
    pub fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.encode()));
        }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

fn encode_key(key: &str) -> String {
    urlencoding::encode(key)
        .replace("%5B", "[")
        .replace("%5D", "]")
}

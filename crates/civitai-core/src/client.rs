//! Transport client for the Civitai API.
//!
//! Wraps a single `reqwest::Client` with:
//! - Base URL resolution (bare endpoint paths or absolute URLs)
//! - Bearer token authentication
//! - Status classification into [`CivitaiError`] kinds
//! - JSON response decoding

use crate::config::ClientConfig;
use crate::error::{CivitaiError, Result};
use crate::query::QueryParams;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};
use url::Url;

/// Longest error-body excerpt kept on [`CivitaiError::Http`].
const ERROR_BODY_LIMIT: usize = 512;

/// HTTP client shared by every resource endpoint.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    has_api_key: bool,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_api_key", &self.has_api_key)
            .finish()
    }
}

impl ApiClient {
    /// Create a client for the public API with an optional API key.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            CivitaiError::InvalidUrl {
                url: config.base_url.clone(),
                message: e.to_string(),
            }
        })?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(ref api_key) = config.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
                .map_err(|e| CivitaiError::Config {
                    message: format!("API key is not a valid header value: {}", e),
                })?;
            value.set_sensitive(true);

            let mut headers = HeaderMap::new();
            headers.insert(header::AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        let http = builder.build().map_err(|e| CivitaiError::Config {
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self {
            http,
            base_url,
            has_api_key: config.api_key.is_some(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Resolve an endpoint path or absolute URL.
    ///
    /// Anything starting with `http` is taken as-is, since next-page links
    /// from the server are absolute. Other inputs are joined to the base URL.
    pub fn resolve(&self, endpoint_or_url: &str) -> Result<Url> {
        let raw = if endpoint_or_url.starts_with("http") {
            endpoint_or_url.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.as_str().trim_end_matches('/'),
                endpoint_or_url.trim_start_matches('/')
            )
        };

        Url::parse(&raw).map_err(|e| CivitaiError::InvalidUrl {
            url: raw,
            message: e.to_string(),
        })
    }

    /// Make a GET request and decode the JSON body.
    pub async fn get(&self, endpoint_or_url: &str, params: &QueryParams) -> Result<Value> {
        self.request(Method::GET, endpoint_or_url, params, None).await
    }

    /// Make a request and decode the JSON body.
    ///
    /// Non-empty `params` replace any query string already on the URL. An
    /// empty success body decodes to `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        endpoint_or_url: &str,
        params: &QueryParams,
        body: Option<&Value>,
    ) -> Result<Value> {
        let mut url = self.resolve(endpoint_or_url)?;
        if !params.is_empty() {
            params.apply_to(&mut url);
        }

        debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| CivitaiError::Network {
            message: format!("{} {} failed: {}", method, url, e),
            source: Some(e),
        })?;

        let response = check_response_status(response, url.as_str()).await?;

        let text = response.text().await.map_err(|e| CivitaiError::Network {
            message: format!("Failed to read response from {}: {}", url, e),
            source: Some(e),
        })?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| CivitaiError::Json {
            message: format!("Failed to parse response from {}: {}", url, e),
            source: Some(e),
        })
    }
}

async fn check_response_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    debug!("{} -> {}", url, status);

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok());
        warn!(
            "Rate limited by Civitai on {} (retry after {:?}s)",
            url, retry_after_secs
        );
        return Err(CivitaiError::RateLimited {
            url: url.to_string(),
            retry_after_secs,
            message: error_message(response, status).await,
        });
    }

    if status == StatusCode::NOT_FOUND {
        return Err(CivitaiError::NotFound {
            url: url.to_string(),
            message: error_message(response, status).await,
        });
    }

    Err(CivitaiError::Http {
        status: status.as_u16(),
        url: url.to_string(),
        message: error_message(response, status).await,
    })
}

/// Trimmed, truncated error body, or the status reason when the body is empty.
async fn error_message(response: Response, status: StatusCode) -> String {
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        truncate(body.trim(), ERROR_BODY_LIMIT)
    }
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

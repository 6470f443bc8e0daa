//! In-process HTTP server standing in for the Civitai API.

#![allow(dead_code)]

use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use civitai_client::{Civitai, ClientConfig, QueryParams};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: QueryParams,
    pub authorization: Option<String>,
}

type Responder = dyn Fn(&Recorded, &str) -> Response + Send + Sync;

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    /// Bind to an ephemeral port and answer every request with `respond`,
    /// which also receives the server's base URL for building next-page links.
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&Recorded, &str) -> Response + Send + Sync + 'static,
    {
        init_tracing();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());

        let requests = Arc::new(Mutex::new(Vec::new()));
        let responder: Arc<Responder> = Arc::new(respond);

        let app = Router::new().fallback({
            let requests = Arc::clone(&requests);
            let base_url = base_url.clone();
            move |uri: Uri, headers: HeaderMap| {
                let requests = Arc::clone(&requests);
                let responder = Arc::clone(&responder);
                let base_url = base_url.clone();
                async move {
                    let recorded = Recorded {
                        path: uri.path().to_string(),
                        query: QueryParams::decode(uri.query().unwrap_or("")),
                        authorization: headers
                            .get(header::AUTHORIZATION)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string),
                    };
                    requests.lock().unwrap().push(recorded.clone());
                    responder(&recorded, &base_url)
                }
            }
        });

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, requests }
    }

    pub fn client(&self, api_key: Option<&str>) -> Civitai {
        let mut config = ClientConfig::default().with_base_url(self.base_url.clone());
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }
        Civitai::with_config(config).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

pub fn json_response(body: Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

pub fn text_response(code: StatusCode, body: &str) -> Response {
    (code, body.to_string()).into_response()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

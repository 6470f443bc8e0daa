//! Integration tests for model listing pagination against a mock server.

mod support;

use axum::http::StatusCode;
use civitai_client::{collect_items, CivitaiError, ModelFilter, ModelType};
use futures::{StreamExt, TryStreamExt};
use serde_json::json;
use support::{json_response, text_response, MockServer};

fn model_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Model {}", id),
        "type": "LORA",
        "nsfw": false,
        "modelVersions": [{ "id": id * 10, "name": "v1", "baseModel": "SD 1.5" }]
    })
}

/// Page 1 links to page 2 via `cursor=2`; page 2 is the last one.
async fn two_page_server() -> MockServer {
    MockServer::start(|request, base_url| {
        if request.query.get("cursor") == Some("2") {
            json_response(json!({
                "items": [model_json(2)],
                "metadata": { "totalItems": 2, "currentPage": 2, "pageSize": 1 }
            }))
        } else {
            json_response(json!({
                "items": [model_json(1)],
                "metadata": {
                    "totalItems": 2,
                    "currentPage": 1,
                    "pageSize": 1,
                    "nextPage": format!("{}/models?limit=1&cursor=2", base_url)
                }
            }))
        }
    })
    .await
}

#[tokio::test]
async fn test_follows_next_page_link() {
    let server = two_page_server().await;
    let civitai = server.client(None);

    let filter = ModelFilter {
        limit: Some(1),
        query: Some("portrait".into()),
        types: vec![ModelType::Lora],
        ..ModelFilter::default()
    };
    let pages: Vec<_> = civitai.models().pages(&filter).try_collect().await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].items[0].id, 1);
    assert_eq!(pages[1].items[0].id, 2);
    assert!(pages[0].metadata.has_next());
    assert!(!pages[1].metadata.has_next());

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, "/api/v1/models");
    assert_eq!(requests[0].query.get("query"), Some("portrait"));
    assert_eq!(requests[0].query.get("modelType"), Some("LORA"));

    // The second request carries only the link's own parameters.
    assert_eq!(requests[1].path, "/api/v1/models");
    assert_eq!(requests[1].query.get("cursor"), Some("2"));
    assert_eq!(requests[1].query.get("limit"), Some("1"));
    assert_eq!(requests[1].query.get("query"), None);
}

#[tokio::test]
async fn test_stream_is_lazy() {
    let server = two_page_server().await;
    let civitai = server.client(None);

    let mut pages = civitai.models().pages(&ModelFilter::default());
    assert_eq!(server.hits(), 0);

    pages.next().await.unwrap().unwrap();
    assert_eq!(server.hits(), 1);

    drop(pages);
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_collect_items_respects_max_pages() {
    let server = two_page_server().await;
    let civitai = server.client(None);

    let items = collect_items(civitai.models().pages(&ModelFilter::default()), Some(1))
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(server.hits(), 1);

    let items = collect_items(civitai.models().pages(&ModelFilter::default()), None)
        .await
        .unwrap();
    let ids: Vec<u64> = items.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_empty_listing_yields_one_empty_page() {
    let server = MockServer::start(|_, _| json_response(json!({ "items": [], "metadata": {} }))).await;
    let civitai = server.client(None);

    let pages: Vec<_> = civitai
        .models()
        .pages(&ModelFilter::default())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 1);
    assert!(pages[0].is_empty());
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_error_on_later_page_ends_stream() {
    let server = MockServer::start(|request, base_url| {
        if request.query.get("cursor").is_some() {
            text_response(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
        } else {
            json_response(json!({
                "items": [model_json(1)],
                "metadata": { "nextPage": format!("{}/models?cursor=abc", base_url) }
            }))
        }
    })
    .await;
    let civitai = server.client(None);

    let mut pages = civitai.models().pages(&ModelFilter::default());
    let first = pages.next().await.unwrap().unwrap();
    assert_eq!(first.items[0].id, 1);

    match pages.next().await.unwrap() {
        Err(CivitaiError::Http { status, message, .. }) => {
            assert_eq!(status, 500);
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("expected Http error, got {:?}", other.map(|p| p.len())),
    }
    assert!(pages.next().await.is_none());
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn test_malformed_item_fails_the_page() {
    let server = MockServer::start(|_, _| {
        json_response(json!({ "items": [{ "id": 1, "name": "no type" }], "metadata": {} }))
    })
    .await;
    let civitai = server.client(None);

    let err = civitai
        .models()
        .pages(&ModelFilter::default())
        .try_next()
        .await
        .unwrap_err();
    assert!(matches!(err, CivitaiError::Validation { ref field, .. } if field == "type"));
}

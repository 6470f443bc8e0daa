//! Integration tests for the resource endpoints against a mock server.

mod support;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use civitai_client::{
    CivitaiError, CommercialUse, HashAlgorithm, ImageFilter, ImageSort, Listing, Lookup,
    ModelFilter, ModelType, SearchFilter,
};
use serde_json::json;
use support::{json_response, text_response, MockServer};

fn model_response() -> serde_json::Value {
    json!({
        "id": 42,
        "name": "Detail Tweaker",
        "description": "<p>Adds detail</p>",
        "type": "LORA",
        "nsfw": false,
        "tags": ["detail", "tool"],
        "mode": null,
        "creator": { "username": "maker", "image": null },
        "stats": { "downloadCount": 1000, "rating": 4.9 },
        "modelVersions": [{
            "id": 420,
            "name": "v1.0",
            "createdAt": "2023-03-01T12:00:00.000Z",
            "baseModel": "SD 1.5",
            "trainedWords": ["detailed"],
            "files": [{
                "name": "detail.safetensors",
                "id": 7,
                "sizeKB": 9216.5,
                "type": "Model",
                "primary": true,
                "hashes": { "SHA256": "ABCDEF" }
            }],
            "images": []
        }]
    })
}

#[tokio::test]
async fn test_get_model() {
    let server = MockServer::start(|_, _| json_response(model_response())).await;
    let civitai = server.client(None);

    let model = civitai.models().get(42).await.unwrap();
    assert_eq!(server.requests()[0].path, "/api/v1/models/42");

    assert_eq!(model.id, 42);
    assert_eq!(model.model_type, ModelType::Lora);
    assert_eq!(model.creator.username, "maker");
    assert_eq!(model.stats.download_count, 1000);
    assert_eq!(model.mode, None);

    let version = model.latest_version().unwrap();
    assert_eq!(version.model_id, 42);
    assert!(version.images.is_none());
    let file = version.primary_file().unwrap();
    assert_eq!(file.size_kb, 9216.5);
    assert_eq!(file.hash(HashAlgorithm::Sha256), Some("ABCDEF"));
}

#[tokio::test]
async fn test_not_found() {
    let server = MockServer::start(|request, _| {
        if request.path.ends_with("/models/1") {
            text_response(StatusCode::NOT_FOUND, "No model with id 1\n")
        } else {
            text_response(StatusCode::NOT_FOUND, "")
        }
    })
    .await;
    let civitai = server.client(None);

    let err = civitai.models().get(1).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().ends_with("No model with id 1"));
    match err {
        CivitaiError::NotFound { url, message } => {
            assert!(url.ends_with("/models/1"));
            assert_eq!(message, "No model with id 1");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }

    // An empty body falls back to the status reason.
    let err = civitai.model_versions().get(1).await.unwrap_err();
    assert!(matches!(err, CivitaiError::NotFound { ref message, .. } if message == "Not Found"));
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start(|_, _| {
        (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, "30")],
            "quota: 60/min",
        )
            .into_response()
    })
    .await;
    let civitai = server.client(None);

    let err = civitai.tags().list(&SearchFilter::default()).await.unwrap_err();
    assert!(err.is_rate_limited());
    assert!(err.to_string().ends_with("quota: 60/min"));
    assert!(matches!(
        err,
        CivitaiError::RateLimited { retry_after_secs: Some(30), ref message, .. }
            if message == "quota: 60/min"
    ));
}

#[tokio::test]
async fn test_server_error_keeps_status() {
    let server =
        MockServer::start(|_, _| text_response(StatusCode::SERVICE_UNAVAILABLE, "maintenance")).await;
    let civitai = server.client(None);

    let err = civitai.creators().list(&SearchFilter::default()).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let server = MockServer::start(|_, _| text_response(StatusCode::OK, "<html>oops</html>")).await;
    let civitai = server.client(None);

    let err = civitai.models().get(1).await.unwrap_err();
    assert!(matches!(err, CivitaiError::Json { .. }));
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start(|_, _| json_response(json!({ "items": [] }))).await;

    server
        .client(Some("my-key"))
        .tags()
        .list(&SearchFilter::default())
        .await
        .unwrap();
    server
        .client(None)
        .tags()
        .list(&SearchFilter::default())
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer my-key"));
    assert_eq!(requests[1].authorization, None);
}

#[tokio::test]
async fn test_version_by_hash() {
    let server = MockServer::start(|_, _| {
        json_response(json!({ "id": 5, "modelId": 3, "name": "v2", "baseModel": "Pony" }))
    })
    .await;
    let civitai = server.client(None);

    let version = civitai.model_versions().get_by_hash("ABC123").await.unwrap();
    assert_eq!(server.requests()[0].path, "/api/v1/model-versions/by-hash/ABC123");
    assert_eq!(version.id, 5);
    assert_eq!(version.model_id, 3);
    assert_eq!(version.base_model, "Pony");
}

#[tokio::test]
async fn test_model_filter_reaches_server() {
    let server = MockServer::start(|_, _| json_response(json!({ "items": [] }))).await;
    let civitai = server.client(None);

    let filter = ModelFilter {
        types: vec![ModelType::Checkpoint, ModelType::Controlnet],
        allow_commercial_use: vec![CommercialUse::Image, CommercialUse::Sell],
        nsfw: Some(false),
        ..ModelFilter::default()
    };
    civitai.models().list(&filter).await.unwrap();
    // Listing models is lazy; nothing has been requested yet.
    assert_eq!(server.hits(), 0);

    futures::TryStreamExt::try_next(&mut civitai.models().pages(&filter))
        .await
        .unwrap();
    let query = &server.requests()[0].query;
    assert_eq!(query.get_all("modelType"), vec!["Checkpoint", "Controlnet"]);
    assert_eq!(query.get("allowCommercialUse[0]"), Some("Image"));
    assert_eq!(query.get("allowCommercialUse[1]"), Some("Sell"));
    assert_eq!(query.get("nsfw"), Some("false"));
}

#[tokio::test]
async fn test_list_images() {
    let server = MockServer::start(|_, _| {
        json_response(json!({
            "items": [{
                "id": 9,
                "url": "https://image.civitai.com/9.jpeg",
                "width": 512,
                "height": 768,
                "nsfw": "None",
                "createdAt": "2023-05-01T00:00:00+00:00",
                "postId": 100,
                "stats": { "likeCount": 3, "heartCount": 2 },
                "meta": { "prompt": "a cat" },
                "username": "artist"
            }],
            "metadata": { "nextCursor": "x" }
        }))
    })
    .await;
    let civitai = server.client(None);

    let filter = ImageFilter {
        model_id: Some(42),
        sort: Some(ImageSort::Newest),
        ..ImageFilter::default()
    };
    let images = civitai.images().list(&filter).await.unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.path, "/api/v1/images");
    assert_eq!(request.query.get("modelId"), Some("42"));
    assert_eq!(request.query.get("sort"), Some("Newest"));

    assert_eq!(images.len(), 1);
    assert!(!images[0].nsfw);
    assert_eq!(images[0].stats.total_reactions(), 5);
    assert_eq!(images[0].post_id, Some(100));
    assert_eq!(images[0].meta["prompt"], "a cat");
}

#[tokio::test]
async fn test_list_creators_and_tags() {
    let server = MockServer::start(|request, _| {
        if request.path.ends_with("/creators") {
            json_response(json!({
                "items": [{ "username": "maker", "modelCount": 12, "link": "https://civitai.com/api/v1/models?username=maker" }],
                "metadata": { "totalItems": 1, "currentPage": 1, "pageSize": 20, "totalPages": 1 }
            }))
        } else {
            json_response(json!({ "items": [{ "name": "anime", "modelCount": null }] }))
        }
    })
    .await;
    let civitai = server.client(None);

    let page = civitai.creators().page(&SearchFilter::query("mak")).await.unwrap();
    assert_eq!(page.items[0].username, "maker");
    assert_eq!(page.items[0].model_count, 12);
    assert_eq!(page.metadata.total_pages, Some(1));
    assert_eq!(server.requests()[0].query.get("query"), Some("mak"));

    let tags = civitai.tags().list(&SearchFilter::default()).await.unwrap();
    assert_eq!(tags[0].name, "anime");
    assert_eq!(tags[0].model_count, 0);
    assert_eq!(tags[0].link, "");
}

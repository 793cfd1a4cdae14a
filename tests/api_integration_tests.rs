//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle against a scripted upstream.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use swapi_cache::{
    api::create_router,
    cache::{shared, CacheStore},
    error::UpstreamError,
    upstream::{RetryPolicy, Transport, UpstreamClient},
    AppState, ResourceOrchestrator,
};
use tower::ServiceExt;

const BASE: &str = "https://swapi.test/api";

// == Fake Upstream ==

/// Serves fixed documents by URL and counts every request.
struct FakeSwapi {
    documents: HashMap<String, Value>,
    broken: Vec<String>,
    requests: AtomicUsize,
}

#[async_trait]
impl Transport for FakeSwapi {
    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.broken.iter().any(|b| b == url) {
            return Err(UpstreamError::Status {
                status: 500,
                endpoint: url.to_string(),
            });
        }
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| UpstreamError::NotFound(url.to_string()))
    }
}

fn url(path: &str) -> String {
    format!("{}/{}", BASE, path)
}

fn fake_swapi(broken: &[&str]) -> Arc<FakeSwapi> {
    let new_hope = json!({
        "title": "A New Hope",
        "episode_id": 4,
        "opening_crawl": "It is a period of civil war. ".repeat(20),
        "director": "George Lucas",
        "producer": "Gary Kurtz, Rick McCallum",
        "release_date": "1977-05-25",
        "characters": [url("people/1/"), url("people/4/")],
        "starships": [url("starships/12/")],
        "planets": [url("planets/1/")],
        "url": url("films/1/"),
        "created": "2014-12-10T14:23:31.880000Z",
        "edited": "2014-12-20T19:49:45.256000Z"
    });
    let empire = json!({
        "title": "The Empire Strikes Back",
        "episode_id": 5,
        "characters": [],
        "starships": [],
        "url": url("films/2/")
    });

    let documents = HashMap::from([
        (url("films/"), json!({"results": [empire.clone(), new_hope.clone()]})),
        (url("films/1/"), new_hope),
        (url("films/2/"), empire),
        (
            url("people/1/"),
            json!({"name": "Luke Skywalker", "starships": [url("starships/12/")], "url": url("people/1/")}),
        ),
        (
            url("people/4/"),
            json!({"name": "Darth Vader", "url": url("people/4/")}),
        ),
        (
            url("starships/12/"),
            json!({"name": "X-wing", "MGLT": "100", "url": url("starships/12/")}),
        ),
    ]);

    Arc::new(FakeSwapi {
        documents,
        broken: broken.iter().map(|p| url(p)).collect(),
        requests: AtomicUsize::new(0),
    })
}

fn create_test_app(fake: Arc<FakeSwapi>) -> Router {
    let upstream = UpstreamClient::new(fake, BASE, RetryPolicy::new(3, Duration::from_millis(1)));
    let orchestrator = ResourceOrchestrator::new(shared(CacheStore::new(300)), upstream);
    create_router(AppState::new(orchestrator))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// == Root and Health ==

#[tokio::test]
async fn test_root_endpoint() {
    let (status, json) = get_json(create_test_app(fake_swapi(&[])), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Welcome to the Star Wars API Wrapper!"));
    assert_eq!(json["may_the_force_be_with_you"], true);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(create_test_app(fake_swapi(&[])), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["cache"]["status"], "healthy");
    assert_eq!(json["cache"]["active_entries"], 0);
    assert!(json["timestamp"].is_string());
}

// == Films ==

#[tokio::test]
async fn test_get_films() {
    let (status, json) = get_json(create_test_app(fake_swapi(&[])), "/films").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["results"][0]["episode_id"], 4);
    assert_eq!(json["results"][1]["episode_id"], 5);
    assert_eq!(json["results"][0]["character_count"], 2);
    assert_eq!(
        json["results"][0]["opening_crawl"]
            .as_str()
            .unwrap()
            .chars()
            .count(),
        203
    );
}

#[tokio::test]
async fn test_films_served_from_cache() {
    let fake = fake_swapi(&[]);
    let app = create_test_app(fake.clone());

    let (_, first) = get_json(app.clone(), "/films").await;
    let requests = fake.requests.load(Ordering::SeqCst);
    let (_, second) = get_json(app.clone(), "/films").await;

    assert_eq!(first["results"], second["results"]);
    assert_eq!(fake.requests.load(Ordering::SeqCst), requests);

    let (_, stats) = get_json(app, "/cache/stats").await;
    assert_eq!(stats["total_entries"], 1);
    assert_eq!(stats["entries"]["films_all"]["access_count"], 1);
}

// == Film Children ==

#[tokio::test]
async fn test_get_film_characters_valid() {
    let (status, json) =
        get_json(create_test_app(fake_swapi(&[])), "/films/1/characters").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["film_id"], 1);
    assert_eq!(json["count"], 2);
    assert_eq!(json["results"][0]["name"], "Darth Vader");
    assert_eq!(json["results"][1]["name"], "Luke Skywalker");
    assert_eq!(json["results"][1]["starship_count"], 1);
}

#[tokio::test]
async fn test_get_film_starships_valid() {
    let (status, json) = get_json(create_test_app(fake_swapi(&[])), "/films/1/starships").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["film_id"], 1);
    assert_eq!(json["results"][0]["name"], "X-wing");
    assert_eq!(json["results"][0]["MGLT"], "100");
}

#[tokio::test]
async fn test_film_without_characters() {
    let (status, json) =
        get_json(create_test_app(fake_swapi(&[])), "/films/2/characters").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert!(json["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_film_characters_invalid() {
    let (status, json) =
        get_json(create_test_app(fake_swapi(&[])), "/films/999/characters").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Film with ID 999 not found");
    assert_eq!(json["status_code"], 404);
}

#[tokio::test]
async fn test_get_film_starships_invalid() {
    let (status, json) =
        get_json(create_test_app(fake_swapi(&[])), "/films/999/starships").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("detail").is_some());
}

// == Error Handling ==

#[tokio::test]
async fn test_malformed_film_id() {
    let fake = fake_swapi(&[]);
    let (status, json) = get_json(create_test_app(fake.clone()), "/films/invalid/characters").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["detail"].as_str().unwrap().contains("invalid"));
    assert_eq!(fake.requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_non_positive_film_ids() {
    for uri in ["/films/0/characters", "/films/-1/characters"] {
        let (status, _) = get_json(create_test_app(fake_swapi(&[])), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
    }
}

#[tokio::test]
async fn test_broken_child_fails_whole_request() {
    let fake = fake_swapi(&["people/4/"]);
    let app = create_test_app(fake.clone());

    let (status, json) = get_json(app.clone(), "/films/1/characters").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json.get("results").is_none());

    let (_, stats) = get_json(app, "/cache/stats").await;
    assert_eq!(stats["total_entries"], 0);
}

#[tokio::test]
async fn test_invalid_endpoints() {
    let (status, _) = get_json(create_test_app(fake_swapi(&[])), "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_response_content_type() {
    let response = create_test_app(fake_swapi(&[]))
        .oneshot(Request::builder().uri("/films").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.contains("application/json"));
}

// == Cache Administration ==

#[tokio::test]
async fn test_clear_cache() {
    let fake = fake_swapi(&[]);
    let app = create_test_app(fake.clone());

    get_json(app.clone(), "/films").await;
    get_json(app.clone(), "/films/1/starships").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["removed"], 2);

    let requests = fake.requests.load(Ordering::SeqCst);
    get_json(app, "/films").await;
    assert_eq!(fake.requests.load(Ordering::SeqCst), requests + 1);
}

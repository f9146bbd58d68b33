//! End-to-end tests for the webhook relay and static pages.
//!
//! Each test boots the full router on an ephemeral port with the webhook
//! URL pointed at a mock upstream.

use httpmock::prelude::*;
use serde_json::json;
use travel_scout::config::Settings;
use travel_scout::server::{routes, AppState};

/// Start the application against the given upstream URL, returning its base URL.
async fn spawn_app(webhook_url: String) -> String {
    let settings = Settings {
        webhook_url,
        ..Settings::default()
    };

    let state = AppState::new(settings).expect("failed to build app state");
    let router = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_post_relays_query_and_mirrors_output() {
    let server = MockServer::start();
    let travel_data = json!({
        "places": [{"name": "Trevi Fountain", "description": "Baroque fountain"}],
        "local_cuisine": [{"dish": "Cacio e pepe"}],
        "travel_tips": ["Carry cash for small trattorias"]
    });

    let upstream = server.mock(|when, then| {
        when.method(GET)
            .path("/webhook/test")
            .query_param("city", "Rome")
            .query_param("country", "Italy");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"output": travel_data}));
    });

    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/places", base_url))
        .json(&json!({"city": "Rome", "country": "Italy"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Data received!");
    assert_eq!(body["output"], travel_data);
    upstream.assert();
}

#[tokio::test]
async fn test_query_values_are_url_encoded() {
    let server = MockServer::start();

    // httpmock matches against decoded values, so this only passes if the
    // relay encoded the space and ampersand on the wire
    let upstream = server.mock(|when, then| {
        when.method(GET)
            .path("/webhook/test")
            .query_param("city", "Rio de Janeiro")
            .query_param("country", "Trinidad & Tobago");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"output": {"places": []}}));
    });

    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/places", base_url))
        .json(&json!({"city": "Rio de Janeiro", "country": "Trinidad & Tobago"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    upstream.assert();
}

#[tokio::test]
async fn test_items_array_payload_is_unwrapped() {
    let server = MockServer::start();
    let travel_data = json!({"travel_tips": ["Learn a few words of Japanese"]});

    server.mock(|when, then| {
        when.method(GET).path("/webhook/test");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([{"output": travel_data}]));
    });

    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/places", base_url))
        .json(&json!({"city": "Tokyo", "country": "Japan"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["output"], travel_data);
}

#[tokio::test]
async fn test_upstream_failure_yields_generic_500() {
    let server = MockServer::start();

    let upstream = server.mock(|when, then| {
        when.method(GET).path("/webhook/test");
        then.status(502).body("Bad Gateway");
    });

    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/places", base_url))
        .json(&json!({"city": "Paris", "country": "France"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Something went wrong!");
    upstream.assert();
}

#[tokio::test]
async fn test_upstream_malformed_json_yields_generic_500() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/webhook/test");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("this is not json");
    });

    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/places", base_url))
        .json(&json!({"city": "Lima", "country": "Peru"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Something went wrong!");
}

#[tokio::test]
async fn test_malformed_body_yields_generic_500() {
    let server = MockServer::start();

    let upstream = server.mock(|when, then| {
        when.method(GET).path("/webhook/test");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"output": {"places": []}}));
    });

    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/places", base_url))
        .header("Content-Type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Something went wrong!");
    // A body that never parsed must not reach the upstream
    upstream.assert_hits(0);
}

#[tokio::test]
async fn test_trace_id_header_is_honored_and_echoed() {
    let server = MockServer::start();
    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::Client::new()
        .get(format!("{}/health", base_url))
        .header("x-trace-id", "trace-from-caller")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("x-trace-id").unwrap(),
        "trace-from-caller"
    );
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "trace-from-caller"
    );
}

#[tokio::test]
async fn test_trace_id_is_generated_when_absent() {
    let server = MockServer::start();
    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();

    assert_eq!(response.status(), 200);
    let trace_id = response
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    // Generated IDs are UUID v4 strings
    assert_eq!(trace_id.len(), 36);
    assert_eq!(
        response.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some(trace_id)
    );
}

#[tokio::test]
async fn test_get_places_returns_greeting() {
    let server = MockServer::start();
    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::get(format!("{}/api/places", base_url))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Hello from GET!");
}

#[tokio::test]
async fn test_serves_form_and_results_pages() {
    let server = MockServer::start();
    let base_url = spawn_app(server.url("/webhook/test")).await;
    let client = reqwest::Client::new();

    let form = client.get(&base_url).send().await.unwrap();
    assert_eq!(form.status(), 200);
    let form_body = form.text().await.unwrap();
    assert!(form_body.contains("Explore Destinations"));

    // Query parameters are read client-side; the page itself is static
    let results = client
        .get(format!("{}/places?city=Rome&country=Italy", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(results.status(), 200);
    let results_body = results.text().await.unwrap();
    assert!(results_body.contains("Missing Location Details"));
    assert!(results_body.contains("Loading travel information"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start();
    let base_url = spawn_app(server.url("/webhook/test")).await;

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");
}

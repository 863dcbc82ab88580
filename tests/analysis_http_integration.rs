//! Integration tests for the analysis HTTP endpoints.
//!
//! These tests drive the full router (layers included) with in-memory storage:
//! 1. The stateless compute endpoint honors the request/response contract
//! 2. A wizard session walks through all three steps
//! 3. Guard failures and malformed input map to the documented statuses

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ahp_compare::adapters::http::{app_router, AnalysisAppState};
use ahp_compare::adapters::storage::InMemorySessionRepository;
use ahp_compare::config::ServerConfig;
use ahp_compare::domain::ahp::{AhpEngine, ConsistencyPolicy, DEFAULT_CONSISTENCY_THRESHOLD};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(engine: AhpEngine) -> Router {
    let state = AnalysisAppState::new(Arc::new(InMemorySessionRepository::new()), engine);
    app_router(state, &ServerConfig::default())
}

fn app() -> Router {
    app_with(AhpEngine::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

const PAIRS: [&str; 6] = [
    "price-performance",
    "price-battery",
    "price-screen",
    "performance-battery",
    "performance-screen",
    "battery-screen",
];

fn equal_judgments() -> Value {
    let mut map = serde_json::Map::new();
    for pair in PAIRS {
        map.insert(pair.to_string(), json!({"value": 1, "direction": "left"}));
    }
    Value::Object(map)
}

fn two_phones() -> Value {
    json!([
        {"id": 1, "name": "X", "price": 5, "performance": 8, "battery": 7, "screen": 6},
        {"id": 2, "name": "Y", "price": 10, "performance": 5, "battery": 5, "screen": 5}
    ])
}

fn weight_of(result: &Value, criterion: &str) -> f64 {
    result["weights"]
        .as_array()
        .unwrap()
        .iter()
        .find(|w| w["criterion"] == criterion)
        .and_then(|w| w["weight"].as_f64())
        .unwrap()
}

async fn fill_row(app: &Router, session: &str, id: u64, name: &str, values: [&str; 4]) {
    let fields = ["name", "price", "performance", "battery", "screen"];
    let texts = [name, values[0], values[1], values[2], values[3]];
    for (field, value) in fields.iter().zip(texts) {
        let (status, _) = send(
            app,
            Method::PATCH,
            &format!("/api/sessions/{}/alternatives/{}", session, id),
            Some(json!({"field": field, "value": value})),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "setting {} on row {}", field, id);
    }
}

// =============================================================================
// Stateless endpoints
// =============================================================================

#[tokio::test]
async fn equal_judgments_give_equal_weights() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ahp/compute",
        Some(json!({"alternatives": two_phones(), "judgments": equal_judgments()})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    for criterion in ["price", "performance", "battery", "screen"] {
        assert!((weight_of(&body, criterion) - 0.25).abs() < 1e-9);
    }
    assert_eq!(body["ranking"][0]["name"], "X");
    assert_eq!(body["ranking"][0]["score"], 1.0);
    assert_eq!(body["ranking"][1]["score"], 0.0);
    assert_eq!(body["consistency"]["is_consistent"], true);
    assert!(body["computed_at"].is_string());
}

#[tokio::test]
async fn absolute_price_preference_dominates_weights() {
    let app = app();
    let mut judgments = equal_judgments();
    judgments["price-performance"] = json!({"value": 9, "direction": "left"});

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ahp/compute",
        Some(json!({"alternatives": two_phones(), "judgments": judgments})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let price = weight_of(&body, "price");
    for other in ["performance", "battery", "screen"] {
        assert!(price > weight_of(&body, other));
    }
}

#[tokio::test]
async fn string_attributes_degrade_to_zero() {
    let app = app();
    let alternatives = json!([
        {"id": 1, "name": "Typed", "price": "7.5", "performance": "abc", "battery": "", "screen": "6"},
        {"id": 2, "name": "Other", "price": 7.5, "performance": 0, "battery": 0, "screen": 6}
    ]);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ahp/compute",
        Some(json!({"alternatives": alternatives, "judgments": equal_judgments()})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranking"][0]["performance"], 0.0);
    assert_eq!(body["ranking"][0]["score"], body["ranking"][1]["score"]);
    assert_eq!(body["ranking"][0]["name"], "Typed");
}

#[tokio::test]
async fn missing_judgment_is_unprocessable() {
    let app = app();
    let mut judgments = equal_judgments();
    judgments.as_object_mut().unwrap().remove("battery-screen");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ahp/compute",
        Some(json!({"alternatives": two_phones(), "judgments": judgments})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INCOMPLETE_JUDGMENTS");
    assert_eq!(body["details"]["missing_pairs"], json!(["battery-screen"]));
}

#[tokio::test]
async fn off_scale_intensity_is_bad_request() {
    let app = app();
    let mut judgments = equal_judgments();
    judgments["price-screen"] = json!({"value": 4, "direction": "left"});

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ahp/compute",
        Some(json!({"alternatives": two_phones(), "judgments": judgments})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn empty_alternatives_are_bad_request() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ahp/compute",
        Some(json!({"alternatives": [], "judgments": equal_judgments()})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn zero_alternative_id_is_bad_request() {
    let app = app();
    let mut alternatives = two_phones();
    alternatives[0]["id"] = json!(0);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ahp/compute",
        Some(json!({"alternatives": alternatives, "judgments": equal_judgments()})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn reject_policy_refuses_inconsistent_judgments() {
    let app = app_with(AhpEngine::new(
        ConsistencyPolicy::Reject,
        DEFAULT_CONSISTENCY_THRESHOLD,
    ));
    let mut judgments = equal_judgments();
    judgments["price-performance"] = json!({"value": 9, "direction": "left"});
    judgments["performance-battery"] = json!({"value": 9, "direction": "left"});
    judgments["price-battery"] = json!({"value": 9, "direction": "right"});

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ahp/compute",
        Some(json!({"alternatives": two_phones(), "judgments": judgments})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INCONSISTENT_JUDGMENTS");
    assert!(body["details"]["consistency_ratio"].as_f64().unwrap() > 0.1);
}

#[tokio::test]
async fn criteria_endpoint_lists_table_and_scale() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/ahp/criteria", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["criteria"][0]["key"], "price");
    assert_eq!(body["criteria"][0]["polarity"], "lower_is_better");
    assert_eq!(body["pairs"], json!(PAIRS));
    assert_eq!(body["intensities"][0]["value"], 9);
}

// =============================================================================
// Wizard session
// =============================================================================

#[tokio::test]
async fn wizard_walks_through_all_three_steps() {
    let app = app();

    // Step 1
    let (status, created) = send(&app, Method::POST, "/api/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["step"], "collecting_alternatives");
    assert_eq!(created["alternatives"].as_array().unwrap().len(), 1);

    fill_row(&app, &id, 1, "X", ["5", "8", "7", "6"]).await;

    let (status, body) = send(&app, Method::POST, &format!("/api/sessions/{}/proceed", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INCOMPLETE_ALTERNATIVES");

    let (status, added) = send(
        &app,
        Method::POST,
        &format!("/api/sessions/{}/alternatives", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(added["alternative_id"], 2);
    fill_row(&app, &id, 2, "Y", ["10", "5", "5", "5"]).await;

    // Step 2
    let (status, body) = send(&app, Method::POST, &format!("/api/sessions/{}/proceed", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "collecting_judgments");
    assert_eq!(body["step_number"], 2);

    let (status, body) = send(&app, Method::POST, &format!("/api/sessions/{}/compute", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["missing_pairs"].as_array().unwrap().len(), 6);

    for pair in PAIRS {
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/sessions/{}/judgments/{}", id, pair),
            Some(json!({"value": 1, "direction": "left"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // Step 3
    let (status, body) = send(&app, Method::POST, &format!("/api/sessions/{}/compute", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "computed");
    assert_eq!(body["result"]["ranking"][0]["name"], "X");
    let total: f64 = body["result"]["weights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["weight"].as_f64().unwrap())
        .sum();
    assert!((total - 1.0).abs() < 1e-9);

    let (status, fetched) = send(&app, Method::GET, &format!("/api/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["result"], body["result"]);

    // New analysis keeps the phones
    let (status, body) = send(&app, Method::POST, &format!("/api/sessions/{}/reset", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "collecting_alternatives");
    assert_eq!(body["alternatives"].as_array().unwrap().len(), 2);
    assert!(body["result"].is_null());
}

#[tokio::test]
async fn fourth_alternative_is_refused() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/sessions", None).await;
    let uri = format!("/api/sessions/{}/alternatives", created["id"].as_str().unwrap());

    for _ in 0..2 {
        let (status, _) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "ALTERNATIVE_LIMIT_REACHED");
}

#[tokio::test]
async fn last_alternative_cannot_be_deleted() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/sessions", None).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/sessions/{}/alternatives/1", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "LAST_ALTERNATIVE");
}

#[tokio::test]
async fn judgments_before_step_two_are_refused() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/sessions", None).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/sessions/{}/judgments/price-screen", id),
        Some(json!({"value": 5, "direction": "right"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
    assert_eq!(body["details"]["expected_step"], "collecting_judgments");
}

#[tokio::test]
async fn unknown_and_malformed_sessions() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/sessions/00000000-0000-4000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");

    let (status, _) = send(&app, Method::GET, "/api/sessions/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleted_session_is_gone() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/sessions", None).await;
    let uri = format!("/api/sessions/{}", created["id"].as_str().unwrap());
    assert_eq!(created["version"], 1);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn reversed_pair_key_is_bad_request() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/sessions", None).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/sessions/{}/judgments/screen-price", id),
        Some(json!({"value": 1, "direction": "left"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

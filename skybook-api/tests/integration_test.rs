use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use skybook_api::{app, AppState};
use skybook_catalog::{PricingEngine, StaticFlightCatalog};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(
        Arc::new(StaticFlightCatalog::new()),
        PricingEngine::default(),
    ))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn new_session(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/v1/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["step"], "SEARCH");
    body["session_id"].as_str().unwrap().to_string()
}

async fn search(app: &Router, id: &str, passengers: u8) -> (StatusCode, Value) {
    let req = json!({
        "origin": "New York",
        "destination": "London",
        "date": "2025-05-20",
        "passengers": passengers,
        "cabin_class": "economy"
    });
    send(app, "POST", &format!("/v1/sessions/{}/search", id), Some(req)).await
}

async fn fill_details(app: &Router, id: &str) {
    let passenger = json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@example.com",
        "phone": "555-0100"
    });
    let payment = json!({
        "card_number": "4242 4242 4242 4242",
        "expiry_date": "09/28",
        "cvv": "321"
    });
    let (status, _) = send(app, "PUT", &format!("/v1/sessions/{}/passenger", id), Some(passenger)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(app, "PUT", &format!("/v1/sessions/{}/payment", id), Some(payment)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_booking_flow() {
    let app = test_app();
    let id = new_session(&app).await;

    let (status, body) = search(&app, &id, 2).await;
    assert_eq!(status, StatusCode::OK);
    let flights = body["flights"].as_array().unwrap();
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0]["flight_number"], "SW123");
    assert_eq!(flights[0]["duration"], "2h 30m");

    let (status, body) = send(&app, "POST", &format!("/v1/sessions/{}/flight", id), Some(json!({ "flight_id": 1 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["required_seats"], 2);
    assert_eq!(body["quote"]["total"], 598);

    for seat in ["3A", "4A"] {
        let (status, body) = send(&app, "POST", &format!("/v1/sessions/{}/seats/{}", id, seat), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "SELECTED");
    }

    // third seat for two passengers is refused
    let (_, body) = send(&app, "POST", &format!("/v1/sessions/{}/seats/5A", id), None).await;
    assert_eq!(body["result"], "LIMIT_REACHED");
    assert_eq!(body["selected"], json!(["3A", "4A"]));

    let (_, body) = send(&app, "POST", &format!("/v1/sessions/{}/baggage/1", id), None).await;
    assert_eq!(body["result"], "ADDED");
    let (_, body) = send(&app, "POST", &format!("/v1/sessions/{}/meals/1", id), None).await;
    assert_eq!(body["quote"]["total"], 643);

    fill_details(&app, &id).await;

    let (status, body) = send(&app, "POST", &format!("/v1/sessions/{}/booking", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seats"], json!(["3A", "4A"]));
    assert_eq!(body["price"]["total"], 643);
    assert_eq!(body["message"], "Booking successful! Check your email for confirmation.");
    assert!(body.get("card_number").is_none());

    // draft discarded, session back at search
    let (_, body) = send(&app, "GET", &format!("/v1/sessions/{}", id), None).await;
    assert_eq!(body["step"], "SEARCH");
    assert_eq!(body["seats"], json!([]));
}

#[tokio::test]
async fn test_seat_count_mismatch_rejected() {
    let app = test_app();
    let id = new_session(&app).await;
    search(&app, &id, 2).await;
    send(&app, "POST", &format!("/v1/sessions/{}/flight", id), Some(json!({ "flight_id": 2 }))).await;
    send(&app, "POST", &format!("/v1/sessions/{}/seats/7A", id), None).await;
    fill_details(&app, &id).await;

    let (status, body) = send(&app, "POST", &format!("/v1/sessions/{}/booking", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Please select seats for all passengers");
    assert_eq!(body["required"], 2);
    assert_eq!(body["selected"], 1);

    // nothing was lost
    let (_, body) = send(&app, "GET", &format!("/v1/sessions/{}", id), None).await;
    assert_eq!(body["step"], "BOOKING");
    assert_eq!(body["seats"], json!(["7A"]));
}

#[tokio::test]
async fn test_seat_map_layout() {
    let app = test_app();
    let id = new_session(&app).await;
    search(&app, &id, 1).await;
    send(&app, "POST", &format!("/v1/sessions/{}/flight", id), Some(json!({ "flight_id": 1 }))).await;
    send(&app, "POST", &format!("/v1/sessions/{}/seats/2A", id), None).await;

    let (status, body) = send(&app, "GET", &format!("/v1/sessions/{}/seat-map", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 30);
    let row2 = rows[1]["cells"].as_array().unwrap();
    assert_eq!(row2.len(), 7);
    assert_eq!(row2[0], json!({ "kind": "SEAT", "id": "2A", "state": "SELECTED" }));
    assert_eq!(row2[1], json!({ "kind": "EMPTY" }));
    assert_eq!(row2[3], json!({ "kind": "AISLE", "row": 2 }));
}

#[tokio::test]
async fn test_invalid_search_rejected() {
    let app = test_app();
    let id = new_session(&app).await;

    let (status, body) = search(&app, &id, 12).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("passengers"));
}

#[tokio::test]
async fn test_malformed_search_body_is_bad_request() {
    let app = test_app();
    let id = new_session(&app).await;
    let uri = format!("/v1/sessions/{}/search", id);

    let bodies = [
        json!({ "origin": "Paris", "destination": "Rome", "date": "2025-13-40" }),
        json!({ "destination": "Rome", "date": "2025-05-20" }),
        json!({ "origin": "Paris", "destination": "Rome", "date": "2025-05-20", "passengers": 300 }),
        json!({ "origin": "Paris", "destination": "Rome", "date": "2025-05-20", "cabin_class": "premium" }),
    ];

    for body in bodies {
        let (status, response) = send(&app, "POST", &uri, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["error"].is_string());
    }

    // still waiting for a valid search
    let (_, body) = send(&app, "GET", &format!("/v1/sessions/{}", id), None).await;
    assert_eq!(body["step"], "SEARCH");
}

#[tokio::test]
async fn test_malformed_booking_bodies_are_bad_request() {
    let app = test_app();
    let id = new_session(&app).await;
    search(&app, &id, 1).await;

    let (status, body) = send(&app, "POST", &format!("/v1/sessions/{}/flight", id), Some(json!({ "flight_id": "one" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    send(&app, "POST", &format!("/v1/sessions/{}/flight", id), Some(json!({ "flight_id": 1 }))).await;

    let (status, body) = send(&app, "PUT", &format!("/v1/sessions/{}/passenger", id), Some(json!({ "first_name": "Grace" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "PUT", &format!("/v1/sessions/{}/payment", id), Some(json!({ "cvv": 321 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_session_summary_timestamps() {
    let app = test_app();
    let id = new_session(&app).await;

    let (_, body) = send(&app, "GET", &format!("/v1/sessions/{}", id), None).await;
    let created: chrono::DateTime<chrono::Utc> = serde_json::from_value(body["created_at"].clone()).unwrap();
    let active: chrono::DateTime<chrono::Utc> = serde_json::from_value(body["last_active"].clone()).unwrap();
    assert!(active >= created);
}

#[tokio::test]
async fn test_out_of_order_steps() {
    let app = test_app();
    let id = new_session(&app).await;

    let (status, _) = send(&app, "POST", &format!("/v1/sessions/{}/seats/1A", id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, "POST", &format!("/v1/sessions/{}/flight", id), Some(json!({ "flight_id": 1 }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    search(&app, &id, 1).await;
    let (status, _) = send(&app, "POST", &format!("/v1/sessions/{}/flight", id), Some(json!({ "flight_id": 42 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_session() {
    let app = test_app();
    let uri = format!("/v1/sessions/{}", uuid_like());

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = new_session(&app).await;
    let (status, _) = send(&app, "DELETE", &format!("/v1/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/v1/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn uuid_like() -> &'static str {
    "00000000-0000-4000-8000-000000000000"
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ServicesClient against an in-process backend.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use upn_api::{ServicesBackend, ServicesClient};
use upn_core::types::{ServiceDraft, ServiceId};
use upn_core::{ApiError, AppConfig};

/// Mongo-backed FastAPI shape: `_id` keys, naive timestamps.
#[derive(Default)]
struct FakeBackend {
    services: Vec<Value>,
    list_status: Option<StatusCode>,
    raw_list_body: Option<&'static str>,
    usage: Vec<Value>,
    phones: Vec<Value>,
    requests: Vec<String>,
}

type Shared = Arc<Mutex<FakeBackend>>;

async fn list(State(state): State<Shared>) -> axum::response::Response {
    let mut backend = state.lock().unwrap();
    backend.requests.push("GET /api/services".into());
    if let Some(status) = backend.list_status {
        return (status, Json(json!({"detail": "boom"}))).into_response();
    }
    if let Some(raw) = backend.raw_list_body {
        return (StatusCode::OK, raw).into_response();
    }
    Json(Value::Array(backend.services.clone())).into_response()
}

async fn create(State(state): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut backend = state.lock().unwrap();
    backend.requests.push("POST /api/services".into());
    let created = json!({
        "_id": format!("id-{}", backend.services.len() + 1),
        "name": body["name"],
        "logo_base64": body["logo_base64"],
        "created_at": "2025-03-01T10:15:30.123456",
    });
    backend.services.push(created.clone());
    Json(created)
}

fn position(backend: &FakeBackend, id: &str) -> Option<usize> {
    backend.services.iter().position(|s| s["_id"] == id)
}

async fn get_one(State(state): State<Shared>, Path(id): Path<String>) -> axum::response::Response {
    let mut backend = state.lock().unwrap();
    backend.requests.push(format!("GET /api/services/{id}"));
    match position(&backend, &id) {
        Some(i) => Json(backend.services[i].clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Service not found"}))).into_response(),
    }
}

async fn update(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let mut backend = state.lock().unwrap();
    backend.requests.push(format!("PUT /api/services/{id}"));
    match position(&backend, &id) {
        Some(i) => {
            backend.services[i]["name"] = body["name"].clone();
            backend.services[i]["logo_base64"] = body["logo_base64"].clone();
            Json(backend.services[i].clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete(State(state): State<Shared>, Path(id): Path<String>) -> axum::response::Response {
    let mut backend = state.lock().unwrap();
    backend.requests.push(format!("DELETE /api/services/{id}"));
    match position(&backend, &id) {
        Some(i) => {
            backend.services.remove(i);
            Json(json!({"message": "Service deleted successfully"})).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Service not found"}))).into_response(),
    }
}

async fn usage(State(state): State<Shared>) -> Json<Value> {
    let mut backend = state.lock().unwrap();
    backend.requests.push("GET /api/usage".into());
    Json(Value::Array(backend.usage.clone()))
}

async fn phones(State(state): State<Shared>) -> Json<Value> {
    let mut backend = state.lock().unwrap();
    backend.requests.push("GET /api/phones".into());
    Json(Value::Array(backend.phones.clone()))
}

async fn start(backend: FakeBackend) -> (ServicesClient, Shared) {
    let state: Shared = Arc::new(Mutex::new(backend));
    let app = Router::new()
        .route("/api/services", get(list).post(create))
        .route("/api/services/:id", get(get_one).put(update).delete(delete))
        .route("/api/usage", get(usage))
        .route("/api/phones", get(phones))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {e}");
        }
    });

    let config = AppConfig::new(format!("http://{addr}")).unwrap();
    (ServicesClient::new(&config).unwrap(), state)
}

fn seeded() -> FakeBackend {
    FakeBackend {
        services: vec![
            json!({"_id": "b2", "name": "Сбер", "logo_base64": null, "created_at": "2025-01-02T00:00:00"}),
            json!({"_id": "a1", "name": "acme", "created_at": "2025-01-01T00:00:00"}),
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn list_keeps_backend_order() {
    let (client, _) = start(seeded()).await;
    let services = client.list_services().await.unwrap();
    let ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["b2", "a1"]);
    assert_eq!(services[1].logo_base64, None);
}

#[tokio::test]
async fn list_error_status_is_http_failure() {
    let (client, _) = start(FakeBackend {
        list_status: Some(StatusCode::INTERNAL_SERVER_ERROR),
        ..Default::default()
    })
    .await;
    assert_eq!(client.list_services().await, Err(ApiError::Http(500)));
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let (client, _) = start(FakeBackend {
        raw_list_body: Some("{\"not\": \"a list\"}"),
        ..Default::default()
    })
    .await;
    assert!(matches!(
        client.list_services().await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_backend_is_network_failure() {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = AppConfig::new(format!("http://{addr}")).unwrap();
    let client = ServicesClient::new(&config).unwrap();
    assert!(matches!(
        client.list_services().await,
        Err(ApiError::Network(_))
    ));
}

#[tokio::test]
async fn delete_then_missing_is_not_found() {
    let (client, state) = start(seeded()).await;
    let id = ServiceId::from("a1");

    client.delete_service(&id).await.unwrap();
    assert_eq!(client.delete_service(&id).await, Err(ApiError::Http(404)));
    assert_eq!(state.lock().unwrap().services.len(), 1);
}

#[tokio::test]
async fn create_update_and_fetch_round_trip_through_backend() {
    let (client, state) = start(FakeBackend::default()).await;

    let created = client
        .create_service(&ServiceDraft::new("Яндекс"))
        .await
        .unwrap();
    assert_eq!(created.name, "Яндекс");

    let updated = client
        .update_service(&created.id, &ServiceDraft::new("Яндекс Go").with_logo("iVBOR"))
        .await
        .unwrap();
    assert_eq!(updated.logo_base64.as_deref(), Some("iVBOR"));

    let fetched = client.get_service(&created.id).await.unwrap();
    assert_eq!(fetched.name, "Яндекс Go");
    assert!(fetched.created_at_utc().is_some());

    let requests = state.lock().unwrap().requests.clone();
    assert_eq!(
        requests,
        [
            "POST /api/services".to_string(),
            format!("PUT /api/services/{}", created.id),
            format!("GET /api/services/{}", created.id),
        ]
    );
}

#[tokio::test]
async fn get_missing_service_is_not_found() {
    let (client, _) = start(seeded()).await;
    let err = client.get_service(&ServiceId::from("nope")).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn usage_and_phones_decode_backend_records() {
    let (client, state) = start(FakeBackend {
        usage: vec![json!({
            "_id": "u1",
            "phone_id": "p1",
            "service_id": "a1",
            "used_at": "2025-03-01T10:15:30.123456",
        })],
        phones: vec![json!({
            "_id": "p1",
            "number": "+7 965 109 11 62",
            "operator_id": "o1",
            "created_at": "2025-01-01T00:00:00",
        })],
        ..Default::default()
    })
    .await;

    let usage = client.list_usage().await.unwrap();
    assert_eq!(usage[0].service_id, ServiceId::from("a1"));
    assert_eq!(usage[0].phone_id, "p1");

    let phones = client.list_phones().await.unwrap();
    assert_eq!(phones[0].number, "+7 965 109 11 62");

    assert_eq!(
        state.lock().unwrap().requests,
        ["GET /api/usage", "GET /api/phones"]
    );
}

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use patient_vitals_api::{create_app, ServerConfig};
use patient_vitals_data::database::{DatabaseConfig, DatabaseType};
use patient_vitals_data::models::Fields;
use patient_vitals_data::repository::{
    create_document_store, DocumentStore, InMemoryDocumentStore,
    SharedDocumentStore,
};
use serde_json::{json, Value};
use std::sync::{Arc, Once};
use tempfile::TempDir;
use tower::ServiceExt;

// Ensure tracing is initialized only once
static INIT: Once = Once::new();

fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

fn test_app(store: SharedDocumentStore) -> Router {
    initialize();
    create_app(store, &ServerConfig::default())
}

fn fields(value: Value) -> Fields {
    value.as_object().cloned().expect("test fields must be an object")
}

async fn send(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn test_lookup_rejects_other_methods() {
    let app = test_app(Arc::new(InMemoryDocumentStore::new()));

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        for uri in ["/patients/p1", "/get_patient/p1"] {
            let (status, body) = send(&app, method.clone(), uri, "").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
            assert_eq!(body, json!({"error": "Method not allowed"}));
        }
    }
}

#[tokio::test]
async fn test_ingest_rejects_other_methods() {
    let store = InMemoryDocumentStore::new();
    let app = test_app(Arc::new(store.clone()));

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        for uri in ["/patients/p1/vitals", "/add_vital/p1/vitals"] {
            let (status, body) = send(&app, method.clone(), uri, r#"{"hr": 72}"#).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
            assert_eq!(body, json!({"error": "Method not allowed"}));
        }
    }

    assert_eq!(store.document_count("vitals").unwrap(), 0);
}

#[tokio::test]
async fn test_lookup_existing_and_missing_patient() {
    let store = InMemoryDocumentStore::new();
    store.set("users", "p1", fields(json!({"name": "Alice"}))).await.unwrap();
    let app = test_app(Arc::new(store));

    let (status, body) = send(&app, Method::GET, "/patients/p1", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Alice"}));

    let (status, body) = send(&app, Method::GET, "/get_patient/p1", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Alice"}));

    let (status, body) = send(&app, Method::GET, "/patients/nope", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Patient not found"}));
}

#[tokio::test]
async fn test_ingest_missing_body() {
    let store = InMemoryDocumentStore::new();
    let app = test_app(Arc::new(store.clone()));

    for body in ["", "{}", "null"] {
        let (status, response) = send(&app, Method::POST, "/patients/p1/vitals", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
        assert_eq!(response, json!({"error": "Missing body"}));
    }

    assert_eq!(store.document_count("vitals").unwrap(), 0);
}

#[tokio::test]
async fn test_ingest_stores_reading_with_patient_id() {
    let store = InMemoryDocumentStore::new();
    let app = test_app(Arc::new(store.clone()));

    let (status, body) = send(&app, Method::POST, "/patients/p1/vitals", r#"{"hr": 72}"#).await;
    assert_eq!(status, StatusCode::CREATED);

    let id = body["id"].as_str().expect("response should carry the new id");
    let stored = store.get("vitals", id).await.unwrap().expect("vital should be stored");
    assert_eq!(Value::Object(stored.fields), json!({"hr": 72, "patientId": "p1"}));
}

#[tokio::test]
async fn test_identical_ingests_create_distinct_documents() {
    let store = InMemoryDocumentStore::new();
    let app = test_app(Arc::new(store.clone()));

    let (first_status, first) = send(&app, Method::POST, "/add_vital/p1/vitals", r#"{"hr": 72}"#).await;
    let (second_status, second) = send(&app, Method::POST, "/add_vital/p1/vitals", r#"{"hr": 72}"#).await;

    assert_eq!(first_status, StatusCode::CREATED);
    assert_eq!(second_status, StatusCode::CREATED);
    assert_ne!(first["id"], second["id"]);
    assert_eq!(store.document_count("vitals").unwrap(), 2);
}

#[tokio::test]
async fn test_caller_patient_id_is_overwritten() {
    let store = InMemoryDocumentStore::new();
    let app = test_app(Arc::new(store.clone()));

    let (status, body) = send(
        &app,
        Method::POST,
        "/patients/p1/vitals",
        r#"{"hr": 72, "patientId": "p2"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = body["id"].as_str().unwrap();
    let stored = store.get("vitals", id).await.unwrap().unwrap();
    assert_eq!(stored.fields["patientId"], "p1");
}

#[tokio::test]
async fn test_percent_encoded_patient_ids_are_decoded() {
    let store = InMemoryDocumentStore::new();
    store.set("users", "a b", fields(json!({"name": "Space"}))).await.unwrap();
    let app = test_app(Arc::new(store.clone()));

    for uri in ["/patients/a%20b", "/get_patient/a%20b"] {
        let (status, body) = send(&app, Method::GET, uri, "").await;
        assert_eq!(status, StatusCode::OK, "uri {}", uri);
        assert_eq!(body, json!({"name": "Space"}));
    }

    let (status, body) = send(&app, Method::POST, "/patients/a%20b/vitals", r#"{"hr": 72}"#).await;
    assert_eq!(status, StatusCode::CREATED);

    let id = body["id"].as_str().unwrap();
    let stored = store.get("vitals", id).await.unwrap().unwrap();
    assert_eq!(stored.fields["patientId"], "a b");
}

#[tokio::test]
async fn test_trailing_slashes_are_routed() {
    let store = InMemoryDocumentStore::new();
    store.set("users", "p1", fields(json!({"name": "Alice"}))).await.unwrap();
    let app = test_app(Arc::new(store.clone()));

    let (status, body) = send(&app, Method::GET, "/patients/p1/", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Alice"}));

    for uri in ["/patients/p1/vitals/", "/add_vital/p1/vitals/"] {
        let (status, body) = send(&app, Method::POST, uri, r#"{"hr": 72}"#).await;
        assert_eq!(status, StatusCode::CREATED, "uri {}", uri);
        assert!(body["id"].is_string());
    }
    assert_eq!(store.document_count("vitals").unwrap(), 2);
}

#[tokio::test]
async fn test_unrouted_paths_get_json_not_found() {
    let app = test_app(Arc::new(InMemoryDocumentStore::new()));

    let cases = [
        (Method::GET, "/get_patient"),
        (Method::GET, "/get_patient/"),
        (Method::POST, "/add_vital"),
        (Method::GET, "/patients"),
        (Method::GET, "/nowhere/at/all"),
    ];
    for (method, uri) in cases {
        let (status, body) = send(&app, method.clone(), uri, r#"{"hr": 72}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body, json!({"error": "Not found"}), "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_health_and_openapi_document() {
    let app = test_app(Arc::new(InMemoryDocumentStore::new()));

    let (status, body) = send(&app, Method::GET, "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"]["store"]["status"], "ok");
    assert_eq!(body["environment"], "development");

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/patients/{id}/vitals"].is_object());
}

fn sqlite_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        db_type: DatabaseType::Sqlite,
        sqlite_path: dir.path().join("patient_vitals.db").to_string_lossy().to_string(),
        ..DatabaseConfig::default()
    }
}

#[tokio::test]
async fn test_sqlite_backed_round_trip() {
    let dir = TempDir::new().expect("temp dir should be created");
    let store = create_document_store(&sqlite_config(&dir)).expect("sqlite store should open");
    store.set("users", "p1", fields(json!({"name": "Alice", "age": 42}))).await.unwrap();

    let app = test_app(store.clone());

    let (status, body) = send(&app, Method::GET, "/patients/p1", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Alice", "age": 42}));

    let (status, body) = send(&app, Method::POST, "/patients/p1/vitals", r#"{"bp": "120/80"}"#).await;
    assert_eq!(status, StatusCode::CREATED);

    let id = body["id"].as_str().unwrap();
    let stored = store.get("vitals", id).await.unwrap().unwrap();
    assert_eq!(Value::Object(stored.fields), json!({"bp": "120/80", "patientId": "p1"}));
}

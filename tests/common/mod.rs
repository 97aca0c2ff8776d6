// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    response::Response,
    routing::get as route_get,
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use techpathfinder::config::Config;
use techpathfinder::db::FirestoreDb;
use techpathfinder::models::User;
use techpathfinder::routes::create_router;
use techpathfinder::services::seed::initialize_career_paths;
use techpathfinder::AppState;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project", "(default)")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app over a seeded in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with(Config::test_default()).await
}

#[allow(dead_code)]
pub async fn create_test_app_with(config: Config) -> (Router, Arc<AppState>) {
    let db = FirestoreDb::in_memory();
    initialize_career_paths(&db)
        .await
        .expect("seeding the in-memory store");

    let state = Arc::new(AppState::new(config, db));
    (create_router(state.clone()), state)
}

/// Create a test app whose store is unreachable.
#[allow(dead_code)]
pub fn create_offline_app() -> Router {
    let state = Arc::new(AppState::new(Config::test_default(), FirestoreDb::new_mock()));
    create_router(state)
}

/// Store a user and issue a bearer session for them.
#[allow(dead_code)]
pub async fn create_session(state: &AppState, email: &str) -> (User, String) {
    let now = Utc::now();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        email: email.to_string(),
        name: "Test User".to_string(),
        picture: None,
        created_at: now,
        last_login: now,
    };
    state.db.upsert_user(&user).await.unwrap();
    let session = state.sessions.issue(&user.id, now).await.unwrap();
    (user, session.session_token)
}

/// Send one request through the router.
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Provider session IDs understood by the mock identity provider.
#[allow(dead_code)]
pub const ADA_SESSION: &str = "session-ada";
#[allow(dead_code)]
pub const ADA_SECOND_SESSION: &str = "session-ada-again";
#[allow(dead_code)]
pub const NAMELESS_SESSION: &str = "session-without-name";

async fn mock_session_data(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    let session_id = headers
        .get("X-Session-ID")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    match session_id {
        ADA_SESSION | ADA_SECOND_SESSION => Ok(Json(json!({
            "id": "provider-ada",
            "email": "ada@example.com",
            "name": "Ada Lovelace",
            "picture": "https://example.com/ada.png",
            "session_token": "provider-owned-token"
        }))),
        NAMELESS_SESSION => Ok(Json(json!({ "email": "nobody@example.com" }))),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Start a local identity provider and return its session-data URL.
#[allow(dead_code)]
pub async fn spawn_identity_provider() -> String {
    let app = Router::new().route("/session-data", route_get(mock_session_data));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/session-data", addr)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Bearer session authentication and CORS tests.
//!
//! These tests verify that:
//! 1. Protected routes reject requests without a valid, unexpired session
//! 2. Protected routes resolve the session to the stored user
//! 3. CORS preflight requests return correct headers

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use techpathfinder::error::AppError;

mod common;

fn profile_request(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/user/profile");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _) = common::create_test_app().await;

    let response = common::send(&app, profile_request(None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_protected_route_with_unknown_token() {
    let (app, _) = common::create_test_app().await;

    let response = common::send(&app, profile_request(Some("Bearer not-a-session"))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "invalid_session");
}

#[tokio::test]
async fn test_protected_route_with_valid_token() {
    let (app, state) = common::create_test_app().await;
    let (user, token) = common::create_session(&state, "grace@example.com").await;

    let response = common::send(&app, profile_request(Some(&format!("Bearer {}", token)))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["id"], user.id);
    assert_eq!(body["email"], "grace@example.com");
}

#[tokio::test]
async fn test_expired_session_is_rejected() {
    let (app, state) = common::create_test_app().await;
    let (user, _) = common::create_session(&state, "expired@example.com").await;

    let issued = Utc::now() - Duration::days(8);
    let session = state.sessions.issue(&user.id, issued).await.unwrap();

    let auth = format!("Bearer {}", session.session_token);
    let response = common::send(&app, profile_request(Some(&auth))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_expiry_boundary() {
    let (_, state) = common::create_test_app().await;
    let (_, token) = common::create_session(&state, "boundary@example.com").await;
    let session = state.db.get_session(&token).await.unwrap().unwrap();

    let just_before = session.expires_at - Duration::milliseconds(1);
    assert!(state.sessions.authenticate_at(&token, just_before).await.is_ok());

    let at_expiry = state
        .sessions
        .authenticate_at(&token, session.expires_at)
        .await;
    assert!(matches!(at_expiry, Err(AppError::InvalidSession)));
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let (app, state) = common::create_test_app().await;
    let (_, token) = common::create_session(&state, "basic@example.com").await;

    let response = common::send(&app, profile_request(Some(&format!("Basic {}", token)))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = common::create_test_app().await;

    let response = common::send(
        &app,
        Request::builder()
            .method("OPTIONS")
            .uri("/api/auth/profile")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-session-id")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    // OPTIONS should return 200 (CORS preflight success)
    assert_eq!(response.status(), StatusCode::OK);

    // Should have CORS headers
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_public_route_no_auth_required() {
    let (app, _) = common::create_test_app().await;

    let response = common::get(&app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "TechPathfinder API");
}

#[tokio::test]
async fn test_path_like_token_is_invalid_session() {
    let (app, _) = common::create_test_app().await;

    let response = common::send(&app, profile_request(Some("Bearer a/b"))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "invalid_session");
}

#[tokio::test]
async fn test_cors_rejects_lookalike_localhost_origin() {
    let (app, _) = common::create_test_app().await;

    let response = common::send(
        &app,
        Request::builder()
            .method("OPTIONS")
            .uri("/api/auth/profile")
            .header(header::ORIGIN, "http://localhost.attacker.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Login routes backed by the external identity provider.

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::services::identity::SESSION_ID_HEADER;
use crate::services::ProfileExchange;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/profile", post(create_profile))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginResponse {
    pub auth_url: String,
}

/// Hosted login page URL; the provider sends the user back to `{frontend}/profile`.
async fn login(State(state): State<Arc<AppState>>) -> Json<LoginResponse> {
    let redirect = format!("{}/profile", state.config.frontend_url);
    let auth_url = format!(
        "{}/?redirect={}",
        state.config.auth_portal_url,
        urlencoding::encode(&redirect)
    );

    Json(LoginResponse { auth_url })
}

/// Exchange the provider session ID (X-Session-ID header) for a bearer session.
async fn create_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ProfileExchange>> {
    let session_id = headers
        .get(SESSION_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Session ID required".to_string()))?;

    let exchange = state.identity.exchange_profile(session_id).await?;
    Ok(Json(exchange))
}

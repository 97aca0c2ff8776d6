// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Bearer session authentication middleware.

use crate::error::AppError;
use crate::models::User;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated user, attached to the request by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Middleware that requires a valid bearer session.
///
/// The session is looked up in the store on every request.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)
        .map(str::to_owned)
        .ok_or(AppError::Unauthorized)?;

    let user = state.sessions.authenticate(&token).await.map_err(|e| {
        tracing::debug!(error = %e, "Bearer authentication failed");
        e
    })?;

    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

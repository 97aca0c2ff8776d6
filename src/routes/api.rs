// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! API routes for authenticated users.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::job::JobApplicationRequest;
use crate::models::{ApplicationStatus, JobApplication, User};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use validator::Validate;

/// API routes (require a bearer session).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user/profile", get(get_profile))
        .route("/api/jobs/apply", post(apply_for_job))
        .route("/api/jobs/my-applications", get(my_applications))
}

// ─── User Profile ────────────────────────────────────────────

/// The stored record of the authenticated user.
async fn get_profile(Extension(AuthUser(user)): Extension<AuthUser>) -> Json<User> {
    Json(user)
}

// ─── Job Applications ────────────────────────────────────────

async fn apply_for_job(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    payload: std::result::Result<Json<JobApplicationRequest>, JsonRejection>,
) -> Result<Json<JobApplication>> {
    let Json(request) = payload?;
    request.validate()?;

    let application = JobApplication {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user.id.clone(),
        job_id: request.job_id,
        applicant_name: request.applicant_name,
        email: request.email,
        phone: request.phone.filter(|p| !p.trim().is_empty()),
        cover_letter: request.cover_letter,
        status: ApplicationStatus::Applied,
        applied_at: chrono::Utc::now(),
    };

    state.db.insert_job_application(&application).await?;

    tracing::info!(
        user_id = %user.id,
        job_id = %application.job_id,
        application_id = %application.id,
        "Job application submitted"
    );

    Ok(Json(application))
}

async fn my_applications(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Json<Vec<JobApplication>>> {
    let applications = state.db.list_job_applications_for_user(&user.id).await?;
    Ok(Json(applications))
}

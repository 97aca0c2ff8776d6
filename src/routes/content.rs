// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Public content routes: career paths, blog, guidance, resume templates, job search.

use crate::error::{AppError, Result};
use crate::models::job::JobSearchRequest;
use crate::models::{BlogPost, CareerPath, JobGuidance, ResumeTemplate, ResumeTemplateContent};
use crate::services::{content, JobSearchResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/career-paths", get(list_career_paths))
        .route("/api/career-paths/{path_id}", get(get_career_path))
        .route("/api/blog/posts", get(blog_posts))
        .route("/api/job-guidance", get(job_guidance))
        .route("/api/resume-templates", get(resume_templates))
        .route(
            "/api/resume-templates/{template_id}/download",
            get(download_resume_template),
        )
        .route("/api/jobs/search", post(search_jobs))
}

// ─── Career Paths ────────────────────────────────────────────

#[derive(Serialize)]
pub struct CareerPathsResponse {
    pub career_paths: Vec<CareerPath>,
}

async fn list_career_paths(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CareerPathsResponse>> {
    let career_paths = state.db.list_career_paths().await?;
    Ok(Json(CareerPathsResponse { career_paths }))
}

async fn get_career_path(
    State(state): State<Arc<AppState>>,
    Path(path_id): Path<String>,
) -> Result<Json<CareerPath>> {
    state
        .db
        .get_career_path(&path_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Career path not found".to_string()))
}

// ─── Guidance Content ────────────────────────────────────────

#[derive(Serialize)]
pub struct BlogPostsResponse {
    pub posts: Vec<BlogPost>,
}

async fn blog_posts() -> Json<BlogPostsResponse> {
    Json(BlogPostsResponse {
        posts: content::blog_posts(chrono::Utc::now()),
    })
}

async fn job_guidance() -> Json<JobGuidance> {
    Json(content::job_guidance())
}

async fn resume_templates() -> Json<Vec<ResumeTemplate>> {
    Json(content::resume_templates())
}

async fn download_resume_template(
    Path(template_id): Path<String>,
) -> Result<Json<ResumeTemplateContent>> {
    content::resume_template_content(&template_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Resume template not found".to_string()))
}

// ─── Job Search ──────────────────────────────────────────────

async fn search_jobs(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<JobSearchRequest>, JsonRejection>,
) -> Result<Json<JobSearchResponse>> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::debug!(
        query = %request.query,
        location = ?request.location,
        job_type = ?request.job_type,
        "Searching jobs"
    );

    Ok(Json(state.jobs.search(&request).await))
}

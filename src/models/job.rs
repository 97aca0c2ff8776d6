// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Job listings and stored job applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A job listing returned by search (never persisted).
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub job_type: String,
    pub posted_date: DateTime<Utc>,
    pub apply_url: String,
}

/// Job search request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JobSearchRequest {
    #[validate(length(min = 1, max = 100))]
    pub query: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub location: Option<String>,
    /// full_time, part_time, internship; empty means any
    #[serde(default)]
    #[validate(length(max = 32))]
    pub job_type: Option<String>,
}

/// Job application request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JobApplicationRequest {
    #[validate(length(min = 1, max = 200))]
    pub job_id: String,
    #[validate(length(min = 1, max = 200))]
    pub applicant_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    pub cover_letter: String,
}

/// Review state of an application. Only `Applied` is written by this service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Reviewed,
    Interviewed,
    Hired,
    Rejected,
}

/// A submitted job application, stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JobApplication {
    /// Document ID
    pub id: String,
    /// Owning user
    pub user_id: String,
    pub job_id: String,
    pub applicant_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_letter: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

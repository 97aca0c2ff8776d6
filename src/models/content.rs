// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Static guidance content: blog posts, job guidance, resume templates.
//!
//! None of these are persisted; they are built per request.

use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    /// Request time, not a publication date
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Internship and job-hunting guidance, grouped into fixed sections.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JobGuidance {
    pub internship_tips: Vec<String>,
    pub application_process: Vec<String>,
    pub resume_templates: Vec<TemplateLink>,
    pub interview_prep: Vec<String>,
}

/// Resume template reference embedded in job guidance.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TemplateLink {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Downloadable resume template listing entry.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ResumeTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub preview_url: String,
    pub download_url: String,
}

/// Body of a resume template download.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ResumeTemplateContent {
    pub template_name: String,
    pub sections: Vec<TemplateSection>,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TemplateSection {
    pub name: String,
    pub content: String,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Career path catalog records.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A career track with its learning roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub skills: Vec<String>,
    /// Ordered by `step`, starting at 1
    pub roadmap: Vec<RoadmapStep>,
    pub resources: Vec<LearningResource>,
    pub salary_range: String,
    pub job_outlook: String,
    pub difficulty_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RoadmapStep {
    pub step: u32,
    pub title: String,
    pub duration: String,
    pub description: String,
}

/// External learning material linked from a career path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LearningResource {
    pub name: String,
    pub url: String,
    /// course, documentation, practice, book, ...
    #[serde(rename = "type")]
    pub kind: String,
}

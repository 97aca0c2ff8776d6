// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Data models for the application.

pub mod career_path;
pub mod content;
pub mod job;
pub mod session;
pub mod user;

pub use career_path::{CareerPath, LearningResource, RoadmapStep};
pub use content::{BlogPost, JobGuidance, ResumeTemplate, ResumeTemplateContent, TemplateLink};
pub use job::{ApplicationStatus, JobApplication, JobListing};
pub use session::Session;
pub use user::User;

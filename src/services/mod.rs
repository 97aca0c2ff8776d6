// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Services module - business logic layer.

pub mod content;
pub mod identity;
pub mod jobs;
pub mod seed;
pub mod session;

pub use identity::{IdentityClient, IdentityService, ProfileExchange};
pub use jobs::{JobSearchResponse, JobSearchService};
pub use session::SessionService;

// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Middleware modules (authentication).

pub mod auth;

pub use auth::require_auth;

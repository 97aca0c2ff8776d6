// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! TechPathfinder: career guidance API for CS/IT students
//!
//! This crate provides the backend API serving career paths, guidance
//! content and job search, with bearer sessions backed by an external
//! identity provider.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::{IdentityClient, IdentityService, JobSearchService, SessionService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub sessions: SessionService,
    pub identity: IdentityService,
    pub jobs: JobSearchService,
}

impl AppState {
    /// Wire every service around one store handle.
    pub fn new(config: Config, db: FirestoreDb) -> Self {
        let sessions = SessionService::new(db.clone());
        let identity = IdentityService::new(
            IdentityClient::new(config.identity_api_url.clone()),
            db.clone(),
            sessions.clone(),
        );
        let jobs = JobSearchService::new(config.adzuna_credentials());

        Self {
            config,
            db,
            sessions,
            identity,
            jobs,
        }
    }
}

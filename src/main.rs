// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! TechPathfinder API Server
//!
//! Serves career paths, guidance content and job search for CS/IT students.

use std::sync::Arc;
use techpathfinder::{
    config::Config, db::FirestoreDb, services::seed::initialize_career_paths, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting TechPathfinder API");

    let db = match &config.gcp_project_id {
        Some(project) => FirestoreDb::new(project, &config.firestore_database).await?,
        None => {
            tracing::warn!("GCP_PROJECT_ID not set, using in-memory document store");
            FirestoreDb::in_memory()
        }
    };

    // The catalog must be in place before serving traffic.
    let seeded = initialize_career_paths(&db).await?;
    tracing::info!(backend = db.backend_name(), seeded, "Document store ready");

    let state = Arc::new(AppState::new(config.clone(), db));
    tracing::info!(
        job_board = state.jobs.uses_job_board(),
        "Job search initialized"
    );

    // Build router
    let app = techpathfinder::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("techpathfinder=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}

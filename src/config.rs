// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Application configuration loaded from environment variables.
//!
//! Nothing here is mandatory: every setting has a development default, and
//! leaving `GCP_PROJECT_ID` unset selects the in-memory document store.

use std::env;

const DEFAULT_PORT: u16 = 8001;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_AUTH_PORTAL_URL: &str = "https://auth.emergentagent.com";
const DEFAULT_IDENTITY_API_URL: &str =
    "https://demobackend.emergentagent.com/auth/v1/env/oauth/session-data";
const DEFAULT_FIRESTORE_DATABASE: &str = "(default)";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL (login redirect target and CORS origin)
    pub frontend_url: String,
    /// Hosted login page of the identity provider
    pub auth_portal_url: String,
    /// Session-data endpoint of the identity provider
    pub identity_api_url: String,
    /// GCP project holding the Firestore database; `None` means in-memory store
    pub gcp_project_id: Option<String>,
    /// Firestore database name
    pub firestore_database: String,
    /// Adzuna job board credentials
    pub adzuna_app_id: Option<String>,
    pub adzuna_api_key: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            auth_portal_url: DEFAULT_AUTH_PORTAL_URL.to_string(),
            // Unroutable so a test never reaches the real provider by accident.
            identity_api_url: "http://127.0.0.1:9/session-data".to_string(),
            gcp_project_id: None,
            firestore_database: DEFAULT_FIRESTORE_DATABASE.to_string(),
            adzuna_app_id: None,
            adzuna_api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            frontend_url: env::var("FRONTEND_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            auth_portal_url: env::var("AUTH_PORTAL_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_AUTH_PORTAL_URL.to_string()),
            identity_api_url: env::var("IDENTITY_API_URL")
                .unwrap_or_else(|_| DEFAULT_IDENTITY_API_URL.to_string()),
            gcp_project_id: non_empty_var("GCP_PROJECT_ID"),
            firestore_database: non_empty_var("FIRESTORE_DATABASE")
                .unwrap_or_else(|| DEFAULT_FIRESTORE_DATABASE.to_string()),
            adzuna_app_id: non_empty_var("ADZUNA_APP_ID"),
            adzuna_api_key: non_empty_var("ADZUNA_API_KEY"),
        })
    }

    /// Config for tests: offline-safe defaults.
    pub fn test_default() -> Self {
        Self::default()
    }

    /// Adzuna credentials, only when both halves are configured.
    pub fn adzuna_credentials(&self) -> Option<(String, String)> {
        match (&self.adzuna_app_id, &self.adzuna_api_key) {
            (Some(id), Some(key)) => Some((id.clone(), key.clone())),
            _ => None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

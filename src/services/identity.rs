// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Identity provider exchange.
//!
//! The frontend completes the hosted login and receives a provider session ID.
//! We trade that ID for the user's profile, upsert the user by email, and mint
//! one of our own bearer sessions.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::User;
use crate::services::SessionService;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header carrying the provider session ID, both inbound and to the provider.
pub const SESSION_ID_HEADER: &str = "X-Session-ID";

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the provider's session-data endpoint.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    session_data_url: String,
}

impl IdentityClient {
    pub fn new(session_data_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            session_data_url,
        }
    }

    /// Fetch the raw profile payload for a provider session. Single attempt.
    pub async fn fetch_session_data(
        &self,
        session_id: &str,
    ) -> Result<serde_json::Value, AppError> {
        let response = self
            .http
            .get(&self.session_data_url)
            .header(SESSION_ID_HEADER, session_id)
            .timeout(PROVIDER_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::IdentityProvider(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::IdentityProvider(format!("HTTP {}", status)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::IdentityProvider(format!("JSON parse error: {}", e)))
    }
}

/// The fields we rely on from the provider payload.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityProfile {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

impl IdentityProfile {
    fn from_payload(payload: &serde_json::Value) -> Result<Self, AppError> {
        let profile: Self = serde_json::from_value(payload.clone())
            .map_err(|e| AppError::IdentityProvider(format!("Incomplete profile: {}", e)))?;

        if profile.email.trim().is_empty() {
            return Err(AppError::IdentityProvider("Profile has no email".to_string()));
        }
        Ok(profile)
    }
}

/// Result of a successful exchange.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileExchange {
    /// Provider payload, as received
    pub user: serde_json::Value,
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Exchanges provider sessions for local users and sessions.
#[derive(Clone)]
pub struct IdentityService {
    client: IdentityClient,
    db: FirestoreDb,
    sessions: SessionService,
}

impl IdentityService {
    pub fn new(client: IdentityClient, db: FirestoreDb, sessions: SessionService) -> Self {
        Self {
            client,
            db,
            sessions,
        }
    }

    /// Trade a provider session ID for a user record and a new bearer session.
    ///
    /// Every call mints a new session, even for returning users; earlier
    /// sessions stay valid until they expire.
    pub async fn exchange_profile(&self, session_id: &str) -> Result<ProfileExchange, AppError> {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return Err(AppError::BadRequest("Session ID required".to_string()));
        }

        let payload = self.client.fetch_session_data(session_id).await.map_err(|e| {
            tracing::warn!(error = %e, "Identity provider rejected session");
            e
        })?;
        let profile = IdentityProfile::from_payload(&payload)?;

        let now = Utc::now();
        let user = self.resolve_user(&profile, now).await?;
        let session = self.sessions.issue(&user.id, now).await?;

        tracing::info!(user_id = %user.id, "Identity exchange complete");

        Ok(ProfileExchange {
            user: payload,
            session_token: session.session_token,
            expires_at: session.expires_at,
        })
    }

    /// Reuse the user registered under this email, or create one.
    async fn resolve_user(
        &self,
        profile: &IdentityProfile,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let user = match self.db.find_user_by_email(&profile.email).await? {
            Some(mut existing) => {
                existing.last_login = now;
                existing
            }
            None => {
                let user = User {
                    id: uuid::Uuid::new_v4().to_string(),
                    email: profile.email.clone(),
                    name: profile.name.clone(),
                    picture: profile.picture.clone(),
                    created_at: now,
                    last_login: now,
                };
                tracing::info!(user_id = %user.id, "Creating new user");
                user
            }
        };

        // Concurrent exchanges for one email race here; the last write wins.
        self.db.upsert_user(&user).await?;
        Ok(user)
    }
}

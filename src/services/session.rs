// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Bearer session issuance and validation.
//!
//! Sessions are opaque random tokens stored in Firestore. Validation is a
//! direct lookup plus an expiry check on every request; there is no cache,
//! no sliding expiry and no revocation.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{Session, User};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use ring::rand::{SecureRandom, SystemRandom};

/// Validity window of a freshly issued session.
pub const SESSION_TTL_DAYS: i64 = 7;

const TOKEN_BYTES: usize = 32;

/// Length of an unpadded base64 encoding of `TOKEN_BYTES`.
const TOKEN_LEN: usize = 43;

#[derive(Clone)]
pub struct SessionService {
    db: FirestoreDb,
    rng: SystemRandom,
}

impl SessionService {
    pub fn new(db: FirestoreDb) -> Self {
        Self {
            db,
            rng: SystemRandom::new(),
        }
    }

    /// Resolve a bearer token to its user.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        self.authenticate_at(token, Utc::now()).await
    }

    /// Resolve a bearer token to its user, judging expiry against `now`.
    ///
    /// Fails with `InvalidSession` when the token is unknown, expired
    /// (`expires_at <= now`), or its user no longer exists. Tokens that this
    /// service could never have issued are rejected without a store lookup.
    pub async fn authenticate_at(&self, token: &str, now: DateTime<Utc>) -> Result<User, AppError> {
        if !is_well_formed_token(token) {
            return Err(AppError::InvalidSession);
        }

        let session = self
            .db
            .get_session(token)
            .await?
            .ok_or(AppError::InvalidSession)?;

        if !session.is_valid_at(now) {
            tracing::debug!(
                user_id = %session.user_id,
                expires_at = %session.expires_at,
                "Rejected expired session"
            );
            return Err(AppError::InvalidSession);
        }

        self.db.get_user(&session.user_id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %session.user_id, "Session references missing user");
            AppError::InvalidSession
        })
    }

    /// Mint and store a new session for `user_id`, valid for seven days from `now`.
    pub async fn issue(&self, user_id: &str, now: DateTime<Utc>) -> Result<Session, AppError> {
        let session = Session {
            session_token: self.generate_token()?,
            user_id: user_id.to_string(),
            expires_at: now + Duration::days(SESSION_TTL_DAYS),
            created_at: now,
        };

        self.db.insert_session(&session).await?;
        tracing::debug!(user_id, expires_at = %session.expires_at, "Session issued");

        Ok(session)
    }

    fn generate_token(&self) -> Result<String, AppError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("System RNG failure")))?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }
}

fn is_well_formed_token(token: &str) -> bool {
    token.len() == TOKEN_LEN
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

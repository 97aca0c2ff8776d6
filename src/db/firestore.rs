// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage, keyed by user ID)
//! - Sessions (bearer sessions, keyed by token)
//! - Career paths (seeded catalog)
//! - Job applications (per-user submissions)
//!
//! The same operations are served by an in-memory store when no GCP project
//! is configured, and fail uniformly in offline mode.

use crate::db::{collections, is_valid_document_id};
use crate::db::memory::MemoryStore;
use crate::error::AppError;
use crate::models::{CareerPath, JobApplication, Session, User};
use futures_util::{stream, StreamExt};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

const MAX_CONCURRENT_DB_OPS: usize = 16;

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(Arc<MemoryStore>),
    Offline,
}

/// Document store handle, shared by all request handlers.
#[derive(Clone)]
pub struct FirestoreDb {
    backend: Backend,
}

impl FirestoreDb {
    /// Connect to Firestore.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str, database: &str) -> Result<Self, AppError> {
        let options = firestore::FirestoreDbOptions::new(project_id.to_string())
            .with_database_id(database.to_string());

        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id, options).await;
        }

        let client = firestore::FirestoreDb::with_options(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, database, "Connected to Firestore");

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(
        project_id: &str,
        options: firestore::FirestoreDbOptions,
    ) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a store that keeps everything in process memory.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(MemoryStore::default())),
        }
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            backend: Backend::Offline,
        }
    }

    /// Short backend name for startup logs.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Firestore(_) => "firestore",
            Backend::Memory(_) => "memory",
            Backend::Offline => "offline",
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        if !is_valid_document_id(user_id) {
            return Ok(None);
        }
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::USERS)
                .obj()
                .one(user_id)
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.users.get(user_id)),
            Backend::Offline => Err(offline()),
        }
    }

    /// Find the user registered with an email address.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let users: Vec<User> = client
                    .fluent()
                    .select()
                    .from(collections::USERS)
                    .filter(|q| q.for_all([q.field("email").eq(email)]))
                    .limit(1)
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(users.into_iter().next())
            }
            Backend::Memory(store) => Ok(store
                .users
                .filter(|u| u.email == email)
                .into_iter()
                .next()),
            Backend::Offline => Err(offline()),
        }
    }

    /// Create or update a user.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                write_doc(client, collections::USERS, &user.id, user).await
            }
            Backend::Memory(store) => {
                store.users.put(user.id.clone(), user.clone());
                Ok(())
            }
            Backend::Offline => Err(offline()),
        }
    }

    // ─── Session Operations ──────────────────────────────────────

    /// Get a session by its bearer token.
    pub async fn get_session(&self, token: &str) -> Result<Option<Session>, AppError> {
        if !is_valid_document_id(token) {
            return Ok(None);
        }
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::SESSIONS)
                .obj()
                .one(token)
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.sessions.get(token)),
            Backend::Offline => Err(offline()),
        }
    }

    /// Store a new session.
    pub async fn insert_session(&self, session: &Session) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                write_doc(
                    client,
                    collections::SESSIONS,
                    &session.session_token,
                    session,
                )
                .await
            }
            Backend::Memory(store) => {
                store
                    .sessions
                    .put(session.session_token.clone(), session.clone());
                Ok(())
            }
            Backend::Offline => Err(offline()),
        }
    }

    // ─── Career Path Operations ──────────────────────────────────

    /// Whether the career path collection holds at least one document.
    pub async fn has_career_paths(&self) -> Result<bool, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let first: Vec<CareerPath> = client
                    .fluent()
                    .select()
                    .from(collections::CAREER_PATHS)
                    .limit(1)
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(!first.is_empty())
            }
            Backend::Memory(store) => Ok(!store.career_paths.is_empty()),
            Backend::Offline => Err(offline()),
        }
    }

    /// Store multiple career paths.
    ///
    /// Uses concurrent writes with a limit to avoid overloading Firestore.
    pub async fn insert_career_paths(&self, paths: &[CareerPath]) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                stream::iter(paths)
                    .map(|path| write_doc(client, collections::CAREER_PATHS, &path.id, path))
                    .buffer_unordered(MAX_CONCURRENT_DB_OPS)
                    .collect::<Vec<Result<(), AppError>>>()
                    .await
                    .into_iter()
                    .collect::<Result<Vec<()>, AppError>>()?;
                Ok(())
            }
            Backend::Memory(store) => {
                for path in paths {
                    store.career_paths.put(path.id.clone(), path.clone());
                }
                Ok(())
            }
            Backend::Offline => Err(offline()),
        }
    }

    /// All career paths in the store's natural (document ID) order.
    pub async fn list_career_paths(&self) -> Result<Vec<CareerPath>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::CAREER_PATHS)
                .obj()
                .query()
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.career_paths.all()),
            Backend::Offline => Err(offline()),
        }
    }

    /// Get a career path by ID.
    ///
    /// An ID that cannot name a document is simply not found.
    pub async fn get_career_path(&self, path_id: &str) -> Result<Option<CareerPath>, AppError> {
        if !is_valid_document_id(path_id) {
            return Ok(None);
        }
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::CAREER_PATHS)
                .obj()
                .one(path_id)
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.career_paths.get(path_id)),
            Backend::Offline => Err(offline()),
        }
    }

    // ─── Job Application Operations ──────────────────────────────

    /// Store a submitted job application.
    pub async fn insert_job_application(
        &self,
        application: &JobApplication,
    ) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                write_doc(
                    client,
                    collections::JOB_APPLICATIONS,
                    &application.id,
                    application,
                )
                .await
            }
            Backend::Memory(store) => {
                store
                    .job_applications
                    .put(application.id.clone(), application.clone());
                Ok(())
            }
            Backend::Offline => Err(offline()),
        }
    }

    /// All applications submitted by a user, newest first.
    pub async fn list_job_applications_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<JobApplication>, AppError> {
        let mut applications: Vec<JobApplication> = match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::JOB_APPLICATIONS)
                .filter(|q| q.for_all([q.field("user_id").eq(user_id)]))
                .obj()
                .query()
                .await
                .map_err(|e| AppError::Database(e.to_string()))?,
            Backend::Memory(store) => store.job_applications.filter(|a| a.user_id == user_id),
            Backend::Offline => return Err(offline()),
        };

        // Sorted here rather than in the query to avoid a composite index.
        applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(applications)
    }
}

/// Upsert a single document.
async fn write_doc<T>(
    client: &firestore::FirestoreDb,
    collection: &str,
    doc_id: &str,
    doc: &T,
) -> Result<(), AppError>
where
    T: Serialize + DeserializeOwned + Sync + Send,
{
    let _: () = client
        .fluent()
        .update()
        .in_col(collection)
        .document_id(doc_id)
        .object(doc)
        .execute()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    Ok(())
}

fn offline() -> AppError {
    AppError::Database("Database not connected (offline mode)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_ids_are_not_found_without_a_lookup() {
        // Offline fails every real lookup.
        let db = FirestoreDb::new_mock();

        for id in ["a/b", ".", "..", ""] {
            assert!(db.get_career_path(id).await.unwrap().is_none());
            assert!(db.get_session(id).await.unwrap().is_none());
            assert!(db.get_user(id).await.unwrap().is_none());
        }
        assert!(db
            .get_career_path(&"p".repeat(1501))
            .await
            .unwrap()
            .is_none());

        assert!(db.get_career_path("web-developer").await.is_err());
    }
}

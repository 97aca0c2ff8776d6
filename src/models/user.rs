//! User model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// User profile stored in Firestore.
///
/// Created on the first successful identity exchange; `email` is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// Opaque user ID (also used as document ID)
    pub id: String,
    pub email: String,
    pub name: String,
    /// Profile picture URL, when the provider shares one
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Updated on every identity exchange
    pub last_login: DateTime<Utc>,
}

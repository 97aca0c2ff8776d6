//! Database layer (Firestore, with an in-memory stand-in).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Keyed by session token
    pub const SESSIONS: &str = "sessions";
    pub const CAREER_PATHS: &str = "career_paths";
    pub const JOB_APPLICATIONS: &str = "job_applications";
}

/// Firestore's longest allowed document ID, in bytes.
const MAX_DOCUMENT_ID_BYTES: usize = 1500;

/// Whether `id` can name a single document in a collection.
///
/// Lookups by an ID that fails this check would be rejected by Firestore as
/// a malformed request rather than answered as "not found".
pub fn is_valid_document_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_DOCUMENT_ID_BYTES
        && id != "."
        && id != ".."
        && !id.contains('/')
        && !(id.starts_with("__") && id.ends_with("__"))
}

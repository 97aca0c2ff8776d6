// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running with
//! FIRESTORE_EMULATOR_HOST set. They are skipped otherwise.

use chrono::{Duration, Utc};
use techpathfinder::models::{ApplicationStatus, JobApplication, Session, User};
use techpathfinder::services::seed::initialize_career_paths;
use techpathfinder::services::SessionService;

mod common;
use common::test_db;

/// Unique suffix for test isolation within a shared emulator.
fn unique_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

fn test_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: unique_id("user"),
        email: email.to_string(),
        name: "Test User".to_string(),
        picture: None,
        created_at: now,
        last_login: now,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// USER TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_user_upsert_and_lookup() {
    require_emulator!();

    let db = test_db().await;
    let email = format!("{}@example.com", unique_id("lookup"));
    let mut user = test_user(&email);

    assert!(db.get_user(&user.id).await.unwrap().is_none());

    db.upsert_user(&user).await.unwrap();
    let stored = db.get_user(&user.id).await.unwrap().expect("user stored");
    assert_eq!(stored.email, email);

    let by_email = db
        .find_user_by_email(&email)
        .await
        .unwrap()
        .expect("user found by email");
    assert_eq!(by_email.id, user.id);

    // Upsert replaces the document.
    user.last_login = user.last_login + Duration::minutes(5);
    db.upsert_user(&user).await.unwrap();
    let updated = db.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(updated.last_login, user.last_login);
    assert_eq!(updated.created_at, user.created_at);
}

// ═══════════════════════════════════════════════════════════════════════════
// SESSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_session_round_trip() {
    require_emulator!();

    let db = test_db().await;
    let user = test_user("session@example.com");
    db.upsert_user(&user).await.unwrap();

    let sessions = SessionService::new(db.clone());
    let session = sessions.issue(&user.id, Utc::now()).await.unwrap();

    let stored: Session = db
        .get_session(&session.session_token)
        .await
        .unwrap()
        .expect("session stored");
    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.expires_at, session.expires_at);

    let resolved = sessions.authenticate(&session.session_token).await.unwrap();
    assert_eq!(resolved.id, user.id);
}

// ═══════════════════════════════════════════════════════════════════════════
// CAREER PATH TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_career_path_seed_is_idempotent() {
    require_emulator!();

    let db = test_db().await;
    initialize_career_paths(&db).await.unwrap();
    let before = db.list_career_paths().await.unwrap();
    assert!(!before.is_empty());

    assert_eq!(initialize_career_paths(&db).await.unwrap(), 0);
    let after = db.list_career_paths().await.unwrap();
    assert_eq!(before.len(), after.len());

    let first = &after[0];
    let fetched = db.get_career_path(&first.id).await.unwrap().unwrap();
    assert_eq!(&fetched, first);
}

// ═══════════════════════════════════════════════════════════════════════════
// JOB APPLICATION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_job_applications_filtered_by_user() {
    require_emulator!();

    let db = test_db().await;
    let user_id = unique_id("applicant");
    let now = Utc::now();

    for (i, job_id) in ["older", "newer"].iter().enumerate() {
        let application = JobApplication {
            id: unique_id("application"),
            user_id: user_id.clone(),
            job_id: job_id.to_string(),
            applicant_name: "Test User".to_string(),
            email: "applicant@example.com".to_string(),
            phone: None,
            cover_letter: "Hello".to_string(),
            status: ApplicationStatus::Applied,
            applied_at: now + Duration::seconds(i as i64),
        };
        db.insert_job_application(&application).await.unwrap();
    }

    let listed = db.list_job_applications_for_user(&user_id).await.unwrap();
    let job_ids: Vec<&str> = listed.iter().map(|a| a.job_id.as_str()).collect();
    assert_eq!(job_ids, ["newer", "older"]);

    let nobody = db
        .list_job_applications_for_user(&unique_id("nobody"))
        .await
        .unwrap();
    assert!(nobody.is_empty());
}

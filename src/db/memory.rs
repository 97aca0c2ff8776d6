// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! In-memory document store used for local development and tests.
//!
//! Each collection is a map from document ID to document. Listing returns
//! documents ordered by ID, the same natural order Firestore uses.

use crate::models::{CareerPath, JobApplication, Session, User};
use dashmap::DashMap;

/// A single collection of documents keyed by ID.
pub struct Collection<T> {
    docs: DashMap<String, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            docs: DashMap::new(),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn get(&self, id: &str) -> Option<T> {
        self.docs.get(id).map(|doc| doc.value().clone())
    }

    /// Insert or replace a document.
    pub fn put(&self, id: impl Into<String>, doc: T) {
        self.docs.insert(id.into(), doc);
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// All documents matching `pred`, ordered by document ID.
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        let mut matched: Vec<(String, T)> = self
            .docs
            .iter()
            .filter(|entry| pred(entry.value()))
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        matched.sort_by(|a, b| a.0.cmp(&b.0));
        matched.into_iter().map(|(_, doc)| doc).collect()
    }

    pub fn all(&self) -> Vec<T> {
        self.filter(|_| true)
    }
}

/// All collections of the application.
#[derive(Default)]
pub struct MemoryStore {
    pub users: Collection<User>,
    pub sessions: Collection<Session>,
    pub career_paths: Collection<CareerPath>,
    pub job_applications: Collection<JobApplication>,
}

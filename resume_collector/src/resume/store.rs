//! Resume Store
//!
//! Volatile, process-wide collection of admitted resumes. Records are only
//! appended; there is no update or delete.

use super::types::{CandidateProfile, Resume, ResumeId};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Resume not found: {0}")]
pub struct NotFoundError(pub String);

/// In-memory resume store shared by every request handler
#[derive(Debug, Default)]
pub struct ResumeStore {
    records: Mutex<Vec<Resume>>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Appends are the only mutation, so a poisoned lock never guards a
    // half-written record.
    fn records(&self) -> MutexGuard<'_, Vec<Resume>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a validated profile under a freshly generated id
    pub fn create(&self, profile: CandidateProfile) -> Resume {
        let resume = Resume::new(Uuid::new_v4(), profile);
        self.records().push(resume.clone());
        log::debug!("[STORE] Created resume {}", resume.id);
        resume
    }

    /// Snapshot of every stored resume, oldest first
    pub fn list_all(&self) -> Vec<Resume> {
        self.records().clone()
    }

    pub fn get(&self, id: ResumeId) -> Result<Resume, NotFoundError> {
        self.records()
            .iter()
            .find(|resume| resume.id == id)
            .cloned()
            .ok_or_else(|| NotFoundError(id.to_string()))
    }

    /// Look up a resume by its textual id. Malformed ids are simply not found.
    pub fn get_by_id(&self, id: &str) -> Result<Resume, NotFoundError> {
        let parsed = Uuid::parse_str(id).map_err(|_| NotFoundError(id.to_string()))?;
        self.get(parsed)
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

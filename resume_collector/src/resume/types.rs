//! Resume Types
//!
//! Data structures shared by the validator, the store and the HTTP layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to every stored resume
pub type ResumeId = Uuid;

// ============================================================
// RAW SUBMISSION
// ============================================================

/// A resume submission exactly as decoded from the request body.
///
/// `experience_years` stays an untyped JSON value so a string or `null`
/// is reported as a validation failure instead of a decoding failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeInput {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub experience_years: serde_json::Value,
    #[serde(default)]
    pub skills: Vec<String>,
}

// ============================================================
// VALIDATED PROFILE
// ============================================================

/// Candidate fields that passed validation. Carries no identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub experience_years: f64,
    pub skills: Vec<String>,
}

// ============================================================
// STORED RECORD
// ============================================================

/// A stored resume: a validated profile plus its generated id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resume {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub id: ResumeId,
}

impl Resume {
    pub fn new(id: ResumeId, profile: CandidateProfile) -> Self {
        Self { profile, id }
    }
}

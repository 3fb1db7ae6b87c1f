//! Mini Resume Collector
//!
//! A simple in-memory API to collect and view candidate resumes:
//! - Validation of every submission before it is stored
//! - Append-only store that assigns each resume a random UUID
//! - JSON endpoints to submit, list and fetch resumes

pub mod api;
pub mod config;
pub mod resume;

pub use api::*;
pub use config::*;
pub use resume::*;

//! Resume Module - Core of the Resume Collector
//!
//! Architecture:
//! - Types: raw submissions, validated profiles and stored records
//! - Validation: per-field constraint checks applied before storage
//! - Store: in-memory, append-only collection that assigns ids

pub mod store;
pub mod types;
pub mod validation;

pub use store::*;
pub use types::*;
pub use validation::*;

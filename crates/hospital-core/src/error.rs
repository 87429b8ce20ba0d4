//! Core error types for hospital-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! all anticipated failure modes in the core registry data model.

use thiserror::Error;

/// Core errors produced by the hospital-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attempting to register a patient ID that already exists.
    #[error("patient already exists: '{id}'")]
    DuplicatePatient { id: String },

    /// Attempting to register a doctor ID that already exists.
    #[error("doctor already exists: '{id}'")]
    DuplicateDoctor { id: String },

    /// A patient ID was not found in the registry.
    #[error("patient not found: '{id}'")]
    PatientNotFound { id: String },

    /// A doctor ID was not found in the registry.
    #[error("doctor not found: '{id}'")]
    DoctorNotFound { id: String },

    /// An admission status string did not match a known variant.
    #[error("invalid admission status: '{value}'")]
    InvalidStatus { value: String },
}

pub mod doctor;
pub mod error;
pub mod patient;
pub mod registry;

// Re-export commonly used types
pub use doctor::Doctor;
pub use error::CoreError;
pub use patient::{AdmissionStatus, Patient};
pub use registry::Registry;

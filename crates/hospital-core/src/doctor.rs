//! Doctor records.
//!
//! [`Doctor`] is immutable after creation and never deleted; the registry
//! only ever inserts and reads these.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A doctor record, keyed by `doctor_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialization: String,
    pub doctor_id: String,
}

impl Doctor {
    /// Creates a new doctor record.
    pub fn new(name: String, specialization: String, doctor_id: String) -> Self {
        Doctor {
            name,
            specialization,
            doctor_id,
        }
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Dr. {} ({})",
            self.doctor_id, self.name, self.specialization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_display_format() {
        let doctor = Doctor::new("Rao".into(), "Cardiology".into(), "D1".into());
        assert_eq!(format!("{}", doctor), "D1 - Dr. Rao (Cardiology)");
    }

    #[test]
    fn doctor_serde_shape() {
        let doctor = Doctor::new("Rao".into(), "Cardiology".into(), "D1".into());
        let json = serde_json::to_value(&doctor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Rao",
                "specialization": "Cardiology",
                "doctor_id": "D1"
            })
        );
    }
}

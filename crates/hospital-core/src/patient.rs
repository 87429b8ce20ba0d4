//! Patient records and admission status.
//!
//! [`Patient`] is a plain value object keyed by `patient_id`. Its
//! [`AdmissionStatus`] serializes as the canonical `"Admitted"` /
//! `"Discharged"` strings but parses case-insensitively, so snapshots
//! written with any casing load back cleanly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Whether a patient currently occupies a bed.
///
/// Stored as a string in the persisted snapshot; parsing accepts any
/// ASCII case while serialization always emits the canonical form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AdmissionStatus {
    #[default]
    Admitted,
    Discharged,
}

impl AdmissionStatus {
    /// Canonical string form, as written to the snapshot file.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdmissionStatus::Admitted => "Admitted",
            AdmissionStatus::Discharged => "Discharged",
        }
    }
}

impl fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdmissionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("admitted") {
            Ok(AdmissionStatus::Admitted)
        } else if s.eq_ignore_ascii_case("discharged") {
            Ok(AdmissionStatus::Discharged)
        } else {
            Err(CoreError::InvalidStatus {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<String> for AdmissionStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AdmissionStatus> for String {
    fn from(status: AdmissionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A hospital patient record.
///
/// Field order matches the persisted snapshot shape. `patient_id` doubles
/// as the registry key; the registry keeps key and field in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub age: u32,
    pub patient_id: String,
    pub disease: String,
    pub status: AdmissionStatus,
}

impl Patient {
    /// Creates a new patient record with the default `Admitted` status.
    pub fn new(name: String, age: u32, patient_id: String, disease: String) -> Self {
        Patient {
            name,
            age,
            patient_id,
            disease,
            status: AdmissionStatus::default(),
        }
    }

    /// Sets the status to `Admitted`. Idempotent.
    pub fn admit(&mut self) {
        self.status = AdmissionStatus::Admitted;
    }

    /// Sets the status to `Discharged`. Idempotent.
    pub fn discharge(&mut self) {
        self.status = AdmissionStatus::Discharged;
    }

    /// Returns true iff the patient is currently admitted.
    pub fn is_admitted(&self) -> bool {
        self.status == AdmissionStatus::Admitted
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.patient_id, self.name, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_admitted() {
        let patient = Patient::new("Asha".into(), 34, "P1".into(), "Flu".into());
        assert_eq!(patient.status, AdmissionStatus::Admitted);
        assert!(patient.is_admitted());
    }

    #[test]
    fn discharge_then_admit_flips_status() {
        let mut patient = Patient::new("Asha".into(), 34, "P1".into(), "Flu".into());
        patient.discharge();
        assert_eq!(patient.status, AdmissionStatus::Discharged);
        assert!(!patient.is_admitted());

        patient.admit();
        assert!(patient.is_admitted());
    }

    #[test]
    fn discharge_is_idempotent() {
        let mut patient = Patient::new("Asha".into(), 34, "P1".into(), "Flu".into());
        patient.discharge();
        patient.discharge();
        assert_eq!(patient.status, AdmissionStatus::Discharged);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "admitted".parse::<AdmissionStatus>().unwrap(),
            AdmissionStatus::Admitted
        );
        assert_eq!(
            "DISCHARGED".parse::<AdmissionStatus>().unwrap(),
            AdmissionStatus::Discharged
        );
        assert!("released".parse::<AdmissionStatus>().is_err());
    }

    #[test]
    fn status_serializes_canonical_form() {
        let json = serde_json::to_string(&AdmissionStatus::Discharged).unwrap();
        assert_eq!(json, "\"Discharged\"");

        let back: AdmissionStatus = serde_json::from_str("\"discharged\"").unwrap();
        assert_eq!(back, AdmissionStatus::Discharged);
    }

    #[test]
    fn patient_display_format() {
        let mut patient = Patient::new("Asha".into(), 34, "P1".into(), "Flu".into());
        assert_eq!(format!("{}", patient), "P1 - Asha (Admitted)");

        patient.discharge();
        assert_eq!(format!("{}", patient), "P1 - Asha (Discharged)");
    }

    #[test]
    fn patient_serde_shape() {
        let patient = Patient::new("Asha".into(), 34, "P1".into(), "Flu".into());
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Asha",
                "age": 34,
                "patient_id": "P1",
                "disease": "Flu",
                "status": "Admitted"
            })
        );
    }

    #[test]
    fn patient_serde_preserves_stored_status() {
        let json = r#"{
            "name": "Asha",
            "age": 34,
            "patient_id": "P1",
            "disease": "Flu",
            "status": "Discharged"
        }"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.status, AdmissionStatus::Discharged);
    }
}

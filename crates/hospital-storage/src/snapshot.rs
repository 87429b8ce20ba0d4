//! Decompose/recompose conversions between [`Registry`] and the persisted
//! snapshot shape.
//!
//! [`decompose`] flattens a registry into a [`Snapshot`], the exact
//! structure written to disk. [`recompose`] rebuilds a registry from a
//! snapshot, re-keying every record by its embedded id so a hand-edited
//! file with mismatched map keys cannot violate the registry's key
//! invariant.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use hospital_core::{Doctor, Patient, Registry};

/// The persisted snapshot shape: two id-keyed record maps.
///
/// Serializes to the on-disk top-level object
/// `{"patients": {...}, "doctors": {...}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub patients: IndexMap<String, Patient>,
    pub doctors: IndexMap<String, Doctor>,
}

/// Flattens a registry into its persisted form.
pub fn decompose(registry: &Registry) -> Snapshot {
    Snapshot {
        patients: registry
            .patients()
            .map(|p| (p.patient_id.clone(), p.clone()))
            .collect(),
        doctors: registry
            .doctors()
            .map(|d| (d.doctor_id.clone(), d.clone()))
            .collect(),
    }
}

/// Rebuilds a registry from a snapshot.
///
/// Records are inserted in snapshot order, keyed by their embedded ids.
/// Stored status values are preserved as-is; nothing is reset to the
/// default on load.
pub fn recompose(snapshot: Snapshot) -> Registry {
    let mut registry = Registry::new();
    for patient in snapshot.patients.into_values() {
        registry.insert_patient(patient);
    }
    for doctor in snapshot.doctors.into_values() {
        registry.insert_doctor(doctor);
    }
    registry
}

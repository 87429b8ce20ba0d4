//! The in-memory registry owning all patient and doctor records.
//!
//! [`Registry`] keeps two insertion-ordered maps, one per record type.
//! Invariant: every key equals the `patient_id` / `doctor_id` field of its
//! value. The insertion APIs key records by their own embedded id, so the
//! invariant holds by construction.
//!
//! The registry is pure data -- it performs no I/O and no logging. Callers
//! decide when to snapshot it to storage.

use indexmap::IndexMap;

use crate::doctor::Doctor;
use crate::error::CoreError;
use crate::patient::Patient;

/// Owner of all patient and doctor records.
///
/// Iteration order over either map is insertion order, which keeps listing
/// output deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    patients: IndexMap<String, Patient>,
    doctors: IndexMap<String, Doctor>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    // -------------------------------------------------------------------
    // Patient operations
    // -------------------------------------------------------------------

    /// Registers a new patient, keyed by its `patient_id`.
    ///
    /// Fails with [`CoreError::DuplicatePatient`] if the id is already
    /// registered; the existing record is left untouched.
    pub fn add_patient(&mut self, patient: Patient) -> Result<(), CoreError> {
        if self.patients.contains_key(&patient.patient_id) {
            return Err(CoreError::DuplicatePatient {
                id: patient.patient_id.clone(),
            });
        }
        self.patients.insert(patient.patient_id.clone(), patient);
        Ok(())
    }

    /// Inserts a patient unconditionally, replacing any record with the
    /// same id. Used when restoring from a snapshot, where the stored
    /// record (including its status) wins.
    pub fn insert_patient(&mut self, patient: Patient) {
        self.patients.insert(patient.patient_id.clone(), patient);
    }

    /// Looks up a patient by id.
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.get(id)
    }

    /// All patients, in insertion order.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    /// Marks a patient as discharged.
    ///
    /// Idempotent on an already-discharged patient. Fails with
    /// [`CoreError::PatientNotFound`] if the id is unknown.
    pub fn discharge(&mut self, id: &str) -> Result<(), CoreError> {
        match self.patients.get_mut(id) {
            Some(patient) => {
                patient.discharge();
                Ok(())
            }
            None => Err(CoreError::PatientNotFound { id: id.to_string() }),
        }
    }

    // -------------------------------------------------------------------
    // Doctor operations
    // -------------------------------------------------------------------

    /// Registers a new doctor, keyed by its `doctor_id`.
    ///
    /// Fails with [`CoreError::DuplicateDoctor`] if the id is already
    /// registered; the existing record is left untouched.
    pub fn add_doctor(&mut self, doctor: Doctor) -> Result<(), CoreError> {
        if self.doctors.contains_key(&doctor.doctor_id) {
            return Err(CoreError::DuplicateDoctor {
                id: doctor.doctor_id.clone(),
            });
        }
        self.doctors.insert(doctor.doctor_id.clone(), doctor);
        Ok(())
    }

    /// Inserts a doctor unconditionally, replacing any record with the
    /// same id. Snapshot-restore counterpart of [`Registry::add_doctor`].
    pub fn insert_doctor(&mut self, doctor: Doctor) {
        self.doctors.insert(doctor.doctor_id.clone(), doctor);
    }

    /// Looks up a doctor by id.
    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.get(id)
    }

    /// All doctors, in insertion order.
    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.doctors.values()
    }

    // -------------------------------------------------------------------
    // Cross-record operations
    // -------------------------------------------------------------------

    /// Resolves a patient/doctor pair for an assignment announcement.
    ///
    /// The patient side is checked first, then the doctor side. This is a
    /// read-only pairing: no relationship is recorded anywhere, so the
    /// assignment exists only in the caller's output.
    pub fn assignment(
        &self,
        patient_id: &str,
        doctor_id: &str,
    ) -> Result<(&Patient, &Doctor), CoreError> {
        let patient = self
            .patients
            .get(patient_id)
            .ok_or_else(|| CoreError::PatientNotFound {
                id: patient_id.to_string(),
            })?;
        let doctor = self
            .doctors
            .get(doctor_id)
            .ok_or_else(|| CoreError::DoctorNotFound {
                id: doctor_id.to_string(),
            })?;
        Ok((patient, doctor))
    }

    // -------------------------------------------------------------------
    // Sizing
    // -------------------------------------------------------------------

    /// Number of registered patients.
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Number of registered doctors.
    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    /// True when no records of either kind are held.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty() && self.doctors.is_empty()
    }
}

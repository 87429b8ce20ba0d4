//! App: the single coordinator between the shell and the core/storage
//! crates.
//!
//! All business logic flows through [`App`]. The shell is a thin wrapper
//! that collects input, delegates to these methods, and renders the
//! results.
//!
//! Persistence policy: every mutating operation snapshots the full
//! registry afterwards. Save failures are logged and absorbed here -- the
//! in-memory mutation stays in effect, and the caller never sees the
//! storage error. Load failures likewise degrade to an empty registry
//! instead of aborting startup.

use hospital_core::{CoreError, Doctor, Patient, Registry};
use hospital_storage::SnapshotStore;

/// The application service coordinating registry mutations, lookups, and
/// snapshot persistence.
///
/// Holds the in-memory registry and a storage backend for persistence.
pub struct App {
    /// The current in-memory registry.
    registry: Registry,
    /// Snapshot storage backend.
    store: Box<dyn SnapshotStore>,
}

impl App {
    /// Opens the application over a snapshot store.
    ///
    /// Loads the existing snapshot if one is present. A missing snapshot
    /// is a normal first run; a failed load is logged and leaves the
    /// registry empty rather than terminating.
    pub fn open(store: Box<dyn SnapshotStore>) -> Self {
        let registry = match store.load() {
            Ok(Some(registry)) => {
                tracing::info!("records loaded successfully");
                registry
            }
            Ok(None) => {
                tracing::info!("no existing records, starting empty");
                Registry::new()
            }
            Err(e) => {
                tracing::error!("error loading records: {}", e);
                Registry::new()
            }
        };
        App { registry, store }
    }

    /// Registers a new patient (status defaults to admitted) and persists.
    pub fn add_patient(
        &mut self,
        name: String,
        age: u32,
        patient_id: String,
        disease: String,
    ) -> Result<(), CoreError> {
        self.registry
            .add_patient(Patient::new(name, age, patient_id, disease))?;
        self.persist();
        Ok(())
    }

    /// Registers a new doctor and persists.
    pub fn add_doctor(
        &mut self,
        name: String,
        specialization: String,
        doctor_id: String,
    ) -> Result<(), CoreError> {
        self.registry
            .add_doctor(Doctor::new(name, specialization, doctor_id))?;
        self.persist();
        Ok(())
    }

    /// Resolves a patient/doctor pair for an assignment announcement.
    ///
    /// Purely informational: the pairing is rendered by the shell and
    /// recorded nowhere, so nothing is persisted.
    pub fn assign_doctor(
        &self,
        patient_id: &str,
        doctor_id: &str,
    ) -> Result<(&Patient, &Doctor), CoreError> {
        self.registry.assignment(patient_id, doctor_id)
    }

    /// Looks up a patient by id.
    pub fn search_patient(&self, id: &str) -> Option<&Patient> {
        self.registry.patient(id)
    }

    /// Looks up a doctor by id.
    pub fn search_doctor(&self, id: &str) -> Option<&Doctor> {
        self.registry.doctor(id)
    }

    /// All patients, in registry order.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.registry.patients()
    }

    /// All doctors, in registry order.
    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.registry.doctors()
    }

    /// Discharges a patient and persists.
    pub fn discharge(&mut self, id: &str) -> Result<(), CoreError> {
        self.registry.discharge(id)?;
        self.persist();
        Ok(())
    }

    /// The current in-memory registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Snapshots the full registry to the store.
    ///
    /// A failed save leaves the previous snapshot on disk while the
    /// in-memory registry keeps the mutation that triggered the save.
    fn persist(&mut self) {
        match self.store.save(&self.registry) {
            Ok(()) => tracing::info!("records saved successfully"),
            Err(e) => tracing::error!("error saving records: {}", e),
        }
    }
}

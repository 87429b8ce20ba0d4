//! In-memory implementation of [`SnapshotStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests, ephemeral
//! sessions, and anywhere persistence isn't needed. It holds the last
//! saved snapshot with identical semantics to the file backend.

use hospital_core::Registry;

use crate::error::StorageError;
use crate::snapshot::{decompose, recompose, Snapshot};
use crate::traits::SnapshotStore;

/// Snapshot store that never touches the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<Snapshot>,
}

impl InMemoryStore {
    /// Creates an empty store with no snapshot.
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Option<Registry>, StorageError> {
        Ok(self.snapshot.clone().map(recompose))
    }

    fn save(&mut self, registry: &Registry) -> Result<(), StorageError> {
        self.snapshot = Some(decompose(registry));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hospital_core::{AdmissionStatus, Patient};

    use super::*;

    #[test]
    fn fresh_store_has_no_snapshot() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let mut registry = Registry::new();
        registry
            .add_patient(Patient::new("Asha".into(), 34, "P1".into(), "Flu".into()))
            .unwrap();
        registry.discharge("P1").unwrap();

        store.save(&registry).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, registry);
        assert_eq!(
            loaded.patient("P1").unwrap().status,
            AdmissionStatus::Discharged
        );
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut store = InMemoryStore::new();
        let mut registry = Registry::new();
        registry
            .add_patient(Patient::new("Asha".into(), 34, "P1".into(), "Flu".into()))
            .unwrap();
        store.save(&registry).unwrap();

        // Mutating the live registry must not leak into the saved snapshot.
        registry.discharge("P1").unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.patient("P1").unwrap().is_admitted());
    }
}

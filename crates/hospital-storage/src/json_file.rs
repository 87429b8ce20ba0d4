//! JSON-file implementation of [`SnapshotStore`].
//!
//! [`JsonFileStore`] persists the registry as pretty-printed UTF-8 JSON at
//! a caller-chosen path. Saves are plain whole-file overwrites -- no
//! atomic-rename step -- which is an accepted limitation at this scale
//! (single user, single process, a handful of records).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use hospital_core::Registry;

use crate::error::StorageError;
use crate::snapshot::{decompose, recompose, Snapshot};
use crate::traits::SnapshotStore;

/// File-backed implementation of [`SnapshotStore`].
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store persisting to `path`. The file is not touched until
    /// the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// The snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Registry>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        Ok(Some(recompose(snapshot)))
    }

    fn save(&mut self, registry: &Registry) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&decompose(registry))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hospital_core::{AdmissionStatus, Doctor, Patient};
    use tempfile::tempdir;

    use super::*;

    fn populated_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .add_patient(Patient::new("Asha".into(), 34, "P1".into(), "Flu".into()))
            .unwrap();
        registry
            .add_doctor(Doctor::new("Rao".into(), "Cardiology".into(), "D1".into()))
            .unwrap();
        registry
    }

    #[test]
    fn load_missing_file_yields_no_snapshot() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("records.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("records.json"));

        let mut registry = populated_registry();
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
    fn save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("records.json"));

        store.save(&populated_registry()).unwrap();

        let mut smaller = Registry::new();
        smaller
            .add_doctor(Doctor::new("Mehta".into(), "Neurology".into(), "D2".into()))
            .unwrap();
        store.save(&smaller).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.patient_count(), 0);
        assert_eq!(loaded.doctor_count(), 1);
        assert!(loaded.doctor("D2").is_some());
    }

    #[test]
    fn snapshot_file_is_pretty_printed_with_expected_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&populated_registry()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\n  \"patients\""));
        assert!(contents.contains("\n  \"doctors\""));

        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["patients"]["P1"]["status"], "Admitted");
        assert_eq!(value["doctors"]["D1"]["specialization"], "Cardiology");
    }

    #[test]
    fn load_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn load_accepts_lowercase_status() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(
            &path,
            r#"{
  "patients": {
    "P1": {"name": "Asha", "age": 34, "patient_id": "P1", "disease": "Flu", "status": "discharged"}
  },
  "doctors": {}
}"#,
        )
        .unwrap();

        let loaded = JsonFileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(
            loaded.patient("P1").unwrap().status,
            AdmissionStatus::Discharged
        );
    }
}

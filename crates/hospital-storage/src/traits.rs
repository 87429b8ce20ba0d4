//! The [`SnapshotStore`] trait defining the storage contract for registry
//! snapshots.
//!
//! All backends (JsonFileStore, InMemoryStore) implement this trait,
//! ensuring they are fully swappable without changing application logic.
//! The trait is synchronous (not async) for simplicity in the current
//! single-threaded design, and object-safe so the application can hold a
//! `Box<dyn SnapshotStore>`.

use hospital_core::Registry;

use crate::error::StorageError;

/// The storage contract for registry snapshots.
pub trait SnapshotStore {
    /// Loads the last saved snapshot, reconstructing a full [`Registry`].
    ///
    /// Returns `Ok(None)` when no snapshot exists yet (for a file-backed
    /// store, a missing file). That is a normal first-run condition, not
    /// an error.
    fn load(&self) -> Result<Option<Registry>, StorageError>;

    /// Saves a full snapshot of the registry, overwriting any previous one.
    fn save(&mut self, registry: &Registry) -> Result<(), StorageError>;
}

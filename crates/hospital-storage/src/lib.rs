//! Storage abstraction for hospital registry snapshots.
//!
//! Provides the [`SnapshotStore`] trait defining the storage contract that
//! all backends implement, plus [`JsonFileStore`] and [`InMemoryStore`] as
//! first-class backends.
//!
//! # Architecture
//!
//! Persistence is whole-snapshot: every save serializes the full registry
//! and overwrites the previous snapshot, and every load reconstructs a
//! complete [`Registry`](hospital_core::Registry). There is no incremental
//! write path -- the expected scale is small and interactive, so O(total
//! records) per save is acceptable and keeps the on-disk format trivial.
//!
//! Stores report failures honestly through [`StorageError`]; the decision
//! to absorb a failure (keep the in-memory mutation, log, continue) belongs
//! to the application layer, not to the backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: SnapshotStore trait definition
//! - [`snapshot`]: Registry decompose/recompose functions
//! - [`json_file`]: JsonFileStore implementation
//! - [`memory`]: InMemoryStore implementation

pub mod error;
pub mod json_file;
pub mod memory;
pub mod snapshot;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use snapshot::Snapshot;
pub use traits::SnapshotStore;

//! Wardrobe persistence: the repository seam, a JSON snapshot format, and an
//! in-memory implementation used by tests and the CLI.

pub mod repository;
pub mod snapshot;

pub use repository::{InMemoryWardrobeRepository, RepositoryError, WardrobeRepository};
pub use snapshot::{load_snapshot, write_snapshot, SnapshotError};

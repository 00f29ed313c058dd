//! JSON wardrobe snapshots. The on-disk format is a plain array of items,
//! easy to export from other tooling and to inspect by hand.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use rewear_core::WardrobeItem;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not read wardrobe snapshot `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("could not write wardrobe snapshot `{path}`: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("malformed wardrobe snapshot `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

pub fn load_snapshot(path: &Path) -> Result<Vec<WardrobeItem>, SnapshotError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| SnapshotError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&contents)
        .map_err(|source| SnapshotError::Parse { path: path.to_path_buf(), source })
}

pub fn write_snapshot(path: &Path, items: &[WardrobeItem]) -> Result<(), SnapshotError> {
    let contents = serde_json::to_string_pretty(items)
        .map_err(|source| SnapshotError::Parse { path: path.to_path_buf(), source })?;
    fs::write(path, contents)
        .map_err(|source| SnapshotError::Write { path: path.to_path_buf(), source })
}

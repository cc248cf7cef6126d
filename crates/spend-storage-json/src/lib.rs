//! spend-storage-json
//!
//! Reads the static `{users, data}` JSON document the dashboard is fed from,
//! validating it before any aggregation sees it.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde_json::error::Category;
use spend_core::{storage::SnapshotSource, CoreError};
use spend_domain::DataSnapshot;

/// Filesystem-backed JSON data source.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonSnapshotSource {
    fn load_snapshot(&self) -> Result<DataSnapshot, CoreError> {
        load_snapshot_from_path(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Loads and validates a snapshot document from disk.
pub fn load_snapshot_from_path(path: &Path) -> Result<DataSnapshot, CoreError> {
    let data = fs::read_to_string(path)?;
    let snapshot = parse_snapshot(&data)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "snapshot parsed");
    Ok(snapshot)
}

/// Parses and validates a snapshot document.
///
/// Malformed dates and inconsistent records reject the whole document.
pub fn parse_snapshot(json: &str) -> Result<DataSnapshot, CoreError> {
    let snapshot: DataSnapshot = serde_json::from_str(json).map_err(map_serde_error)?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Checks invariants serde cannot express: unique user ids and ordered
/// validity windows.
pub fn validate_snapshot(snapshot: &DataSnapshot) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for user in &snapshot.users {
        if !seen.insert(user.id) {
            return Err(CoreError::DataIntegrity(format!(
                "duplicate user id {}",
                user.id
            )));
        }
    }

    for entry in &snapshot.data {
        for (index, record) in entry.items.iter().enumerate() {
            record.validity().map_err(|err| {
                CoreError::DataIntegrity(format!(
                    "user {} item {}: {}",
                    entry.user_id, index, err
                ))
            })?;
        }
    }
    Ok(())
}

fn map_serde_error(err: serde_json::Error) -> CoreError {
    match err.classify() {
        Category::Data => CoreError::DataIntegrity(err.to_string()),
        _ => CoreError::Serde(err.to_string()),
    }
}

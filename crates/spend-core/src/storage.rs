use spend_domain::DataSnapshot;

use crate::CoreError;

/// Abstraction over the external data source the dashboard loads from once.
pub trait SnapshotSource {
    fn load_snapshot(&self) -> Result<DataSnapshot, CoreError>;

    /// Human-readable location used in logs.
    fn describe(&self) -> String;
}

/// In-memory source, mostly useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotSource {
    snapshot: DataSnapshot,
}

impl StaticSnapshotSource {
    pub fn new(snapshot: DataSnapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotSource for StaticSnapshotSource {
    fn load_snapshot(&self) -> Result<DataSnapshot, CoreError> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        "in-memory snapshot".into()
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("No change notifier is attached")]
    MissingNotifier,
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Malformed snapshot: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

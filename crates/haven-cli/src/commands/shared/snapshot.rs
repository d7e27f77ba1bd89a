use std::path::Path;

use anyhow::Context;
use haven_core::Snapshot;

/// Read a JSON object from `path` as a record snapshot.
pub fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file {}", path.display()))?;
    Snapshot::parse(&text)
        .with_context(|| format!("invalid snapshot in {}", path.display()))
}

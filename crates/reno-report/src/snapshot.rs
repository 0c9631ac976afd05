use std::path::Path;

use reno_core::errors::{RenoError, RenoResult};
use reno_core::models::ProposalSnapshot;

/// Read and parse a proposal snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> RenoResult<ProposalSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|source| RenoError::SnapshotRead {
        path: path.display().to_string(),
        source,
    })?;
    parse_snapshot(&content, &path.display().to_string())
}

/// Parse a proposal snapshot from JSON text. `origin` names the source in errors.
pub fn parse_snapshot(json: &str, origin: &str) -> RenoResult<ProposalSnapshot> {
    serde_json::from_str(json).map_err(|e| RenoError::SnapshotParse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

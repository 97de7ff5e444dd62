//! Directory listing payload
//!
//! The directory answers with `{"servers": [{"id": ...}, ...]}`. A missing or
//! non-array `servers` field makes the whole listing malformed; a single entry
//! without a usable id is kept as [`DirectoryEntry::Unidentified`] so the scan
//! can report it and carry on with the rest.

use serde::Deserialize;

use crate::api::error::ApiError;
use crate::models::{DirectoryEntry, ServerSummary};

#[derive(Debug, Deserialize)]
struct DirectoryEnvelope {
    servers: Vec<serde_json::Value>,
}

/// Parse a directory response body into entries, in listing order
pub fn parse_directory(body: &str) -> Result<Vec<DirectoryEntry>, ApiError> {
    let envelope: DirectoryEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::malformed("directory", e.to_string()))?;

    let entries: Vec<DirectoryEntry> = envelope
        .servers
        .into_iter()
        .enumerate()
        .map(
            |(index, entry)| match serde_json::from_value::<ServerSummary>(entry) {
                Ok(summary) => DirectoryEntry::Listed(summary),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Directory entry without id");
                    DirectoryEntry::Unidentified {
                        index,
                        reason: e.to_string(),
                    }
                }
            },
        )
        .collect();

    tracing::debug!(
        total = entries.len(),
        unidentified = entries.iter().filter(|e| e.id().is_none()).count(),
        "Parsed directory listing"
    );

    Ok(entries)
}

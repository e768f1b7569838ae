//! Checksum calculation for ingested batches.

use sha2::{Digest, Sha256};

use crate::models::TripRecord;

/// Calculate SHA-256 checksum of serialized batch content.
///
/// # Arguments
/// * `content` - JSON string content of the batch
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Fingerprint a trip batch for the ingest report.
///
/// Two ingestions of byte-identical batches produce the same fingerprint,
/// which lets the dashboard tell a re-ingest from fresh data.
pub fn trips_checksum(trips: &[TripRecord]) -> serde_json::Result<String> {
    let content = serde_json::to_string(trips)?;
    Ok(calculate_checksum(&content))
}

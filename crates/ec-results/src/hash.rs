//! Content-based hashing for report IDs.

use ec_indicators::EnclosureResult;
use sha2::{Digest, Sha256};

pub fn compute_report_id(enclosures: &[EnclosureResult], engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let enclosures_json = serde_json::to_string(enclosures).unwrap_or_default();
    hasher.update(enclosures_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

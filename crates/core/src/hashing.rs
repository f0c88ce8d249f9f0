//! SHA-256 digests as lowercase hex.
//!
//! Content fingerprints and stored refresh-token hashes both go through
//! [`sha256_hex`], so the two stay in the same 64-character format.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

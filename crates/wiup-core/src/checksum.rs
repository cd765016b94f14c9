//! SHA-256 digest of an upload payload, for matching against the stored copy.

use sha2::{Digest, Sha256};

/// Compute SHA-256 of `data` and return the digest as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

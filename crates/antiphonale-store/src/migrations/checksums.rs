use sha2::{Digest, Sha256};

/// SHA-256 of a migration's SQL, hex encoded
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

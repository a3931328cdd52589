use sha2::{Digest, Sha256};

/// Compute the SHA-256 hex digest (lowercase) of the given bytes.
///
/// Used in two places: masking the sensitive plaintext before it is
/// written to state, and deriving the resource identifier from the
/// armored artifact. Total function, never fails.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

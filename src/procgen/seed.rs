//! World seeds from arbitrary text
//!
//! The text is hashed with SHA-256 and a 4-byte window of the digest is read
//! as a little-endian `i32`. The window rule is part of the determinism
//! contract: changing it changes every world ever shared by seed text.

use sha2::{Digest, Sha256};

/// Length of a SHA-256 digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Window index used for both the seed and the count
pub const SEED_WINDOW_INDEX: usize = 0;

/// SHA-256 of the UTF-8 bytes of `text`
pub fn digest(text: &str) -> [u8; DIGEST_LEN] {
    let mut h = Sha256::new();
    h.update(text.as_bytes());
    h.finalize().into()
}

/// Read the 4-byte window selected by `index` as a little-endian `i32`
///
/// The window start is `index % (DIGEST_LEN - 4)`, so any index stays in bounds.
pub fn window_i32(digest: &[u8; DIGEST_LEN], index: usize) -> i32 {
    let start = index % (DIGEST_LEN - 4);
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&digest[start..start + 4]);
    i32::from_le_bytes(bytes)
}

/// Non-negative extraction shared by seed and count
fn masked_window(text: &str) -> i32 {
    window_i32(&digest(text), SEED_WINDOW_INDEX) & i32::MAX
}

/// Deterministic non-negative seed for `text` (empty text is valid)
pub fn derive_seed(text: &str) -> i32 {
    masked_window(text)
}

/// Obstacle count in `1..=max_count` derived from `text`
pub fn derive_count(text: &str, max_count: u32) -> crate::Result<u32> {
    if max_count == 0 {
        return Err(crate::GenError::ZeroMaxCount);
    }
    Ok(masked_window(text) as u32 % max_count + 1)
}

//! SHA3-512 key derivation from arbitrary-length secrets.

use std::fmt;

use sha3::{Digest, Sha3_512};
use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Result, SwtError};

/// Length of derived key material in bytes.
pub const KEY_LEN: usize = 64;

// Fixed-length labels keep the context/no-context inputs unambiguous.
const LABEL_PLAIN: &[u8; 7] = b"swt-v1\x00";
const LABEL_CONTEXT: &[u8; 7] = b"swt-v1\x01";

/// Secret-derived key material, wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial([u8; KEY_LEN]);

impl KeyMaterial {
    /// Get a reference to the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}

/// Derive key material from a secret.
///
/// The hash covers, in order:
/// - a versioned label that also records whether a context is present
/// - `context_id`, when provided
/// - `secret` (hashed last)
///
/// Any non-empty secret is accepted. Empty secrets fail with
/// [`SwtError::InvalidKey`].
pub fn derive_key(secret: &[u8], context_id: Option<Uuid>) -> Result<KeyMaterial> {
    if secret.is_empty() {
        return Err(SwtError::InvalidKey);
    }

    let mut hasher = Sha3_512::new();

    // Include label and context ID if provided (e.g., tenant or purpose)
    match context_id {
        Some(ctx) => {
            hasher.update(LABEL_CONTEXT);
            hasher.update(ctx.as_bytes());
        }
        None => hasher.update(LABEL_PLAIN),
    }

    // Include secret last
    hasher.update(secret);

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&hasher.finalize());
    Ok(KeyMaterial(key))
}

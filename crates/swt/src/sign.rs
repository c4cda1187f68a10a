//! HMAC-SHA256 tags over token payloads.

use hmac::digest::{Key, KeyInit};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::hash::KeyMaterial;

type HmacSha256 = Hmac<Sha256>;

/// Length of an authentication tag in bytes.
pub const TAG_LEN: usize = 32;

/// Authentication tag embedded at the front of every token.
pub type Tag = [u8; TAG_LEN];

/// Compute the tag for `payload` under `key`.
pub fn sign(key: &KeyMaterial, payload: &[u8]) -> Tag {
    // KEY_LEN equals the SHA-256 block size, so the key fills an HMAC key exactly
    let mut mac = <HmacSha256 as KeyInit>::new(Key::<HmacSha256>::from_slice(key.as_bytes()));
    mac.update(payload);

    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    tag
}

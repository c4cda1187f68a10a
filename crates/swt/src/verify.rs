//! Token verification with constant-time comparison.

use subtle::ConstantTimeEq;

use crate::codec::{Envelope, decode};
use crate::error::{Result, SwtError};
use crate::hash::KeyMaterial;
use crate::sign::{Tag, sign};

/// Verify a token under `key`.
///
/// This function:
/// 1. Decodes the token into its tag and payload
/// 2. Recomputes the tag over the payload
/// 3. Compares the tags using constant-time comparison
///
/// # Returns
/// * `Ok(Envelope)` with the now-authenticated payload
/// * `Err` naming why the token was rejected
pub fn verify(token: &str, key: &KeyMaterial) -> Result<Envelope> {
    // Encoding and length errors surface before any MAC work
    let envelope = decode(token)?;

    verify_envelope(&envelope, key)?;
    Ok(envelope)
}

/// Verify an already decoded envelope under `key`.
pub fn verify_envelope(envelope: &Envelope, key: &KeyMaterial) -> Result<()> {
    // Recompute over the payload as received
    let computed = sign(key, envelope.payload());

    // Constant-time comparison to prevent timing attacks
    if tags_equal(&computed, envelope.tag()) {
        Ok(())
    } else {
        Err(SwtError::SignatureMismatch)
    }
}

/// Constant-time comparison of two tags.
fn tags_equal(a: &Tag, b: &Tag) -> bool {
    a[..].ct_eq(&b[..]).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use crate::hash::derive_key;

    #[test]
    fn test_verify_valid_token() {
        let key = derive_key(b"password", None).unwrap();
        let token = encode(&sign(&key, b"test data"), b"test data");

        let envelope = verify(&token, &key).unwrap();
        assert_eq!(envelope.payload(), b"test data");
    }

    #[test]
    fn test_verify_tampered_tag() {
        let key = derive_key(b"password", None).unwrap();
        let mut tag = sign(&key, b"test data");

        // Tamper with the last tag byte
        tag[31] ^= 0x01;

        let token = encode(&tag, b"test data");
        assert_eq!(verify(&token, &key), Err(SwtError::SignatureMismatch));
    }

    #[test]
    fn test_verify_swapped_payload() {
        let key = derive_key(b"password", None).unwrap();
        let token = encode(&sign(&key, b"sid: 1"), b"sid: 2");
        assert_eq!(verify(&token, &key), Err(SwtError::SignatureMismatch));
    }

    #[test]
    fn test_verify_wrong_key() {
        let key1 = derive_key(b"password", None).unwrap();
        let key2 = derive_key(b"pwd", None).unwrap();
        let token = encode(&sign(&key1, b"test data"), b"test data");
        assert_eq!(verify(&token, &key2), Err(SwtError::SignatureMismatch));
    }

    #[test]
    fn test_verify_propagates_decode_errors() {
        let key = derive_key(b"password", None).unwrap();
        assert_eq!(verify("not*base64", &key), Err(SwtError::InvalidEncoding));
        assert_eq!(verify("AAAA", &key), Err(SwtError::TooShort { actual: 3 }));
    }

    #[test]
    fn test_tags_equal() {
        let a = [5u8; 32];
        let mut b = a;
        assert!(tags_equal(&a, &b));
        b[0] = 6;
        assert!(!tags_equal(&a, &b));
    }
}

//! Wire encoding of `tag || payload` envelopes.

use data_encoding::BASE64URL_NOPAD;

use crate::error::{Result, SwtError};
use crate::sign::{TAG_LEN, Tag};

/// Decoded components of a token string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    tag: Tag,
    payload: Vec<u8>,
}

impl Envelope {
    /// The embedded authentication tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The payload bytes. Not authenticated until verified.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Take ownership of the payload bytes.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

/// Render `tag || payload` as URL-safe base64 without padding.
pub fn encode(tag: &Tag, payload: &[u8]) -> String {
    let mut envelope = Vec::with_capacity(TAG_LEN + payload.len());
    envelope.extend_from_slice(tag);
    envelope.extend_from_slice(payload);
    BASE64URL_NOPAD.encode(&envelope)
}

/// Decode a token string into its tag and payload.
///
/// # Returns
/// * `Envelope` holding the tag and a non-empty payload
/// * `InvalidEncoding` if the text is not canonical unpadded base64url
/// * `TooShort` if the decoded bytes leave no room for a payload
pub fn decode(token: &str) -> Result<Envelope> {
    let mut bytes = BASE64URL_NOPAD
        .decode(token.as_bytes())
        .map_err(|_| SwtError::InvalidEncoding)?;

    if bytes.len() <= TAG_LEN {
        return Err(SwtError::TooShort {
            actual: bytes.len(),
        });
    }

    // Payload length is implied by the total length.
    let payload = bytes.split_off(TAG_LEN);
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&bytes);

    Ok(Envelope { tag, payload })
}

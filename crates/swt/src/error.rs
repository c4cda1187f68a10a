//! Error types for token operations.

use thiserror::Error;

/// Errors that can occur while issuing, verifying or extracting tokens.
///
/// Callers that only care about trust should treat every verification error
/// the same way. The variants stay distinct so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwtError {
    /// The secret cannot be turned into key material (it is empty).
    #[error("Invalid key: secret must not be empty")]
    InvalidKey,

    /// A token was requested for a zero-length payload.
    #[error("Payload must not be empty")]
    EmptyPayload,

    /// Token text is not URL-safe unpadded base64.
    #[error("Invalid base64url encoding")]
    InvalidEncoding,

    /// Decoded token has no room for a non-empty payload after the tag.
    #[error("Token too short: decoded {actual} bytes, need more than {min}", min = crate::sign::TAG_LEN)]
    TooShort { actual: usize },

    /// Recomputed tag does not match the tag embedded in the token.
    #[error("Signature mismatch")]
    SignatureMismatch,
}

impl SwtError {
    /// Stable label for log lines and counters.
    pub fn kind(&self) -> &'static str {
        match self {
            SwtError::InvalidKey => "invalid_key",
            SwtError::EmptyPayload => "empty_payload",
            SwtError::InvalidEncoding => "invalid_encoding",
            SwtError::TooShort { .. } => "too_short",
            SwtError::SignatureMismatch => "signature_mismatch",
        }
    }
}

/// Result type alias for token operations.
pub type Result<T> = std::result::Result<T, SwtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_message_names_lengths() {
        let err = SwtError::TooShort { actual: 12 };
        assert_eq!(
            err.to_string(),
            "Token too short: decoded 12 bytes, need more than 32"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            SwtError::InvalidKey.kind(),
            SwtError::EmptyPayload.kind(),
            SwtError::InvalidEncoding.kind(),
            SwtError::TooShort { actual: 0 }.kind(),
            SwtError::SignatureMismatch.kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

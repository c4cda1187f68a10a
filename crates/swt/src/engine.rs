//! The token engine: issue, verify and extract.

use log::{debug, trace};

use crate::codec::{decode, encode};
use crate::config::SwtConfig;
use crate::error::{Result, SwtError};
use crate::hash::{KeyMaterial, derive_key};
use crate::sign::sign;
use crate::verify::verify;

/// Signs and verifies tokens with one piece of secret-derived key material.
///
/// An engine never changes key behind a shared reference. Use
/// [`Swt::rekey`] with exclusive access, [`Swt::rekeyed`] to build a
/// replacement, or [`KeySlot`](crate::KeySlot) to swap engines shared
/// between threads.
#[derive(Debug, Clone)]
pub struct Swt {
    key: KeyMaterial,
    config: SwtConfig,
}

impl Swt {
    /// Create an engine keyed by `secret` with the default config.
    pub fn new(secret: &[u8]) -> Result<Self> {
        Self::with_config(secret, SwtConfig::default())
    }

    /// Create an engine keyed by `secret`, bound to `config`.
    pub fn with_config(secret: &[u8], config: SwtConfig) -> Result<Self> {
        let key = derive_key(secret, config.context_id)?;
        Ok(Self { key, config })
    }

    /// Build a new engine with the same config and a different secret.
    pub fn rekeyed(&self, secret: &[u8]) -> Result<Self> {
        Self::with_config(secret, self.config.clone())
    }

    /// Replace the key material in place.
    ///
    /// On error the current key is kept. Tokens issued under the old key
    /// stop verifying once this returns `Ok`.
    pub fn rekey(&mut self, secret: &[u8]) -> Result<()> {
        self.key = derive_key(secret, self.config.context_id)?;
        debug!("engine rekeyed");
        Ok(())
    }

    pub fn config(&self) -> &SwtConfig {
        &self.config
    }

    /// Issue a token for `payload`.
    ///
    /// The same engine and payload always produce the same token.
    pub fn issue(&self, payload: &[u8]) -> Result<String> {
        if payload.is_empty() {
            return Err(SwtError::EmptyPayload);
        }

        let tag = sign(&self.key, payload);
        trace!("issued token for {} byte payload", payload.len());
        Ok(encode(&tag, payload))
    }

    /// Check that `token` was issued under this engine's key and is unaltered.
    pub fn verify(&self, token: &str) -> Result<()> {
        self.open(token).map(drop)
    }

    /// Verify `token` and return its payload from the same decode.
    pub fn open(&self, token: &str) -> Result<Vec<u8>> {
        match verify(token, &self.key) {
            Ok(envelope) => Ok(envelope.into_payload()),
            Err(err) => {
                debug!("token rejected: {}", err.kind());
                Err(err)
            }
        }
    }
}

/// Return the payload embedded in `token` WITHOUT checking its signature.
///
/// Nothing about the result is authenticated. Call [`Swt::verify`] first,
/// or use [`Swt::open`], whenever the payload's origin matters.
pub fn extract(token: &str) -> Result<Vec<u8>> {
    decode(token).map(|envelope| envelope.into_payload()).map_err(|err| {
        debug!("token extraction failed: {}", err.kind());
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_issue_verify_extract() {
        let swt = Swt::new(b"password").unwrap();
        let token = swt.issue(b"test data").unwrap();

        assert!(swt.verify(&token).is_ok());
        assert_eq!(extract(&token).unwrap(), b"test data");
        assert_eq!(swt.open(&token).unwrap(), b"test data");
    }

    #[test]
    fn test_issue_short_data() {
        let swt = Swt::new(b"password").unwrap();
        let token = swt.issue(b"0").unwrap();
        assert_eq!(token.len(), 44);
        assert!(swt.verify(&token).is_ok());
    }

    #[test]
    fn test_issue_empty_payload() {
        let swt = Swt::new(b"password").unwrap();
        assert_eq!(swt.issue(b""), Err(SwtError::EmptyPayload));
    }

    #[test]
    fn test_issue_deterministic() {
        let swt = Swt::new(b"password").unwrap();
        assert_eq!(swt.issue(b"abc").unwrap(), swt.issue(b"abc").unwrap());
    }

    #[test]
    fn test_new_empty_secret() {
        assert!(matches!(Swt::new(b""), Err(SwtError::InvalidKey)));
    }

    #[test]
    fn test_rekey_in_place() {
        let mut swt = Swt::new(b"0").unwrap();
        swt.rekey(b"password").unwrap();
        let token = swt.issue(b"sid: 4396, exp: 2200").unwrap();
        assert!(swt.verify(&token).is_ok());

        swt.rekey(b"pwd").unwrap();
        assert_eq!(swt.verify(&token), Err(SwtError::SignatureMismatch));
    }

    #[test]
    fn test_failed_rekey_keeps_key() {
        let mut swt = Swt::new(b"password").unwrap();
        let token = swt.issue(b"data").unwrap();

        assert_eq!(swt.rekey(b""), Err(SwtError::InvalidKey));
        assert!(swt.verify(&token).is_ok());
    }

    #[test]
    fn test_rekeyed_leaves_original() {
        let swt = Swt::new(b"password").unwrap();
        let token = swt.issue(b"data").unwrap();

        let next = swt.rekeyed(b"pwd").unwrap();
        assert!(swt.verify(&token).is_ok());
        assert_eq!(next.verify(&token), Err(SwtError::SignatureMismatch));
    }

    #[test]
    fn test_rekeyed_keeps_context() {
        let ctx = Uuid::new_v4();
        let swt = Swt::with_config(b"password", SwtConfig::new().with_context(ctx)).unwrap();
        let next = swt.rekeyed(b"pwd").unwrap();
        assert_eq!(next.config().context_id, Some(ctx));

        let bound = Swt::with_config(b"pwd", SwtConfig::new().with_context(ctx)).unwrap();
        let token = bound.issue(b"data").unwrap();
        assert!(next.verify(&token).is_ok());
    }

    #[test]
    fn test_wrong_context() {
        let issuer = Swt::with_config(b"password", SwtConfig::new().with_context(Uuid::new_v4()))
            .unwrap();
        let other = Swt::with_config(b"password", SwtConfig::new().with_context(Uuid::new_v4()))
            .unwrap();
        let plain = Swt::new(b"password").unwrap();

        let token = issuer.issue(b"data").unwrap();
        assert_eq!(other.verify(&token), Err(SwtError::SignatureMismatch));
        assert_eq!(plain.verify(&token), Err(SwtError::SignatureMismatch));
    }

    #[test]
    fn test_extract_does_not_authenticate() {
        let swt = Swt::new(b"password").unwrap();
        let stranger = Swt::new(b"pwd").unwrap();
        let token = stranger.issue(b"forged").unwrap();

        assert_eq!(extract(&token).unwrap(), b"forged");
        assert_eq!(swt.open(&token), Err(SwtError::SignatureMismatch));
    }

    #[test]
    fn test_engine_usable_after_failures() {
        let swt = Swt::new(b"password").unwrap();
        for bad in ["", "AAAA", "@@@@", "gaEl5DO5MpF186W-OlUlrkKAP-4f1ZcaNCNij9CNnOUw"] {
            assert!(swt.verify(bad).is_err());
        }
        let token = swt.issue(b"still fine").unwrap();
        assert!(swt.verify(&token).is_ok());
    }
}

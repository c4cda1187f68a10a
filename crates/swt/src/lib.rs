//! Compact self-verifying signed tokens.
//!
//! This crate provides functionality for:
//! - Deriving fixed-length key material from a secret of any length
//! - Issuing tokens that carry a payload together with its HMAC tag
//! - Verifying tokens using constant-time comparison
//! - Extracting payloads from tokens
//!
//! # Token Format
//!
//! Tokens are `base64url_nopad(tag || payload)`, where `tag` is a 32-byte
//! HMAC-SHA256 over the payload. The payload length is implied by the
//! token length, so a token for a 1-byte payload is 44 characters long.
//!
//! # Security Features
//!
//! - SHA3-512 key derivation with optional context binding
//! - Constant-time tag comparison to prevent timing attacks
//! - Memory zeroization of key material on drop
//!
//! There is no version byte in the token. Changing the derivation or MAC
//! invalidates every outstanding token.
//!
//! # Example
//!
//! ```rust
//! use swt::{extract, Swt, SwtError};
//!
//! let mut engine = Swt::new(b"password").unwrap();
//! let token = engine.issue(b"sid: 4396, exp: 2200").unwrap();
//!
//! // Always verify before trusting the payload
//! engine.verify(&token).unwrap();
//! assert_eq!(extract(&token).unwrap(), b"sid: 4396, exp: 2200");
//!
//! // Tokens from the old key stop verifying after a rekey
//! engine.rekey(b"another secret").unwrap();
//! assert_eq!(engine.verify(&token), Err(SwtError::SignatureMismatch));
//! ```

mod codec;
mod config;
mod engine;
mod error;
mod hash;
mod secret;
mod sign;
mod slot;
mod verify;

// Public re-exports
pub use codec::{Envelope, decode, encode};
pub use config::SwtConfig;
pub use engine::{Swt, extract};
pub use error::{Result, SwtError};
pub use hash::{KEY_LEN, KeyMaterial, derive_key};
pub use secret::{SECRET_LEN, generate_secret};
pub use sign::{TAG_LEN, Tag, sign};
pub use slot::KeySlot;
pub use verify::{verify, verify_envelope};

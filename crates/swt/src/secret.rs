//! Random secret generation.

use data_encoding::BASE64URL_NOPAD;
use rand::RngCore;
use zeroize::Zeroize;

/// Number of random bytes in a generated secret.
pub const SECRET_LEN: usize = 32;

/// Generate a fresh secret suitable for [`Swt::new`](crate::Swt::new).
///
/// 32 bytes from the OS CSPRNG, encoded as unpadded base64url so it can
/// live in a config file or environment variable.
pub fn generate_secret() -> String {
    let mut secret = [0u8; SECRET_LEN];
    rand::rngs::OsRng.fill_bytes(&mut secret);

    let encoded = BASE64URL_NOPAD.encode(&secret);
    secret.zeroize();
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_format() {
        let secret = generate_secret();
        // 32 bytes -> 43 base64 chars
        assert_eq!(secret.len(), 43);
        assert_eq!(BASE64URL_NOPAD.decode(secret.as_bytes()).unwrap().len(), SECRET_LEN);
    }

    #[test]
    fn test_secrets_unique() {
        assert_ne!(generate_secret(), generate_secret());
    }
}

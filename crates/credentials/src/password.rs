//! Salted password hashing.

use pbkdf2::pbkdf2_hmac;
use rand::Rng;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::{PBKDF2_ITERATIONS, SALT_LEN};

/// Length in bytes of the derived digest.
const HASH_LEN: usize = 32;

/// A salted password verifier.
///
/// Holds the PBKDF2-HMAC-SHA256 digest of a password together with the
/// random salt it was derived with. The plaintext is never stored.
#[derive(Clone)]
pub struct PasswordHash {
    hash: Vec<u8>,
    salt: Vec<u8>,
}

impl PasswordHash {
    /// Derives a verifier from a plaintext password with a fresh random salt.
    ///
    /// Every call generates a new salt, so two derivations of the same
    /// plaintext produce different stored bytes.
    pub fn derive(plaintext: &str) -> Self {
        let salt = generate_salt();
        let hash = derive_digest(plaintext, &salt);
        Self { hash, salt }
    }

    /// Checks a candidate password against the stored digest.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, candidate: &str) -> bool {
        let computed = derive_digest(candidate, &self.salt);
        self.hash.ct_eq(&computed).into()
    }

    /// Returns the stored digest bytes.
    pub fn hash_bytes(&self) -> &[u8] {
        &self.hash
    }

    /// Returns the stored salt bytes.
    pub fn salt_bytes(&self) -> &[u8] {
        &self.salt
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Digest and salt bytes stay out of logs.
        f.debug_struct("PasswordHash").finish_non_exhaustive()
    }
}

/// Generates a cryptographically random salt.
fn generate_salt() -> Vec<u8> {
    let mut rng = rand::rng();
    (0..SALT_LEN).map(|_| rng.random::<u8>()).collect()
}

/// Derives the PBKDF2-HMAC-SHA256 digest of a password with the given salt.
fn derive_digest(plaintext: &str, salt: &[u8]) -> Vec<u8> {
    let mut out = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(plaintext.as_bytes(), salt, PBKDF2_ITERATIONS, &mut out);
    out.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_round_trip() {
        let verifier = PasswordHash::derive("hunter2");

        assert!(verifier.verify("hunter2"));
        assert!(!verifier.verify("wrong"));
        assert!(!verifier.verify(""));
    }

    #[test]
    fn test_salt_rotation() {
        let first = PasswordHash::derive("hunter2");
        let second = PasswordHash::derive("hunter2");

        assert_ne!(first.salt_bytes(), second.salt_bytes());
        assert_ne!(first.hash_bytes(), second.hash_bytes());
        assert!(first.verify("hunter2"));
        assert!(second.verify("hunter2"));
    }

    #[test]
    fn test_derived_sizes() {
        let verifier = PasswordHash::derive("hunter2");

        assert_eq!(verifier.salt_bytes().len(), SALT_LEN);
        assert_eq!(verifier.hash_bytes().len(), HASH_LEN);
    }

    #[test]
    fn test_debug_redacts_bytes() {
        let verifier = PasswordHash::derive("hunter2");
        let rendered = format!("{:?}", verifier);

        assert!(!rendered.contains("hash:"));
        assert!(!rendered.contains("salt:"));
    }
}

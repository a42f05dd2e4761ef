//! Utilities for cryptographic algorithms

use crate::errors::{self, CustomResult};

/// Trait for generating a digest of a message
pub trait GenerateDigest {
    /// takes a message and creates a digest for it
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError>;

    /// Digest rendered as lowercase hex
    fn generate_hex_digest(&self, message: &[u8]) -> CustomResult<String, errors::CryptoError> {
        self.generate_digest(message).map(hex::encode)
    }
}

/// MD5 hash function
///
/// Only kept for gateways whose callback signatures are defined in terms of MD5.
#[derive(Debug)]
pub struct Md5;

impl GenerateDigest for Md5 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let digest = md5::compute(message);
        Ok(digest.as_ref().to_vec())
    }
}

#[cfg(test)]
mod crypto_tests {
    #![allow(clippy::expect_used)]
    use super::GenerateDigest;

    #[test]
    fn test_md5_digest() {
        let message = "abcdefghijklmnopqrstuvwxyz".as_bytes();
        assert_eq!(
            hex::encode(super::Md5.generate_digest(message).expect("Digest")),
            "c3fcd3d76192e4007dfb496cca67e13b"
        );
    }

    #[test]
    fn test_md5_hex_digest_is_lowercase() {
        let digest = super::Md5
            .generate_hex_digest(b"")
            .expect("Digest of empty message");

        assert_eq!(digest, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(digest, digest.to_lowercase());
    }
}

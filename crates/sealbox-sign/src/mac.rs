use rand::RngCore;
use subtle::ConstantTimeEq;

use crate::traits::Signer;

/// BLAKE3 keyed-MAC signer (32-byte tags).
///
/// Both signing and verification require the same 32-byte secret key.
/// Verification compares tags in constant time.
pub struct MacSigner {
    key: [u8; 32],
}

impl MacSigner {
    /// Create with a freshly generated random key.
    pub fn generate() -> Self {
        let mut key = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut key);
        Self { key }
    }

    /// Create from an existing 32-byte key.
    pub fn from_key(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Raw key bytes.
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    fn tag(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new_keyed(&self.key);
        hasher.update(data);
        *hasher.finalize().as_bytes()
    }
}

impl Signer for MacSigner {
    fn sign(&self, data: &[u8]) -> Vec<u8> {
        self.tag(data).to_vec()
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let expected = self.tag(data);
        expected.as_slice().ct_eq(signature).into()
    }
}

impl std::fmt::Debug for MacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MacSigner(<redacted>)")
    }
}

use chacha20poly1305::XChaCha20Poly1305;
use chacha20poly1305::aead::generic_array::GenericArray;
use chacha20poly1305::aead::{Aead, KeyInit};
use rand::RngCore;

use crate::error::{TransformError, TransformResult};
use crate::traits::Processor;

/// XChaCha20-Poly1305 nonce size in bytes.
const NONCE_SIZE: usize = 24;

/// Authenticated encryption transform (XChaCha20-Poly1305).
///
/// Output format: `[24 bytes: nonce] [N bytes: ciphertext + tag]`. A fresh
/// random nonce is drawn on every `apply` and prepended to the ciphertext,
/// so `reverse` is self-contained. The Poly1305 tag makes `reverse` fail on
/// any ciphertext modification.
pub struct XChaChaProcessor {
    key: [u8; 32],
}

impl XChaChaProcessor {
    /// Create with a freshly generated random key.
    pub fn new() -> Self {
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
}

impl Default for XChaChaProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for XChaChaProcessor {
    fn apply(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        let cipher = XChaCha20Poly1305::new(GenericArray::from_slice(&self.key));

        let mut nonce = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce);

        let ciphertext = cipher
            .encrypt(GenericArray::from_slice(&nonce), data)
            .map_err(|e| TransformError::Apply(format!("encryption failed: {e}")))?;

        let mut out = nonce.to_vec();
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn reverse(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        if data.len() < NONCE_SIZE {
            return Err(TransformError::Malformed(
                "input too short to contain a nonce".into(),
            ));
        }
        let (nonce, ciphertext) = data.split_at(NONCE_SIZE);

        let cipher = XChaCha20Poly1305::new(GenericArray::from_slice(&self.key));
        cipher
            .decrypt(GenericArray::from_slice(nonce), ciphertext)
            .map_err(|_| TransformError::Malformed("authentication tag mismatch".into()))
    }
}

impl std::fmt::Debug for XChaChaProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "XChaChaProcessor(<redacted>)")
    }
}

/// Repeating-key XOR transform.
///
/// XOR is its own inverse, so `apply` and `reverse` are the same operation.
/// Obfuscation only -- carries no authenticity and should sit inside a
/// signed unit like every other transform.
#[derive(Clone)]
pub struct XorProcessor {
    key: Vec<u8>,
}

impl XorProcessor {
    /// Create from a non-empty key.
    pub fn new(key: Vec<u8>) -> TransformResult<Self> {
        if key.is_empty() {
            return Err(TransformError::EmptyKey);
        }
        Ok(Self { key })
    }

    /// Create with a freshly generated random 32-byte key.
    pub fn generate() -> Self {
        let mut key = vec![0u8; 32];
        rand::thread_rng().fill_bytes(&mut key);
        Self { key }
    }

    fn xor(&self, data: &[u8]) -> Vec<u8> {
        data.iter()
            .zip(self.key.iter().cycle())
            .map(|(byte, key_byte)| byte ^ key_byte)
            .collect()
    }
}

impl Processor for XorProcessor {
    fn apply(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        Ok(self.xor(data))
    }

    fn reverse(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        Ok(self.xor(data))
    }
}

impl std::fmt::Debug for XorProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "XorProcessor(<redacted>, {} bytes)", self.key.len())
    }
}

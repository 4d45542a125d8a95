use crate::traits::Signer;

/// Ed25519 signer (64-byte signatures).
///
/// Holds the full keypair; the verifying key is derived from the signing
/// key. Key generation, storage, and distribution policy are the caller's
/// concern.
pub struct Ed25519Signer {
    signing: ed25519_dalek::SigningKey,
    verifying: ed25519_dalek::VerifyingKey,
}

impl Ed25519Signer {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut csprng = rand::thread_rng();
        let signing = ed25519_dalek::SigningKey::generate(&mut csprng);
        let verifying = signing.verifying_key();
        Self { signing, verifying }
    }

    /// Create from a raw 32-byte secret seed.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        let signing = ed25519_dalek::SigningKey::from_bytes(&bytes);
        let verifying = signing.verifying_key();
        Self { signing, verifying }
    }

    /// Raw secret key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.signing.as_bytes()
    }

    /// Raw public key bytes.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.verifying.to_bytes()
    }
}

impl Signer for Ed25519Signer {
    fn sign(&self, data: &[u8]) -> Vec<u8> {
        use ed25519_dalek::Signer as _;
        self.signing.sign(data).to_bytes().to_vec()
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        use ed25519_dalek::Verifier as _;
        let Ok(sig) = ed25519_dalek::Signature::from_slice(signature) else {
            return false;
        };
        self.verifying.verify(data, &sig).is_ok()
    }
}

impl std::fmt::Debug for Ed25519Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ed25519Signer(public: {})",
            hex::encode(self.verifying.to_bytes())
        )
    }
}

use crate::traits::Signer;

/// Plain digest "signer" (32-byte BLAKE3, domain-separated).
///
/// The signature is a keyless hash of the data, so this signer detects
/// accidental corruption but offers no authenticity: anyone who can rewrite
/// the data can rewrite the digest. Use [`MacSigner`](crate::MacSigner) or
/// [`Ed25519Signer`](crate::Ed25519Signer) when tamper resistance against an
/// active writer is required.
///
/// The domain tag is prepended to every hash computation, preventing digests
/// produced for one purpose from verifying in another.
#[derive(Clone, Copy)]
pub struct DigestSigner {
    domain: &'static str,
}

impl DigestSigner {
    /// Digest signer with the default domain tag.
    pub const DEFAULT: Self = Self {
        domain: "sealbox-digest-v1",
    };

    /// Create a digest signer with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// The domain tag used by this signer.
    pub fn domain(&self) -> &str {
        self.domain
    }

    fn digest(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        *hasher.finalize().as_bytes()
    }
}

impl Default for DigestSigner {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Signer for DigestSigner {
    fn sign(&self, data: &[u8]) -> Vec<u8> {
        self.digest(data).to_vec()
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        self.digest(data).as_slice() == signature
    }
}

impl std::fmt::Debug for DigestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DigestSigner({})", self.domain)
    }
}

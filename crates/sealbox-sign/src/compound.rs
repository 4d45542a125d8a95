use crate::traits::Signer;

/// Composes an ordered sequence of signers into one signer.
///
/// Each constituent independently signs the same original data (parallel
/// multi-signing), and the compound signature is a self-describing encoding
/// of all per-signer signatures:
///
/// ```text
/// [4 bytes: signature count (little-endian u32)]
/// for each signature, in signer declaration order:
///   [4 bytes: signature length (little-endian u32)]
///   [N bytes: signature]
/// ```
///
/// Constituent signatures are of variable, signer-dependent size, hence the
/// per-signature length prefixes. Verification decodes the blob and requires
/// EVERY constituent signer to verify against the original data; a count
/// that disagrees with the configured signers, truncated framing, or
/// trailing bytes all fail verification.
#[derive(Default)]
pub struct CompoundSigner {
    signers: Vec<Box<dyn Signer>>,
}

impl CompoundSigner {
    /// Create from an ordered list of signers.
    pub fn new(signers: Vec<Box<dyn Signer>>) -> Self {
        Self { signers }
    }

    /// Append a signer to the end of the chain.
    pub fn push(&mut self, signer: Box<dyn Signer>) {
        self.signers.push(signer);
    }

    /// Number of constituent signers.
    pub fn len(&self) -> usize {
        self.signers.len()
    }

    /// Returns `true` if there are no constituent signers.
    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }

    /// Decode a compound signature blob into per-signer signatures.
    ///
    /// Returns `None` on truncated framing or trailing bytes.
    fn decode(blob: &[u8]) -> Option<Vec<&[u8]>> {
        let (header, mut rest) = read_u32(blob)?;
        let count = header as usize;

        let mut signatures = Vec::with_capacity(count);
        for _ in 0..count {
            let (length, after_length) = read_u32(rest)?;
            let length = length as usize;
            if after_length.len() < length {
                return None;
            }
            let (signature, after_signature) = after_length.split_at(length);
            signatures.push(signature);
            rest = after_signature;
        }

        if !rest.is_empty() {
            return None;
        }
        Some(signatures)
    }
}

/// Split a little-endian u32 off the front of a byte slice.
fn read_u32(data: &[u8]) -> Option<(u32, &[u8])> {
    if data.len() < 4 {
        return None;
    }
    let (prefix, rest) = data.split_at(4);
    let value = u32::from_le_bytes(prefix.try_into().expect("split_at returned 4 bytes"));
    Some((value, rest))
}

impl Signer for CompoundSigner {
    fn sign(&self, data: &[u8]) -> Vec<u8> {
        let mut blob = Vec::new();
        blob.extend_from_slice(&(self.signers.len() as u32).to_le_bytes());
        for signer in &self.signers {
            let signature = signer.sign(data);
            blob.extend_from_slice(&(signature.len() as u32).to_le_bytes());
            blob.extend_from_slice(&signature);
        }
        blob
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let Some(signatures) = Self::decode(signature) else {
            return false;
        };
        if signatures.len() != self.signers.len() {
            return false;
        }
        self.signers
            .iter()
            .zip(signatures)
            .all(|(signer, sig)| signer.verify(data, sig))
    }
}

impl std::fmt::Debug for CompoundSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompoundSigner")
            .field("len", &self.signers.len())
            .finish()
    }
}

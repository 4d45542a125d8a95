use std::sync::Arc;

use sealbox_sign::Signer;
use sealbox_transform::Processor;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::traits::ByteStore;

/// Suffix of the signature sidecar location.
const SIG_SUFFIX: &str = ".sig";

/// An integrity-checked storage unit.
///
/// Binds an optional transform chain and a signer to a storage location.
/// The unit persists two sibling blobs: the transformed payload at the data
/// location and its signature at `<location>.sig`. The pair is one logical
/// unit -- a read verifies the signature over the persisted data BEFORE
/// reversing the transform, and fails closed on any mismatch.
///
/// The two writes backing [`write`](Self::write) are not atomic together. A
/// crash between them leaves a mismatched pair that the next read reports
/// as [`StoreError::SignatureMismatch`]; stale or corrupt data is never
/// silently returned.
pub struct SignedFile {
    store: Arc<dyn ByteStore>,
    location: String,
    signature_location: String,
    signer: Box<dyn Signer>,
    processor: Option<Box<dyn Processor>>,
}

impl SignedFile {
    /// Bind a signer to a location with no transform chain.
    pub fn new(store: Arc<dyn ByteStore>, location: impl Into<String>, signer: Box<dyn Signer>) -> Self {
        let location = location.into();
        let signature_location = format!("{location}{SIG_SUFFIX}");
        Self {
            store,
            location,
            signature_location,
            signer,
            processor: None,
        }
    }

    /// Attach a transform chain applied on write and reversed on read.
    pub fn with_processor(mut self, processor: Box<dyn Processor>) -> Self {
        self.processor = Some(processor);
        self
    }

    /// The data blob location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The signature sidecar location.
    pub fn signature_location(&self) -> &str {
        &self.signature_location
    }

    /// Whether the data blob is present (the sidecar is not consulted).
    pub fn exists(&self) -> StoreResult<bool> {
        self.store.exists(&self.location)
    }

    /// Ensure both the data blob and the sidecar exist as empty blobs.
    ///
    /// Fails with [`StoreError::AlreadyExists`] if `exist_ok` is false and
    /// either blob is already present. With `exist_ok`, existing contents
    /// are left untouched.
    pub fn create(&self, exist_ok: bool) -> StoreResult<()> {
        for location in [&self.location, &self.signature_location] {
            if self.store.exists(location)? {
                if !exist_ok {
                    return Err(StoreError::AlreadyExists {
                        location: location.clone(),
                    });
                }
            } else {
                self.store.write(location, &[])?;
            }
        }
        Ok(())
    }

    /// Transform, sign, and persist a payload, replacing prior contents.
    ///
    /// The data blob is written before the signature so that a crash in
    /// between is detected by the next read, never silently accepted.
    pub fn write(&self, payload: &[u8]) -> StoreResult<()> {
        let data = match &self.processor {
            Some(processor) => processor.apply(payload)?,
            None => payload.to_vec(),
        };
        let signature = self.signer.sign(&data);

        self.store.write(&self.location, &data)?;
        self.store.write(&self.signature_location, &signature)?;
        debug!(
            location = %self.location,
            payload_bytes = payload.len(),
            stored_bytes = data.len(),
            "wrote signed unit"
        );
        Ok(())
    }

    /// Load, verify, and reverse-transform the stored payload.
    ///
    /// Fails with [`StoreError::DataNotFound`] if either blob is missing and
    /// with [`StoreError::SignatureMismatch`] if verification fails; the
    /// transform chain is only reversed after successful verification.
    pub fn read(&self) -> StoreResult<Vec<u8>> {
        let signature = self
            .store
            .read(&self.signature_location)?
            .ok_or(StoreError::DataNotFound)?;
        let data = self
            .store
            .read(&self.location)?
            .ok_or(StoreError::DataNotFound)?;

        if !self.signer.verify(&data, &signature) {
            warn!(location = %self.location, "signature verification failed");
            return Err(StoreError::SignatureMismatch);
        }

        match &self.processor {
            Some(processor) => Ok(processor.reverse(&data)?),
            None => Ok(data),
        }
    }

    /// Append to the stored payload: read-verify-append-rewrite.
    ///
    /// Not an incremental append -- the signature covers the whole
    /// transformed blob, so the unit is rewritten in full.
    pub fn extend(&self, payload: &[u8]) -> StoreResult<()> {
        let mut combined = self.read()?;
        combined.extend_from_slice(payload);
        self.write(&combined)
    }

    /// Remove the data blob and its signature sidecar.
    ///
    /// Returns `true` if the data blob existed. Idempotent.
    pub fn delete(&self) -> StoreResult<bool> {
        let existed = self.store.delete(&self.location)?;
        self.store.delete(&self.signature_location)?;
        Ok(existed)
    }
}

impl std::fmt::Debug for SignedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedFile")
            .field("location", &self.location)
            .field("has_processor", &self.processor.is_some())
            .finish()
    }
}

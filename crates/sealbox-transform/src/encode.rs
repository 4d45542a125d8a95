use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{TransformError, TransformResult};
use crate::traits::Processor;

/// Standard-alphabet base64 transform.
///
/// Useful as the last link of a chain when the storage collaborator prefers
/// text-safe bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base64Processor;

impl Base64Processor {
    /// Create a new base64 transform.
    pub fn new() -> Self {
        Self
    }
}

impl Processor for Base64Processor {
    fn apply(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        Ok(STANDARD.encode(data).into_bytes())
    }

    fn reverse(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        STANDARD
            .decode(data)
            .map_err(|e| TransformError::Malformed(format!("invalid base64: {e}")))
    }
}

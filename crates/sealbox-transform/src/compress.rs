use crate::error::{TransformError, TransformResult};
use crate::traits::Processor;

/// Compression level used for all zstd transforms.
const ZSTD_LEVEL: i32 = 3;

/// Zstd compression transform.
///
/// Stateless: the zstd frame is self-describing, so `reverse` needs nothing
/// beyond the compressed bytes themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZstdProcessor;

impl ZstdProcessor {
    /// Create a new zstd transform.
    pub fn new() -> Self {
        Self
    }
}

impl Processor for ZstdProcessor {
    fn apply(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        zstd::encode_all(data, ZSTD_LEVEL).map_err(|e| TransformError::Apply(e.to_string()))
    }

    fn reverse(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        zstd::decode_all(data).map_err(|e| TransformError::Malformed(e.to_string()))
    }
}

//! Reversible byte transforms for sealbox.
//!
//! A [`Processor`] is a reversible transform over a byte sequence: compress,
//! encrypt, encode. Processors compose through [`CompoundProcessor`], which
//! applies its constituents in declared order and reverses them in exactly
//! the opposite order.
//!
//! # Transforms
//!
//! - [`ZstdProcessor`] -- zstd compression
//! - [`XChaChaProcessor`] -- XChaCha20-Poly1305 authenticated encryption
//! - [`XorProcessor`] -- repeating-key XOR (symmetric)
//! - [`Base64Processor`] -- standard-alphabet base64
//!
//! All transforms satisfy `reverse(apply(x)) == x`. Transforms that draw
//! per-call randomness (the cipher nonce) encode it into their own output,
//! so `reverse` never needs external state.

pub mod cipher;
pub mod compound;
pub mod compress;
pub mod encode;
pub mod error;
pub mod traits;

pub use cipher::{XChaChaProcessor, XorProcessor};
pub use compound::CompoundProcessor;
pub use compress::ZstdProcessor;
pub use encode::Base64Processor;
pub use error::{TransformError, TransformResult};
pub use traits::Processor;

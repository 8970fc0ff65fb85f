/// Encrypted scalar and tensor algebra. Backend agnostic traits plus the idealized
/// (exact value) ciphertext types.
pub mod algebra;
/// Circuits built only from the public operations of [`algebra`]
pub mod circuits;
pub mod embedding;
mod error;
/// Boundary to the external key generation and collective decryption protocols
pub mod keys;
pub mod logger;
/// Backend delegating to the `tfhe-rs` high level integer API
pub mod tfhe;
pub mod util;

pub use error::{DecryptionError, Error, Result, ShapeError};

/// Number of lanes in an [`algebra::tensor::EncTensor`]
pub const DEFAULT_TENSOR_LEN: usize = 1024;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Decryption(#[from] DecryptionError),
    #[error("invalid committee: threshold {threshold} with {parties} parties")]
    InvalidCommittee { parties: usize, threshold: usize },
    #[error("value {value} out of range for modulus {modulus}")]
    OutOfRange { value: f32, modulus: u64 },
}

/// Input shape violation. Raised before any ciphertext operation runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("tensor input of length {len} exceeds capacity {capacity}")]
    TensorTooLong { len: usize, capacity: usize },
    #[error("dimension {dim} outside 1..={capacity}")]
    InvalidDimension { dim: usize, capacity: usize },
    #[error("length mismatch for {what}: {left} != {right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },
}

/// Failure of the collective decryption round. Never carries partial plaintext.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecryptionError {
    #[error("decryption quorum not reached: {participants} participants, threshold {threshold}")]
    QuorumNotReached {
        participants: usize,
        threshold: usize,
    },
}

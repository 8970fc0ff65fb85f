//! Key generation and collective decryption.
//!
//! Both are external multi-party protocols. [`PublicKeyT`] and [`CollectiveDecryptT`] are the
//! seam behind which a real scheme is plugged in (see [`crate::tfhe`]). [`key_gen`] and
//! [`Committee`] are the idealized stand-ins: ciphertexts carry their exact value and no key
//! material exists.

use crate::algebra::plain::{EncBool, EncUint32, EncUint8};
use crate::algebra::tensor::EncTensor;
use crate::algebra::{FheBoolT, FheUintT};
use crate::{DecryptionError, Error, ShapeError};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Capability to mint ciphertexts from plaintext
pub trait PublicKeyT: Send + Sync {
    type Bool: FheBoolT;
    type U8: FheUintT<Clear = u8, Bool = Self::Bool>;
    type U32: FheUintT<Clear = u32, Bool = Self::Bool>;

    fn encrypt_bool(&self, value: bool) -> Self::Bool;

    fn encrypt_u8(&self, value: u8) -> Self::U8;

    fn encrypt_u32(&self, value: u32) -> Self::U32;

    fn encrypt_u8_slice(&self, values: &[u8]) -> Vec<Self::U8> {
        values
            .par_iter()
            .map(|value| self.encrypt_u8(*value))
            .collect()
    }

    fn encrypt_u32_slice(&self, values: &[u32]) -> Vec<Self::U32> {
        values
            .par_iter()
            .map(|value| self.encrypt_u32(*value))
            .collect()
    }
}

/// Collective decryption round. Either the full plaintext is revealed or an error is returned,
/// never partial information.
pub trait CollectiveDecryptT: Send + Sync {
    type Bool: Sync;
    type U8: Sync;
    type U32: Sync;

    fn decrypt_bool(&self, ct: &Self::Bool) -> Result<bool, DecryptionError>;

    fn decrypt_u8(&self, ct: &Self::U8) -> Result<u8, DecryptionError>;

    fn decrypt_u32(&self, ct: &Self::U32) -> Result<u32, DecryptionError>;

    fn decrypt_u32_slice(&self, cts: &[Self::U32]) -> Result<Vec<u32>, DecryptionError> {
        cts.par_iter().map(|ct| self.decrypt_u32(ct)).collect()
    }
}

/// Idealized collective public key
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicKey {
    _private: (),
}

/// Stand-in for the one round key generation protocol. Deterministic and idempotent.
pub fn key_gen() -> PublicKey {
    PublicKey { _private: () }
}

impl PublicKey {
    /// Encrypt up to [`crate::DEFAULT_TENSOR_LEN`] lanes, zero padding the remainder
    pub fn encrypt_tensor(&self, values: &[f32]) -> Result<EncTensor, ShapeError> {
        EncTensor::new(values)
    }
}

impl PublicKeyT for PublicKey {
    type Bool = EncBool;
    type U8 = EncUint8;
    type U32 = EncUint32;

    fn encrypt_bool(&self, value: bool) -> EncBool {
        EncBool::new(value)
    }

    fn encrypt_u8(&self, value: u8) -> EncUint8 {
        EncUint8::new(value)
    }

    fn encrypt_u32(&self, value: u32) -> EncUint32 {
        EncUint32::new(value)
    }
}

/// Idealized t-of-n decryption committee. Decryption succeeds only if at least `threshold`
/// of the `parties` participate in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Committee {
    parties: usize,
    threshold: usize,
    participants: usize,
}

impl Default for Committee {
    /// Single party committee, decryption always succeeds
    fn default() -> Self {
        Self {
            parties: 1,
            threshold: 1,
            participants: 1,
        }
    }
}

impl Committee {
    /// Committee where all parties participate
    pub fn new(parties: usize, threshold: usize) -> Result<Self, Error> {
        if threshold == 0 || threshold > parties {
            return Err(Error::InvalidCommittee { parties, threshold });
        }

        Ok(Self {
            parties,
            threshold,
            participants: parties,
        })
    }

    /// Number of parties that show up for decryption rounds, capped at the committee size
    pub fn with_participants(mut self, participants: usize) -> Self {
        self.participants = participants.min(self.parties);
        self
    }

    pub fn parties(&self) -> usize {
        self.parties
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    fn run_round<T>(&self, reveal: impl FnOnce() -> T) -> Result<T, DecryptionError> {
        if self.participants < self.threshold {
            return Err(DecryptionError::QuorumNotReached {
                participants: self.participants,
                threshold: self.threshold,
            });
        }
        Ok(reveal())
    }

    pub fn decrypt_tensor(&self, ct: &EncTensor) -> Result<Vec<f32>, DecryptionError> {
        self.run_round(|| ct.reveal())
    }
}

impl CollectiveDecryptT for Committee {
    type Bool = EncBool;
    type U8 = EncUint8;
    type U32 = EncUint32;

    fn decrypt_bool(&self, ct: &EncBool) -> Result<bool, DecryptionError> {
        self.run_round(|| ct.reveal())
    }

    fn decrypt_u8(&self, ct: &EncUint8) -> Result<u8, DecryptionError> {
        self.run_round(|| ct.reveal())
    }

    fn decrypt_u32(&self, ct: &EncUint32) -> Result<u32, DecryptionError> {
        self.run_round(|| ct.reveal())
    }
}

//! Backend on the `tfhe-rs` high level integer API. `FheBool`, `FheUint8` and `FheUint32` implement
//! the algebra traits directly, so every circuit runs unchanged on real TFHE ciphertexts.
//!
//! `tfhe-rs` has a single client key, so [`TfheContext`] (encryption) and [`TfheCommittee`]
//! (decryption) share it. In a threshold deployment the client key is replaced by a collective
//! public key and decryption shares.

use crate::algebra::{FheBoolT, FheUintT};
use crate::keys::{CollectiveDecryptT, PublicKeyT};
use crate::DecryptionError;
use std::sync::Arc;
use std::time::Instant;
use tfhe::prelude::{FheDecrypt, FheEncrypt, FheEq, FheOrd, FheTrivialEncrypt, IfThenElse};
use tfhe::{ClientKey, ConfigBuilder, FheBool, FheUint32, FheUint8, ServerKey};
use tracing::debug;

impl FheBoolT for FheBool {
    fn trivial(value: bool) -> Self {
        FheBool::encrypt_trivial(value)
    }

    fn and(&self, rhs: &Self) -> Self {
        self & rhs
    }

    fn or(&self, rhs: &Self) -> Self {
        self | rhs
    }

    fn not(&self) -> Self {
        !self
    }
}

macro_rules! tfhe_uint {
    ($fhe:ty, $clear:ty) => {
        impl FheUintT for $fhe {
            type Clear = $clear;
            type Bool = FheBool;

            fn trivial(value: $clear) -> Self {
                <$fhe>::encrypt_trivial(value)
            }

            fn from_bool(cond: &FheBool) -> Self {
                let one = <Self as FheUintT>::trivial(1);
                let zero = <Self as FheUintT>::zero();
                cond.if_then_else(&one, &zero)
            }

            fn add(&self, rhs: &Self) -> Self {
                self + rhs
            }

            fn sub(&self, rhs: &Self) -> Self {
                self - rhs
            }

            fn mul(&self, rhs: &Self) -> Self {
                self * rhs
            }

            fn cmp_lt(&self, rhs: &Self) -> FheBool {
                FheOrd::lt(self, rhs)
            }

            fn cmp_le(&self, rhs: &Self) -> FheBool {
                FheOrd::le(self, rhs)
            }

            fn cmp_eq(&self, rhs: &Self) -> FheBool {
                FheEq::eq(self, rhs)
            }

            fn cmp_ne(&self, rhs: &Self) -> FheBool {
                FheEq::ne(self, rhs)
            }

            fn cmp_gt(&self, rhs: &Self) -> FheBool {
                FheOrd::gt(self, rhs)
            }

            fn cmp_ge(&self, rhs: &Self) -> FheBool {
                FheOrd::ge(self, rhs)
            }

            /// Native multiplexer, cheaper than a ciphertext multiplication
            fn mask(&self, cond: &FheBool) -> Self {
                cond.if_then_else(self, &<Self as FheUintT>::zero())
            }
        }
    };
}

tfhe_uint!(FheUint8, u8);
tfhe_uint!(FheUint32, u32);

/// Encryption side of the backend. Holds the server key that must be installed on every thread
/// evaluating circuits.
#[derive(Clone)]
pub struct TfheContext {
    server_key: ServerKey,
    client_key: Arc<ClientKey>,
}

/// Decryption side of the backend
#[derive(Clone)]
pub struct TfheCommittee {
    client_key: Arc<ClientKey>,
}

impl TfheContext {
    /// Generates keys with the default `tfhe-rs` parameters and installs the server key on
    /// the current thread and the `rayon` pool.
    pub fn generate_keys() -> (TfheCommittee, Self) {
        let start = Instant::now();
        let config = ConfigBuilder::default().build();
        let (client_key, server_key) = tfhe::generate_keys(config);
        debug!("tfhe keys generated in {:?}", start.elapsed());

        let client_key = Arc::new(client_key);
        let context = Self {
            server_key,
            client_key: client_key.clone(),
        };
        context.install();

        (TfheCommittee { client_key }, context)
    }

    /// The server key is thread local in `tfhe-rs`. Must be called on any thread, other than
    /// `rayon` workers, that evaluates circuits.
    pub fn install(&self) {
        tfhe::set_server_key(self.server_key.clone());
        let server_key = &self.server_key;
        rayon::broadcast(|_| tfhe::set_server_key(server_key.clone()));
    }
}

impl PublicKeyT for TfheContext {
    type Bool = FheBool;
    type U8 = FheUint8;
    type U32 = FheUint32;

    fn encrypt_bool(&self, value: bool) -> FheBool {
        FheBool::encrypt(value, self.client_key.as_ref())
    }

    fn encrypt_u8(&self, value: u8) -> FheUint8 {
        FheUint8::encrypt(value, self.client_key.as_ref())
    }

    fn encrypt_u32(&self, value: u32) -> FheUint32 {
        FheUint32::encrypt(value, self.client_key.as_ref())
    }
}

impl CollectiveDecryptT for TfheCommittee {
    type Bool = FheBool;
    type U8 = FheUint8;
    type U32 = FheUint32;

    fn decrypt_bool(&self, ct: &FheBool) -> Result<bool, DecryptionError> {
        Ok(ct.decrypt(self.client_key.as_ref()))
    }

    fn decrypt_u8(&self, ct: &FheUint8) -> Result<u8, DecryptionError> {
        Ok(ct.decrypt(self.client_key.as_ref()))
    }

    fn decrypt_u32(&self, ct: &FheUint32) -> Result<u32, DecryptionError> {
        Ok(ct.decrypt(self.client_key.as_ref()))
    }
}

//! Idealized ciphertexts carrying their exact value, for functional prototyping of circuits.
//! Values can only be created through [`crate::keys::PublicKey`] (or as public constants via
//! `trivial`) and only read through [`crate::keys::Committee`].

use crate::algebra::{FheBoolT, FheUintT};
use std::fmt::{Debug, Formatter};

#[derive(Clone, Copy)]
pub struct EncBool(bool);

impl EncBool {
    pub(crate) fn new(value: bool) -> Self {
        Self(value)
    }

    pub(crate) fn reveal(&self) -> bool {
        self.0
    }
}

impl FheBoolT for EncBool {
    fn trivial(value: bool) -> Self {
        Self(value)
    }

    fn and(&self, rhs: &Self) -> Self {
        Self(self.0 & rhs.0)
    }

    fn or(&self, rhs: &Self) -> Self {
        Self(self.0 | rhs.0)
    }

    fn not(&self) -> Self {
        Self(!self.0)
    }
}

impl Debug for EncBool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("EncBool(..)")
    }
}

macro_rules! enc_uint {
    ($name:ident, $clear:ty) => {
        #[doc = concat!("Encrypted `", stringify!($clear), "` with wrapping arithmetic")]
        #[derive(Clone, Copy)]
        pub struct $name($clear);

        impl $name {
            pub(crate) fn new(value: $clear) -> Self {
                Self(value)
            }

            pub(crate) fn reveal(&self) -> $clear {
                self.0
            }
        }

        impl FheUintT for $name {
            type Clear = $clear;
            type Bool = EncBool;

            fn trivial(value: $clear) -> Self {
                Self(value)
            }

            fn from_bool(cond: &EncBool) -> Self {
                Self(<$clear>::from(cond.0))
            }

            fn add(&self, rhs: &Self) -> Self {
                Self(self.0.wrapping_add(rhs.0))
            }

            fn sub(&self, rhs: &Self) -> Self {
                Self(self.0.wrapping_sub(rhs.0))
            }

            fn mul(&self, rhs: &Self) -> Self {
                Self(self.0.wrapping_mul(rhs.0))
            }

            fn cmp_lt(&self, rhs: &Self) -> EncBool {
                EncBool(self.0 < rhs.0)
            }

            fn cmp_le(&self, rhs: &Self) -> EncBool {
                EncBool(self.0 <= rhs.0)
            }

            fn cmp_eq(&self, rhs: &Self) -> EncBool {
                EncBool(self.0 == rhs.0)
            }

            fn cmp_ne(&self, rhs: &Self) -> EncBool {
                EncBool(self.0 != rhs.0)
            }

            fn cmp_gt(&self, rhs: &Self) -> EncBool {
                EncBool(self.0 > rhs.0)
            }

            fn cmp_ge(&self, rhs: &Self) -> EncBool {
                EncBool(self.0 >= rhs.0)
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(concat!(stringify!($name), "(..)"))
            }
        }
    };
}

enc_uint!(EncUint8, u8);
enc_uint!(EncUint32, u32);

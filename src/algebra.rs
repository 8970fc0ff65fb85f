//! Encrypted value algebra.
//!
//! Every operation here is oblivious: control flow never depends on a plaintext value.
//! Conditionals are expressed arithmetically with [`FheUintT::mask`] and [`FheUintT::select`],
//! and `min`/`max` are derived from them. Backends only supply the primitives.

use std::fmt::Debug;

pub mod plain;
pub mod tensor;

/// Encrypted boolean. Booleans are not ordered, so only logic gates are available.
/// Gates are always fully evaluated (no short-circuit).
pub trait FheBoolT: Clone + Send + Sync + Sized {
    /// Public constant encoded as a ciphertext
    fn trivial(value: bool) -> Self;

    fn and(&self, rhs: &Self) -> Self;

    fn or(&self, rhs: &Self) -> Self;

    fn not(&self) -> Self;
}

/// Encrypted unsigned integer in the ring ℤ/2^N. Arithmetic wraps modulo 2^N, overflow
/// is defined behaviour.
pub trait FheUintT: Clone + Send + Sync + Sized {
    /// Plaintext type of the ring
    type Clear: Copy + Default + Debug + Send + Sync;
    type Bool: FheBoolT;

    /// Public constant encoded as a ciphertext
    fn trivial(value: Self::Clear) -> Self;

    /// Embeds the bit as `0` or `1` in the ring
    fn from_bool(cond: &Self::Bool) -> Self;

    fn add(&self, rhs: &Self) -> Self;

    fn sub(&self, rhs: &Self) -> Self;

    fn mul(&self, rhs: &Self) -> Self;

    fn cmp_lt(&self, rhs: &Self) -> Self::Bool;

    fn cmp_le(&self, rhs: &Self) -> Self::Bool;

    fn cmp_eq(&self, rhs: &Self) -> Self::Bool;

    fn cmp_ne(&self, rhs: &Self) -> Self::Bool;

    fn cmp_gt(&self, rhs: &Self) -> Self::Bool;

    fn cmp_ge(&self, rhs: &Self) -> Self::Bool;

    /// Additive identity
    fn zero() -> Self {
        Self::trivial(Self::Clear::default())
    }

    /// Returns `self` if `cond` is true and zero otherwise.
    fn mask(&self, cond: &Self::Bool) -> Self {
        self.mul(&Self::from_bool(cond))
    }

    /// Oblivious select: `a` if `cond` is true, else `b`. Computed as
    /// `mask(cond, a) + mask(!cond, b)`.
    fn select(cond: &Self::Bool, a: &Self, b: &Self) -> Self {
        a.mask(cond).add(&b.mask(&cond.not()))
    }

    fn min(&self, rhs: &Self) -> Self {
        Self::select(&self.cmp_le(rhs), self, rhs)
    }

    fn max(&self, rhs: &Self) -> Self {
        Self::select(&self.cmp_ge(rhs), self, rhs)
    }
}

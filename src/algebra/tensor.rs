//! Fixed length tensor ciphertext of [`DEFAULT_TENSOR_LEN`] `f32` lanes.
//!
//! Inputs shorter than the capacity are zero padded on the right, so padding lanes are the
//! additive identity and the multiplicative annihilator and never disturb a real-data prefix.
//! Reductions broadcast their result to every lane so that they compose with element-wise
//! operations without a separate scalar ciphertext type.

use crate::{ShapeError, DEFAULT_TENSOR_LEN};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use std::fmt::{Debug, Formatter};

#[derive(Clone)]
pub struct EncTensor(Vec<f32>);

impl EncTensor {
    pub(crate) fn new(values: &[f32]) -> Result<Self, ShapeError> {
        if values.len() > DEFAULT_TENSOR_LEN {
            return Err(ShapeError::TensorTooLong {
                len: values.len(),
                capacity: DEFAULT_TENSOR_LEN,
            });
        }

        let mut lanes = vec![0.0; DEFAULT_TENSOR_LEN];
        lanes[..values.len()].copy_from_slice(values);
        Ok(Self(lanes))
    }

    pub(crate) fn reveal(&self) -> Vec<f32> {
        self.0.clone()
    }

    fn zip_lanes(&self, rhs: &Self, op: impl Fn(f32, f32) -> f32 + Sync) -> Self {
        Self(
            self.0
                .par_iter()
                .zip(rhs.0.par_iter())
                .map(|(a, b)| op(*a, *b))
                .collect(),
        )
    }

    pub fn add(&self, rhs: &Self) -> Self {
        self.zip_lanes(rhs, |a, b| a + b)
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        self.zip_lanes(rhs, |a, b| a - b)
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        self.zip_lanes(rhs, |a, b| a * b)
    }

    /// Sum of all lanes, accumulated in ascending lane order, broadcast to every lane.
    pub fn inner_sum(&self) -> Self {
        let sum = self.0.iter().fold(0.0f32, |acc, lane| acc + lane);
        Self(vec![sum; DEFAULT_TENSOR_LEN])
    }
}

impl Debug for EncTensor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EncTensor([..; {}])", self.0.len())
    }
}

#[cfg(test)]
mod test {
    use crate::keys::{key_gen, Committee};
    use crate::{ShapeError, DEFAULT_TENSOR_LEN};

    #[test]
    fn test_padding() {
        let pk = key_gen();
        let committee = Committee::default();

        let tensor = pk.encrypt_tensor(&[1.0, -2.5, 3.0]).unwrap();
        let lanes = committee.decrypt_tensor(&tensor).unwrap();

        assert_eq!(lanes.len(), DEFAULT_TENSOR_LEN);
        assert_eq!(&lanes[..3], &[1.0, -2.5, 3.0]);
        assert!(lanes[3..].iter().all(|lane| *lane == 0.0));
    }

    #[test]
    fn test_full_length_accepted() {
        let pk = key_gen();

        let values = vec![1.0; DEFAULT_TENSOR_LEN];
        assert!(pk.encrypt_tensor(&values).is_ok());
    }

    #[test]
    fn test_too_long_rejected() {
        let pk = key_gen();

        let values = vec![1.0; DEFAULT_TENSOR_LEN + 1];
        assert_eq!(
            pk.encrypt_tensor(&values).unwrap_err(),
            ShapeError::TensorTooLong {
                len: DEFAULT_TENSOR_LEN + 1,
                capacity: DEFAULT_TENSOR_LEN
            }
        );
    }

    #[test]
    fn test_element_wise() {
        let pk = key_gen();
        let committee = Committee::default();

        let a = pk.encrypt_tensor(&[1.0, 2.0, 3.0]).unwrap();
        let b = pk.encrypt_tensor(&[4.0, 5.0]).unwrap();

        let sum = committee.decrypt_tensor(&a.add(&b)).unwrap();
        assert_eq!(&sum[..4], &[5.0, 7.0, 3.0, 0.0]);

        let diff = committee.decrypt_tensor(&a.sub(&b)).unwrap();
        assert_eq!(&diff[..4], &[-3.0, -3.0, 3.0, 0.0]);

        let prod = committee.decrypt_tensor(&a.mul(&b)).unwrap();
        assert_eq!(&prod[..4], &[4.0, 10.0, 0.0, 0.0]);
    }

    #[test]
    fn test_inner_sum_broadcast() {
        let pk = key_gen();
        let committee = Committee::default();

        let a = pk.encrypt_tensor(&[1.0, 2.0, 3.0, 4.5]).unwrap();
        let lanes = committee.decrypt_tensor(&a.inner_sum()).unwrap();

        assert_eq!(lanes.len(), DEFAULT_TENSOR_LEN);
        assert!(lanes.iter().all(|lane| *lane == 10.5));
    }

    #[test]
    fn test_inner_sum_index_order() {
        let pk = key_gen();
        let committee = Committee::default();

        // 1 is absorbed into 1e8 in f32, summing in reverse yields 1
        let a = pk.encrypt_tensor(&[1.0, 1e8, -1e8]).unwrap();
        let lanes = committee.decrypt_tensor(&a.inner_sum()).unwrap();

        assert!(lanes.iter().all(|lane| *lane == 0.0));
    }

    #[test]
    fn test_operands_unchanged() {
        let pk = key_gen();
        let committee = Committee::default();

        let a = pk.encrypt_tensor(&[1.0, 2.0]).unwrap();
        let b = pk.encrypt_tensor(&[3.0, 4.0]).unwrap();
        let _ = a.mul(&b).inner_sum();

        assert_eq!(&committee.decrypt_tensor(&a).unwrap()[..2], &[1.0, 2.0]);
        assert_eq!(&committee.decrypt_tensor(&b).unwrap()[..2], &[3.0, 4.0]);
    }
}

//! Embedding collaborator used by the similarity circuits. A production deployment plugs a
//! learned model in behind [`EmbedderT`]; [`HashingEmbedder`] is a deterministic stand-in.

use crate::{ShapeError, DEFAULT_TENSOR_LEN};
use fnv::FnvHasher;
use std::hash::Hasher;

pub trait EmbedderT {
    /// Embedding of `text`, at most [`DEFAULT_TENSOR_LEN`] long
    fn embed(&self, text: &str) -> Vec<f32>;
}

/// Signed feature hashing of lower cased alphanumeric tokens into `dim` buckets
#[derive(Debug, Clone, Copy)]
pub struct HashingEmbedder {
    dim: usize,
}

impl HashingEmbedder {
    pub fn new(dim: usize) -> Result<Self, ShapeError> {
        if dim == 0 || dim > DEFAULT_TENSOR_LEN {
            return Err(ShapeError::InvalidDimension {
                dim,
                capacity: DEFAULT_TENSOR_LEN,
            });
        }
        Ok(Self { dim })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}

impl EmbedderT for HashingEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0; self.dim];

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
        {
            let mut hasher = FnvHasher::default();
            hasher.write(token.to_lowercase().as_bytes());
            let hash = hasher.finish();

            let bucket = (hash % self.dim as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            embedding[bucket] += sign;
        }

        embedding
    }
}

/// Scale to unit L2 norm. The zero vector is left as is.
pub fn normalize(values: &mut [f32]) {
    let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        values.iter_mut().for_each(|v| *v /= norm);
    }
}

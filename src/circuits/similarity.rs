use crate::algebra::tensor::EncTensor;
use crate::algebra::FheUintT;
use crate::circuits::check_len;
use crate::embedding::{normalize, EmbedderT};
use crate::keys::{PublicKey, PublicKeyT};
use crate::{util, Result};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

/// Every lane of the result holds `Σ a_i·b_i`. With inputs normalized to unit length this is
/// the cosine similarity.
pub fn dot_product(a: &EncTensor, b: &EncTensor) -> EncTensor {
    a.mul(b).inner_sum()
}

/// Dot product in ℤ/2^N over vectors of scalar ciphertexts, for backends without floating
/// point lanes. Products are summed in index order.
pub fn dot_product_uint<U: FheUintT>(a: &[U], b: &[U]) -> Result<U> {
    check_len("dot product operands", a.len(), b.len())?;

    let products: Vec<U> = a
        .par_iter()
        .zip(b.par_iter())
        .map(|(a_i, b_i)| a_i.mul(b_i))
        .collect();

    Ok(products.iter().fold(U::zero(), |sum, product| sum.add(product)))
}

/// Client side: embed, normalize and encrypt `text` as a tensor
pub fn encrypt_embedding(
    pk: &PublicKey,
    embedder: &impl EmbedderT,
    text: &str,
) -> Result<EncTensor> {
    let mut embedding = embedder.embed(text);
    normalize(&mut embedding);
    Ok(pk.encrypt_tensor(&embedding)?)
}

/// Client side: embed, normalize, quantize with `scale` and encrypt `text` as integers in
/// ℤ/2^32. The decrypted [`dot_product_uint`] of two such vectors is decoded with
/// [`util::dequantize`] using `scale * scale`.
pub fn encrypt_quantized_embedding<PK: PublicKeyT>(
    pk: &PK,
    embedder: &impl EmbedderT,
    text: &str,
    scale: f32,
) -> Result<Vec<PK::U32>> {
    let mut embedding = embedder.embed(text);
    normalize(&mut embedding);
    let quantized = util::quantize(&embedding, scale)?;
    Ok(pk.encrypt_u32_slice(&quantized))
}

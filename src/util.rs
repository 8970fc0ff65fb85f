use crate::{Error, Result};

const MODULUS_U32: u64 = 1 << 32;

/// Rounds `value` and maps it to its unsigned representative modulo `modulus`, negative
/// values becoming `modulus - |value|`.
///
/// Fails if `|round(value)| > modulus / 2`.
pub fn cast_f32_to_modq(value: f32, modulus: u64) -> Result<u64> {
    let rounded = value.round();
    let magnitude = rounded.abs();

    if !magnitude.is_finite() || magnitude > (modulus / 2) as f32 {
        return Err(Error::OutOfRange { value, modulus });
    }

    let magnitude = magnitude as u64;
    if rounded < 0.0 {
        Ok(modulus - magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Maps `value * scale` for each value into ℤ/2^32
pub fn quantize(values: &[f32], scale: f32) -> Result<Vec<u32>> {
    values
        .iter()
        .map(|value| cast_f32_to_modq(value * scale, MODULUS_U32).map(|q| q as u32))
        .collect()
}

/// Interprets `value` as a signed element of ℤ/2^32 and divides by `scale`
pub fn dequantize(value: u32, scale: f32) -> f32 {
    value as i32 as f32 / scale
}

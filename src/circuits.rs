//! Oblivious circuits. All circuits visit every input element regardless of intermediate
//! (encrypted) results and produce outputs whose shape depends only on input shapes.
//! Shape validation happens before any ciphertext operation.

use crate::ShapeError;

/// Private debt netting through common acquaintances
pub mod debt_cancel;
/// Membership of an encrypted location in a list of encrypted guesses
pub mod location;
/// Dot products over encrypted tensors and encrypted integer vectors
pub mod similarity;
#[cfg(test)]
pub(crate) mod test_helper;

pub use debt_cancel::{debt_cancel_circuit, DebtCancellation};
pub use location::location_circuit;
pub use similarity::{dot_product, dot_product_uint};

fn check_len(what: &'static str, left: usize, right: usize) -> Result<(), ShapeError> {
    if left != right {
        return Err(ShapeError::LengthMismatch { what, left, right });
    }
    Ok(())
}

use crate::algebra::{FheBoolT, FheUintT};
use crate::circuits::check_len;
use crate::Result;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::time::Instant;
use tracing::debug;

/// Returns encrypted `true` iff `location` equals one of `guesses`. Locations are byte strings
/// and every guess must have the same length as `location`.
///
/// Every byte of every guess is compared; neither the byte-wise AND nor the OR over guesses
/// short-circuits.
pub fn location_circuit<U: FheUintT>(location: &[U], guesses: &[Vec<U>]) -> Result<U::Bool> {
    for guess in guesses {
        check_len("location / guess", location.len(), guess.len())?;
    }

    let start = Instant::now();

    let guess_matches: Vec<U::Bool> = guesses
        .par_iter()
        .map(|guess| {
            guess.iter().zip(location).fold(
                <U::Bool as FheBoolT>::trivial(true),
                |matches, (guess_byte, location_byte)| {
                    matches.and(&guess_byte.cmp_eq(location_byte))
                },
            )
        })
        .collect();

    let found = guess_matches
        .iter()
        .fold(<U::Bool as FheBoolT>::trivial(false), |found, matches| {
            found.or(matches)
        });

    debug!(
        guesses = guesses.len(),
        "location circuit evaluated in {:?}",
        start.elapsed()
    );

    Ok(found)
}

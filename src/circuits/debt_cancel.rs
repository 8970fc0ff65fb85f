use crate::algebra::FheUintT;
use crate::circuits::check_len;
use crate::Result;
use itertools::iproduct;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::time::Instant;
use tracing::debug;

/// Output of [`debt_cancel_circuit`]. `ids` and `amounts` hold exactly one entry per pair in
/// `a_ids × b_ids`, in `(i, j)` order with `i` outer. Non matching pairs have id and amount zero.
#[derive(Debug, Clone)]
pub struct DebtCancellation<U> {
    pub ids: Vec<U>,
    pub amounts: Vec<U>,
    pub amount_left: U,
}

/// A owes B `a_owes_b`. Cancel as much of it as possible via people that owe A something
/// (`a_ids`, `a_owed_amounts`) and that B owes something (`b_ids`, `b_owed_amounts`).
///
/// For a common acquaintance `c` at most `min(A's claim on c, B's debt to c, amount left)` is
/// transferred, i.e. `c` will owe A that much less and be owed that much less by B.
///
/// The output has fixed shape `|a_ids| × |b_ids|` and all pairs are always evaluated, even once
/// the debt is fully cancelled: filtering or stopping early would leak the number of matches.
pub fn debt_cancel_circuit<U: FheUintT>(
    a_ids: &[U],
    a_owed_amounts: &[U],
    b_ids: &[U],
    b_owed_amounts: &[U],
    a_owes_b: U::Clear,
) -> Result<DebtCancellation<U>> {
    check_len("a_ids / a_owed_amounts", a_ids.len(), a_owed_amounts.len())?;
    check_len("b_ids / b_owed_amounts", b_ids.len(), b_owed_amounts.len())?;

    let start = Instant::now();

    // matching is independent per pair, only the running amount left is sequential
    let pairs: Vec<(usize, usize)> = iproduct!(0..a_ids.len(), 0..b_ids.len()).collect();
    let matched: Vec<(U, U)> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let is_equal = a_ids[i].cmp_eq(&b_ids[j]);
            let candidate = a_owed_amounts[i]
                .min(&b_owed_amounts[j])
                .mask(&is_equal);
            (b_ids[j].mask(&is_equal), candidate)
        })
        .collect();

    let mut amount_left = U::trivial(a_owes_b);
    let mut ids = Vec::with_capacity(matched.len());
    let mut amounts = Vec::with_capacity(matched.len());
    for (id, candidate) in matched {
        let amount = candidate.min(&amount_left);
        amount_left = amount_left.sub(&amount);

        ids.push(id);
        amounts.push(amount);
    }

    debug!(
        pairs = pairs.len(),
        "debt cancel circuit evaluated in {:?}",
        start.elapsed()
    );

    Ok(DebtCancellation {
        ids,
        amounts,
        amount_left,
    })
}

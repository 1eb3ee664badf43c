//! Canonical table of unordered body pairs.
//!
//! Pairs are ordered by the first index ascending, then the second index
//! ascending within it. Every force and potential loop walks this table, so
//! the floating-point summation order is fixed.

use crate::simulation::states::N_BODIES;

/// Number of unordered pairs, C(N_BODIES, 2)
pub const N_PAIRS: usize = N_BODIES * (N_BODIES - 1) / 2;

/// All pairs (i, j) with i < j
pub const PAIRS: [(usize, usize); N_PAIRS] = build_pairs();

const fn build_pairs() -> [(usize, usize); N_PAIRS] {
    let mut out = [(0, 0); N_PAIRS];
    let mut k = 0;
    let mut i = 0;
    while i < N_BODIES {
        let mut j = i + 1;
        while j < N_BODIES {
            out[k] = (i, j);
            k += 1;
            j += 1;
        }
        i += 1;
    }
    out
}

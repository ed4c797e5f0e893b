// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unranking: jumping straight to the `r`-th combination of a size.

use super::binomial;

/// Write the index vector of the `rank`-th (0-based) `k`-combination of
/// `n` items, in lexicographic order, into `out`.
///
/// At each position the candidate index `c` owns `C(n - 1 - c, k - 1 - i)`
/// combinations; the rank is reduced by those blocks until it falls inside
/// one. Candidates only ever increase, so the cost is `O(n)` binomial
/// evaluations regardless of `rank`.
///
/// Returns `false`, leaving `out` unspecified, if `rank >= C(n, k)`.
pub fn unrank(n: u32, k: u32, mut rank: u64, out: &mut Vec<u32>) -> bool {
    out.clear();
    if k > n {
        return false;
    }
    let mut candidate = 0u32;
    for position in 0..k {
        let remaining = k - 1 - position;
        loop {
            // Not enough items left to fill the remaining positions
            if candidate + remaining >= n {
                return false;
            }
            // None: the block is wider than any u64 rank
            let block = binomial(n - 1 - candidate, remaining);
            match block {
                Some(block) if rank >= block => rank -= block,
                _ => break,
            }
            candidate += 1;
        }
        out.push(candidate);
        candidate += 1;
    }
    rank == 0
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting combinations without enumerating them.
//!
//! Binomial coefficients use the recurrence
//! `C(n, k) = C(n, k-1) * (n - k + 1) / k` with `k = min(k, n - k)`, carried
//! in a `u128` so the intermediate product never wraps. Any coefficient that
//! fits in a `u64` has `k <= 64` after the symmetry reduction, and any that
//! does not is detected within 64 steps, so every call is cheap even for
//! very large `n`.

pub mod big;
pub mod rank;

pub use big::{binomial_big, count_big};
pub use rank::unrank;

use crate::config::CmbConfig;
use crate::error::{CmbError, Result};

/// Binomial coefficient `C(n, k)`, or `None` if it exceeds `u64::MAX`.
///
/// `C(n, k) = 0` when `k > n`.
pub fn binomial(n: u32, k: u32) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut c: u128 = 1;
    for i in 0..k {
        c = c * u128::from(n - i) / u128::from(i + 1);
        if c > u128::from(u64::MAX) {
            return None;
        }
    }
    u64::try_from(c).ok()
}

/// Total number of combinations a run over `nitems` items would visit.
///
/// Sums `C(nitems, L)` over the configured size range. Size 0 contributes
/// the single empty combination only when `show_empty` is set, matching the
/// engine, which skips size 0 otherwise. `start` and `count` are ignored.
///
/// # Errors
///
/// - [`CmbError::EmptyItemSet`] if `nitems == 0` and non-empty
///   combinations were requested
/// - [`CmbError::InvalidRange`] if the range is inverted or exceeds `nitems`
/// - [`CmbError::Overflow`] if the total does not fit in a `u64`; see
///   [`count_big`]
pub fn count(config: &CmbConfig, nitems: u32) -> Result<u64> {
    let (size_min, size_max) = resolve_sizes(config, nitems)?;

    let mut total: u64 = u64::from(size_min == 0 && config.show_empty());
    let first = size_min.max(1);
    if first > size_max {
        return Ok(total);
    }

    // Every non-empty subset: 2^n - 1
    if first == 1 && size_max == nitems && nitems < 64 {
        return Ok(total + ((1u64 << nitems) - 1));
    }

    for size in first..=size_max {
        let n = binomial(nitems, size).ok_or(CmbError::Overflow)?;
        total = total.checked_add(n).ok_or(CmbError::Overflow)?;
    }
    Ok(total)
}

/// Resolve the configured size range against `nitems`.
///
/// An empty item set is reported before the range is checked, so counting
/// and enumerating fail the same way.
pub(crate) fn resolve_sizes(config: &CmbConfig, nitems: u32) -> Result<(u32, u32)> {
    let size_min = config.sizes().min();
    if nitems == 0 && size_min > 0 {
        return Err(CmbError::EmptyItemSet { size_min });
    }
    config.sizes().resolve(nitems)
}

/// Number of items as a `u32`, the engine's index width.
pub(crate) fn item_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| CmbError::TooManyItems(len))
}

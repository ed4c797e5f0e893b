// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact counting beyond 64 bits.
//!
//! Same recurrence as [`binomial`](super::binomial), carried in a
//! [`BigUint`]. Each step `C(n, k-1) * (n - k + 1) / k` divides exactly, so
//! no rounding ever enters the total.

use num_bigint::BigUint;
use num_traits::One;

use super::resolve_sizes;
use crate::config::CmbConfig;
use crate::error::Result;

/// Binomial coefficient `C(n, k)` at full precision.
///
/// `C(n, k) = 0` when `k > n`.
pub fn binomial_big(n: u32, k: u32) -> BigUint {
    if k > n {
        return BigUint::default();
    }
    let k = k.min(n - k);
    let mut c = BigUint::one();
    for i in 0..k {
        c = c * (n - i) / (i + 1);
    }
    c
}

/// Total number of combinations a run over `nitems` items would visit, with
/// no upper bound.
///
/// Agrees with [`count`](super::count) wherever that fits in a `u64`.
///
/// # Errors
///
/// The configuration errors of [`count`](super::count); never
/// [`CmbError::Overflow`](crate::CmbError::Overflow).
pub fn count_big(config: &CmbConfig, nitems: u32) -> Result<BigUint> {
    let (size_min, size_max) = resolve_sizes(config, nitems)?;

    let mut total = BigUint::from(u8::from(size_min == 0 && config.show_empty()));
    let first = size_min.max(1);
    if first > size_max {
        return Ok(total);
    }

    // Every non-empty subset: 2^n - 1
    if first == 1 && size_max == nitems {
        return Ok(total + ((BigUint::one() << nitems) - 1u32));
    }

    let mut block = BigUint::one();
    for k in 1..=size_max {
        block = block * (nitems - k + 1) / k;
        if k >= first {
            total += &block;
        }
    }
    Ok(total)
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Inclusive range of combination lengths.

use crate::error::{CmbError, Result};

/// Inclusive range `min..=max` of combination lengths.
///
/// An unset maximum means "up to the number of items", resolved per run by
/// [`SizeRange::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeRange {
    min: u32,
    max: Option<u32>,
}

impl SizeRange {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: u32, max: Option<u32>) -> Result<Self> {
        match max {
            Some(max) if min > max => Err(CmbError::InvalidRange {
                size_min: min,
                size_max: max,
                nitems: None,
            }),
            _ => Ok(Self { min, max }),
        }
    }

    /// Create a range without validation; the builder validates on `build`.
    pub(crate) const fn unchecked(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Exactly `k` items.
    pub const fn exactly(k: u32) -> Self {
        Self {
            min: k,
            max: Some(k),
        }
    }

    pub fn min(self) -> u32 {
        self.min
    }

    pub fn max(self) -> Option<u32> {
        self.max
    }

    /// Resolve against `nitems` items, returning the concrete `(min, max)`.
    ///
    /// Fails with [`CmbError::InvalidRange`] when the range is inverted or
    /// reaches past the item set.
    pub fn resolve(self, nitems: u32) -> Result<(u32, u32)> {
        let max = self.max.unwrap_or(nitems);
        if self.min > max || max > nitems {
            return Err(CmbError::InvalidRange {
                size_min: self.min,
                size_max: max,
                nitems: Some(nitems),
            });
        }
        Ok((self.min, max))
    }
}

/// Every non-empty combination: `1..=nitems`.
impl Default for SizeRange {
    fn default() -> Self {
        Self { min: 1, max: None }
    }
}

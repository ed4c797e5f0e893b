// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Each enumeration run keeps its own counters, returned to the caller in the
//! run's [`Outcome`](crate::engine::Outcome).

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Sink invocations, including one that aborted the run.
    Emitted,
    /// Combinations passed over to reach `start`.
    Skipped,
    /// Combination sizes the run entered, counting size 0 when the empty
    /// combination was emitted.
    SizesVisited,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Iterate over `(name, value)` pairs, for logging.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        use strum::IntoEnumIterator;
        Counters::iter().map(move |c| (c.into(), self.get(c)))
    }
}

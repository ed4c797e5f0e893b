// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combination enumeration engine.
//!
//! The engine walks every combination of the configured sizes, smallest size
//! first and lexicographic by index vector within a size, handing each one to
//! a [`Sink`].
//!
//! # Execution Model
//!
//! 1. Validate the size range against the item set
//! 2. Seek to `start` by unranking (no combinations are generated to skip)
//! 3. Deliver the current combination to the sink
//! 4. If the sink returns non-zero: stop and report [`Outcome::Aborted`]
//! 5. If `count` combinations were delivered: stop
//! 6. Step to the next index vector, or the first vector of the next size
//! 7. Repeat from 3 until the last size is exhausted
//!
//! Sequence numbers count from 1 across all sizes of the full enumeration,
//! so windowing with `start`/`count` never renumbers a combination.
//!
//! # Example
//!
//! ```
//! use cmb::config::CmbConfig;
//! use cmb::engine::enumerate_with_callback;
//!
//! let config = CmbConfig::builder().size(2).show_numbers(true).build().unwrap();
//! let mut seen = Vec::new();
//! let code = enumerate_with_callback(&config, &["a", "b", "c"], |seq, items| {
//!     seen.push(format!("{}:{}", seq.unwrap(), items.concat()));
//!     0
//! })
//! .unwrap();
//!
//! assert_eq!(code, 0);
//! assert_eq!(seen, vec!["1:ab", "2:ac", "3:bc"]);
//! ```

pub mod sink;

pub use sink::{CollectSink, Sink};

use crate::config::CmbConfig;
use crate::count::{self, binomial, unrank};
use crate::error::Result;
use crate::stats::{Counters, Statistics};
use tracing::{debug, trace};

/// Where an [`Enumeration`] currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Positioned on the empty combination.
    Empty,
    /// Positioned on a non-empty combination of `size` items.
    Sized,
    /// No combinations left.
    Done,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every requested combination was delivered.
    Completed { statistics: Statistics },

    /// The sink returned the non-zero `code`; nothing was delivered after it.
    Aborted { code: i32, statistics: Statistics },
}

impl Outcome {
    /// 0 for a completed run, otherwise the sink's abort code.
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Completed { .. } => 0,
            Outcome::Aborted { code, .. } => *code,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Outcome::Aborted { .. })
    }

    pub fn statistics(&self) -> &Statistics {
        match self {
            Outcome::Completed { statistics } | Outcome::Aborted { statistics, .. } => statistics,
        }
    }

    /// Number of sink invocations, including an aborting one.
    pub fn emitted(&self) -> u64 {
        self.statistics().get(Counters::Emitted)
    }
}

/// Run-local enumeration state.
///
/// Positioned on one combination at a time; [`advance`](Enumeration::advance)
/// moves to the next. The state never touches the items themselves, only
/// their indices, so it can be driven without a sink.
#[derive(Debug)]
pub struct Enumeration {
    nitems: u32,
    /// Size of the current combination (the first non-empty size while on
    /// the empty combination).
    size: u32,
    size_max: u32,
    indices: Vec<u32>,
    /// 1-based sequence number of the current combination.
    seq: u64,
    phase: Phase,
    statistics: Statistics,
}

impl Enumeration {
    /// Create the state for `config` over `nitems` items, positioned on the
    /// combination with 0-based ordinal `config.start()`.
    ///
    /// # Errors
    ///
    /// - [`crate::CmbError::EmptyItemSet`] if `nitems == 0` and non-empty
    ///   combinations were requested
    /// - [`crate::CmbError::InvalidRange`] if the size range does not fit `nitems`
    pub fn new(config: &CmbConfig, nitems: u32) -> Result<Self> {
        let (size_min, size_max) = count::resolve_sizes(config, nitems)?;

        let mut run = Self {
            nitems,
            size: size_min.max(1),
            size_max,
            indices: Vec::with_capacity(size_max as usize),
            seq: 0,
            phase: Phase::Done,
            statistics: Statistics::new(),
        };
        run.seek(size_min == 0 && config.show_empty(), config.start());
        Ok(run)
    }

    /// Position on the combination with 0-based ordinal `start`.
    fn seek(&mut self, with_empty: bool, start: u64) {
        let mut remaining = start;
        if with_empty {
            if remaining == 0 {
                self.phase = Phase::Empty;
                self.seq = 1;
                self.statistics.increment_counter(Counters::SizesVisited);
                return;
            }
            remaining -= 1;
        }

        for size in self.size..=self.size_max {
            // None: more combinations than any u64 rank, so start is here
            let in_size = binomial(self.nitems, size);
            if in_size.is_none_or(|n| remaining < n) {
                if !unrank(self.nitems, size, remaining, &mut self.indices) {
                    break;
                }
                self.size = size;
                self.phase = Phase::Sized;
                self.seq = start.saturating_add(1);
                self.statistics.add(Counters::Skipped, start);
                self.statistics.increment_counter(Counters::SizesVisited);
                if start > 0 {
                    debug!(start, size, indices = ?self.indices, "seeked to start");
                }
                return;
            }
            remaining -= in_size.unwrap_or(0);
        }

        debug!(start, "start is past the last combination");
        self.phase = Phase::Done;
        self.statistics.add(Counters::Skipped, start - remaining);
    }

    /// Sequence number of the current combination, or `None` once exhausted.
    pub fn sequence(&self) -> Option<u64> {
        match self.phase {
            Phase::Done => None,
            Phase::Empty | Phase::Sized => Some(self.seq),
        }
    }

    /// Index vector of the current combination, or `None` once exhausted.
    pub fn indices(&self) -> Option<&[u32]> {
        match self.phase {
            Phase::Done => None,
            Phase::Empty => Some(&[]),
            Phase::Sized => Some(&self.indices),
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Move to the next combination. Returns `false` once exhausted.
    pub fn advance(&mut self) -> bool {
        let moved = match self.phase {
            Phase::Done => false,
            Phase::Empty => self.enter_size(self.size),
            Phase::Sized => {
                next_combination(&mut self.indices, self.nitems)
                    || match self.size.checked_add(1) {
                        Some(next) => self.enter_size(next),
                        None => self.finish(),
                    }
            }
        };
        if moved {
            self.seq = self.seq.saturating_add(1);
        }
        moved
    }

    /// Position on `[0, 1, ..., size - 1]`, or finish if `size` is past the
    /// range.
    fn enter_size(&mut self, size: u32) -> bool {
        if size > self.size_max {
            return self.finish();
        }
        self.size = size;
        self.indices.clear();
        self.indices.extend(0..size);
        self.phase = Phase::Sized;
        self.statistics.increment_counter(Counters::SizesVisited);
        true
    }

    fn finish(&mut self) -> bool {
        self.phase = Phase::Done;
        false
    }
}

/// Step `indices`, a strictly increasing vector over `0..n`, to its
/// lexicographic successor.
///
/// Finds the rightmost position `i` with `indices[i] < n - k + i`,
/// increments it, and resets the tail to consecutive values. Returns
/// `false`, leaving `indices` untouched, if it was the last vector.
pub fn next_combination(indices: &mut [u32], n: u32) -> bool {
    let k = indices.len();
    let base = n - k as u32;
    for i in (0..k).rev() {
        if indices[i] < base + i as u32 {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Enumerate combinations of `items` into `sink`.
///
/// See the [module documentation](self) for the order and numbering. Item
/// strings are borrowed, never copied; duplicates are distinct positions.
///
/// # Errors
///
/// Configuration errors only ([`crate::CmbError::EmptyItemSet`],
/// [`crate::CmbError::InvalidRange`], [`crate::CmbError::TooManyItems`]). A sink abort
/// is [`Outcome::Aborted`].
pub fn enumerate<S, K>(config: &CmbConfig, items: &[S], sink: &mut K) -> Result<Outcome>
where
    S: AsRef<str>,
    K: Sink + ?Sized,
{
    let nitems = count::item_count(items.len())?;
    let mut run = Enumeration::new(config, nitems)?;
    let limit = config.count();
    debug!(
        nitems,
        size_min = config.sizes().min(),
        size_max = run.size_max,
        start = config.start(),
        count = limit,
        "enumerating combinations"
    );

    let mut combination: Vec<&str> = Vec::with_capacity(run.size_max as usize);
    let mut emitted = 0u64;
    while let Some(seq) = run.sequence() {
        // run.indices is empty while on the empty combination
        combination.clear();
        combination.extend(run.indices.iter().map(|&i| items[i as usize].as_ref()));
        if config.debug() {
            trace!(seq, ?combination, "visit");
        }

        let code = sink.visit(config.show_numbers().then_some(seq), &combination);
        emitted += 1;
        run.statistics.increment_counter(Counters::Emitted);
        if code != 0 {
            debug!(seq, code, emitted, "sink stopped enumeration");
            return Ok(Outcome::Aborted {
                code,
                statistics: run.statistics,
            });
        }
        if emitted == limit {
            break;
        }
        run.advance();
    }

    debug!(emitted, "enumeration finished");
    Ok(Outcome::Completed {
        statistics: run.statistics,
    })
}

/// Enumerate combinations of `items` into a closure.
///
/// Returns 0 when every requested combination was delivered, otherwise the
/// first non-zero value returned by `callback`.
pub fn enumerate_with_callback<S, F>(config: &CmbConfig, items: &[S], mut callback: F) -> Result<i32>
where
    S: AsRef<str>,
    F: FnMut(Option<u64>, &[&str]) -> i32,
{
    Ok(enumerate(config, items, &mut callback)?.code())
}

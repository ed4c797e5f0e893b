// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sink trait: the consumer invoked once per emitted combination.
//!
//! # Example
//!
//! ```
//! use cmb::engine::Sink;
//!
//! struct FirstN {
//!     left: usize,
//! }
//!
//! impl Sink for FirstN {
//!     fn visit(&mut self, _seq: Option<u64>, combination: &[&str]) -> i32 {
//!         println!("{}", combination.join(" "));
//!         self.left -= 1;
//!         if self.left == 0 { 1 } else { 0 }
//!     }
//! }
//! ```

/// Consumer of combinations.
///
/// Any closure `FnMut(Option<u64>, &[&str]) -> i32` is a sink.
pub trait Sink {
    /// Receive one combination.
    ///
    /// `seq` is the 1-based position of the combination in the full,
    /// unwindowed enumeration, present only when the run's configuration has
    /// `show_numbers` set. `combination` holds the chosen items in index
    /// order.
    ///
    /// Return 0 to continue. Any other value stops the run immediately and
    /// is reported as [`Outcome::Aborted`](super::Outcome::Aborted).
    fn visit(&mut self, seq: Option<u64>, combination: &[&str]) -> i32;
}

impl<F> Sink for F
where
    F: FnMut(Option<u64>, &[&str]) -> i32,
{
    fn visit(&mut self, seq: Option<u64>, combination: &[&str]) -> i32 {
        self(seq, combination)
    }
}

/// A sink that keeps every combination it receives.
#[derive(Debug, Default, Clone)]
pub struct CollectSink {
    combinations: Vec<(Option<u64>, Vec<String>)>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn combinations(&self) -> &[(Option<u64>, Vec<String>)] {
        &self.combinations
    }

    pub fn into_combinations(self) -> Vec<(Option<u64>, Vec<String>)> {
        self.combinations
    }
}

impl Sink for CollectSink {
    fn visit(&mut self, seq: Option<u64>, combination: &[&str]) -> i32 {
        self.combinations.push((
            seq,
            combination.iter().map(|s| (*s).to_owned()).collect(),
        ));
        0
    }
}

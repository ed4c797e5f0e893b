// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combination enumeration engine.
//!
//! Enumerates every combination of an ordered item set for a range of sizes,
//! in a fixed order, optionally starting part way through and stopping after
//! a given number of combinations. Each combination is either written as text
//! or handed to a caller-supplied sink.
//!
//! # Order and Numbering
//!
//! - Sizes ascend from the configured minimum to the maximum
//! - Within a size, index vectors ascend lexicographically:
//!   `ab, ac, ad, bc, bd, cd`
//! - The empty combination, when requested, comes first
//! - Sequence numbers start at 1 and run across all sizes; a window chosen
//!   with `start`/`count` keeps the numbers of the full enumeration
//!
//! # Architecture
//!
//! - [`config`]: validated run parameters ([`CmbConfig`])
//! - [`count`]: binomial coefficients, totals (64-bit and exact) and unranking
//! - [`engine`]: run-local enumeration state and the [`Sink`] trait
//! - [`format`]: text rendering ([`format::TextSink`])
//! - [`partition`]: splitting a run into windows for parallel hosts
//! - [`stats`]: per-run counters
//!
//! # Example
//!
//! ```
//! use cmb::{count, enumerate_to_text, CmbConfig};
//!
//! let items = ["a", "b", "c", "d"];
//! let config = CmbConfig::builder().size(2).start(2).count(2).build().unwrap();
//!
//! assert_eq!(count(&config, items.len() as u32).unwrap(), 6);
//!
//! let mut out = Vec::new();
//! enumerate_to_text(&config, &items, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "a d\nb c\n");
//! ```

pub mod config;
pub mod count;
pub mod engine;
pub mod error;
pub mod format;
pub mod partition;
pub mod stats;

// Re-export commonly used types
pub use config::{CmbConfig, ConfigBuilder, SizeRange};
pub use count::{count, count_big};
pub use engine::{enumerate, enumerate_with_callback, Enumeration, Outcome, Sink};
pub use error::CmbError;
pub use format::enumerate_to_text;

/// Version of this library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

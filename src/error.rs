// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for counting and enumeration.

use thiserror::Error;

/// Errors reported before or during an enumeration run.
///
/// A sink asking the engine to stop is not an error; see
/// [`Outcome::Aborted`](crate::engine::Outcome::Aborted).
#[derive(Error, Debug)]
pub enum CmbError {
    /// The size range is inverted, or asks for more items than exist.
    #[error("invalid size range {size_min}..={size_max}{}", item_context(.nitems))]
    InvalidRange {
        size_min: u32,
        size_max: u32,
        /// Set when the range was checked against an item set.
        nitems: Option<u32>,
    },

    /// Non-empty combinations were requested from an empty item set.
    #[error("cannot choose {size_min} items from an empty item set")]
    EmptyItemSet { size_min: u32 },

    /// The number of combinations does not fit in 64 bits.
    #[error("number of combinations exceeds u64::MAX")]
    Overflow,

    /// More than `u32::MAX` items were supplied.
    #[error("too many items: {0}")]
    TooManyItems(usize),

    /// A configuration could not be built or deserialized.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// The text sink failed to write a combination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CmbError {
    /// True for errors detected before any combination was visited.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CmbError::InvalidRange { .. }
                | CmbError::EmptyItemSet { .. }
                | CmbError::TooManyItems(_)
                | CmbError::InvalidConfig(_)
        )
    }
}

fn item_context(nitems: &Option<u32>) -> String {
    match nitems {
        Some(n) => format!(" for {} items", n),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CmbError>;

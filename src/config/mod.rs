// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! A [`CmbConfig`] is immutable once built. Every way of obtaining one, the
//! [`ConfigBuilder`] or deserialization, goes through the same validation, so
//! an inverted size range can never reach the engine.
//!
//! # Example
//!
//! ```
//! use cmb::config::CmbConfig;
//!
//! let config = CmbConfig::builder()
//!     .size(2)
//!     .start(2)
//!     .count(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.sizes().min(), 2);
//! assert_eq!(config.sizes().max(), Some(2));
//! ```

mod size_range;

pub use size_range::SizeRange;

use crate::count;
use crate::error::{CmbError, Result};
use serde::{Deserialize, Serialize};

/// Default separator placed between the items of a rendered combination.
pub const DEFAULT_DELIMITER: &str = " ";

/// Parameters for one counting or enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct CmbConfig {
    sizes: SizeRange,
    start: u64,
    count: u64,
    show_numbers: bool,
    show_empty: bool,
    nul_terminate: bool,
    delimiter: String,
    prefix: Option<String>,
    suffix: Option<String>,
    debug: bool,
}

impl CmbConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Continue building from this configuration's values.
    pub fn to_builder(&self) -> ConfigBuilder {
        ConfigBuilder {
            config: self.clone(),
        }
    }

    /// Inclusive range of combination lengths.
    pub fn sizes(&self) -> SizeRange {
        self.sizes
    }

    /// 0-based ordinal of the first combination delivered to the sink.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Maximum number of combinations to deliver; 0 means no limit.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn show_numbers(&self) -> bool {
        self.show_numbers
    }

    pub fn show_empty(&self) -> bool {
        self.show_empty
    }

    pub fn nul_terminate(&self) -> bool {
        self.nul_terminate
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Copy of this configuration restricted to the window
    /// `start..start + count`.
    ///
    /// The size range and formatting options are unchanged, so sequence
    /// numbers in the window match those of the unwindowed run.
    pub fn with_window(&self, start: u64, count: u64) -> Self {
        Self {
            start,
            count,
            ..self.clone()
        }
    }

    /// Copy of this configuration positioned on the last `n` combinations
    /// for `nitems` items.
    ///
    /// Asking for more combinations than exist starts from the beginning.
    pub fn start_from_end(&self, nitems: u32, n: u64) -> Result<Self> {
        let total = count::count(self, nitems)?;
        Ok(Self {
            start: total.saturating_sub(n),
            ..self.clone()
        })
    }
}

impl Default for CmbConfig {
    fn default() -> Self {
        Self {
            sizes: SizeRange::default(),
            start: 0,
            count: 0,
            show_numbers: false,
            show_empty: false,
            nul_terminate: false,
            delimiter: String::from(DEFAULT_DELIMITER),
            prefix: None,
            suffix: None,
            debug: false,
        }
    }
}

/// Builder for [`CmbConfig`].
///
/// Size setters may be called in any order; the range is only checked by
/// [`build`](ConfigBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: CmbConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enumerate combinations of exactly `k` items.
    pub fn size(mut self, k: u32) -> Self {
        self.config.sizes = SizeRange::unchecked(k, Some(k));
        self
    }

    /// Enumerate combinations of `min..=max` items.
    pub fn size_range(mut self, min: u32, max: u32) -> Self {
        self.config.sizes = SizeRange::unchecked(min, Some(max));
        self
    }

    /// Enumerate combinations of `min` items up to the whole item set.
    pub fn size_min(mut self, min: u32) -> Self {
        self.config.sizes = SizeRange::unchecked(min, None);
        self
    }

    pub fn start(mut self, start: u64) -> Self {
        self.config.start = start;
        self
    }

    pub fn count(mut self, count: u64) -> Self {
        self.config.count = count;
        self
    }

    pub fn show_numbers(mut self, show: bool) -> Self {
        self.config.show_numbers = show;
        self
    }

    pub fn show_empty(mut self, show: bool) -> Self {
        self.config.show_empty = show;
        self
    }

    pub fn nul_terminate(mut self, nul: bool) -> Self {
        self.config.nul_terminate = nul;
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.suffix = Some(suffix.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Validate and return the configuration.
    ///
    /// Fails with [`CmbError::InvalidRange`] when the minimum size exceeds
    /// the maximum.
    pub fn build(self) -> Result<CmbConfig> {
        let sizes = self.config.sizes;
        SizeRange::new(sizes.min(), sizes.max())?;
        Ok(self.config)
    }
}

/// Serialized form of [`CmbConfig`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    size_min: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_max: Option<u32>,
    start: u64,
    count: u64,
    show_numbers: bool,
    show_empty: bool,
    nul_terminate: bool,
    delimiter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    debug: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        CmbConfig::default().into()
    }
}

impl TryFrom<RawConfig> for CmbConfig {
    type Error = CmbError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let sizes = SizeRange::new(raw.size_min, raw.size_max)
            .map_err(|e| CmbError::InvalidConfig(e.to_string()))?;
        Ok(CmbConfig {
            sizes,
            start: raw.start,
            count: raw.count,
            show_numbers: raw.show_numbers,
            show_empty: raw.show_empty,
            nul_terminate: raw.nul_terminate,
            delimiter: raw.delimiter,
            prefix: raw.prefix,
            suffix: raw.suffix,
            debug: raw.debug,
        })
    }
}

impl From<CmbConfig> for RawConfig {
    fn from(config: CmbConfig) -> Self {
        RawConfig {
            size_min: config.sizes.min(),
            size_max: config.sizes.max(),
            start: config.start,
            count: config.count,
            show_numbers: config.show_numbers,
            show_empty: config.show_empty,
            nul_terminate: config.nul_terminate,
            delimiter: config.delimiter,
            prefix: config.prefix,
            suffix: config.suffix,
            debug: config.debug,
        }
    }
}

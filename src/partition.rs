// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Splitting one run into windows for parallel hosts.
//!
//! The engine itself is single-threaded. A host that wants to use several
//! threads runs one [`Enumeration`](crate::engine::Enumeration) per window:
//! each window is an ordinary [`CmbConfig`] with its own `start`/`count`, and
//! all windows borrow the same read-only item set.
//!
//! ```
//! use cmb::config::CmbConfig;
//! use cmb::engine::enumerate_with_callback;
//! use cmb::partition::partition;
//! use std::thread;
//!
//! let items: Vec<String> = (0..20).map(|n| n.to_string()).collect();
//! let config = CmbConfig::builder().size(3).build().unwrap();
//! let windows = partition(&config, items.len() as u32, 4).unwrap();
//!
//! let total: u64 = thread::scope(|scope| {
//!     let handles: Vec<_> = windows
//!         .iter()
//!         .map(|window| {
//!             let items = &items;
//!             scope.spawn(move || {
//!                 let mut n = 0u64;
//!                 enumerate_with_callback(window, items, |_, _| {
//!                     n += 1;
//!                     0
//!                 })
//!                 .unwrap();
//!                 n
//!             })
//!         })
//!         .collect();
//!     handles.into_iter().map(|h| h.join().unwrap()).sum()
//! });
//! assert_eq!(total, 1140);
//! ```

use crate::config::CmbConfig;
use crate::count::count;
use crate::error::{CmbError, Result};
use tracing::debug;

/// Split the run described by `config` over `nitems` items into at most
/// `parts` contiguous, non-overlapping windows.
///
/// The windows respect the configuration's own `start`/`count` and, run in
/// order, deliver exactly the combinations of the original run with the same
/// sequence numbers. Window sizes differ by at most one. Fewer windows are
/// returned when there are fewer combinations than parts; none when there are
/// none.
///
/// # Errors
///
/// - [`CmbError::InvalidConfig`] if `parts == 0`
/// - any error of [`count`]
pub fn partition(config: &CmbConfig, nitems: u32, parts: usize) -> Result<Vec<CmbConfig>> {
    if parts == 0 {
        return Err(CmbError::InvalidConfig(String::from(
            "cannot partition into zero windows",
        )));
    }
    let total = count(config, nitems)?;
    let start = config.start().min(total);
    let mut remaining = total - start;
    if config.count() != 0 {
        remaining = remaining.min(config.count());
    }

    let parts = parts as u64;
    let base = remaining / parts;
    let extra = remaining % parts;
    let mut windows = Vec::new();
    let mut cursor = start;
    for part in 0..parts {
        let len = base + u64::from(part < extra);
        if len == 0 {
            break;
        }
        windows.push(config.with_window(cursor, len));
        cursor += len;
    }
    debug!(total, start, remaining, windows = windows.len(), "partitioned run");
    Ok(windows)
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text output of combinations.
//!
//! Each combination is written as
//!
//! ```text
//! [<seq> ]<prefix><item><delimiter><item>...<suffix><terminator>
//! ```
//!
//! where the sequence number appears only with `show_numbers`, and the
//! terminator is a newline, or NUL with `nul_terminate` (for `xargs -0`).

use crate::config::CmbConfig;
use crate::engine::{enumerate, Sink};
use crate::error::Result;
use std::io::{self, BufWriter, Write};
use tracing::warn;

/// Code a [`TextSink`] returns to stop the run after a failed write.
pub const WRITE_FAILED: i32 = -1;

/// Sink that renders combinations as text.
///
/// Output is buffered. A write error is kept, the run is stopped with
/// [`WRITE_FAILED`], and the error is returned by [`TextSink::finish`].
pub struct TextSink<'a, W: Write> {
    out: BufWriter<W>,
    delimiter: &'a str,
    prefix: Option<&'a str>,
    suffix: Option<&'a str>,
    terminator: u8,
    error: Option<io::Error>,
}

impl<'a, W: Write> TextSink<'a, W> {
    /// Create a sink using the formatting options of `config`.
    pub fn new(config: &'a CmbConfig, writer: W) -> Self {
        Self {
            out: BufWriter::new(writer),
            delimiter: config.delimiter(),
            prefix: config.prefix(),
            suffix: config.suffix(),
            terminator: if config.nul_terminate() { b'\0' } else { b'\n' },
            error: None,
        }
    }

    fn write_combination(&mut self, seq: Option<u64>, combination: &[&str]) -> io::Result<()> {
        if let Some(seq) = seq {
            write!(self.out, "{} ", seq)?;
        }
        if let Some(prefix) = self.prefix {
            self.out.write_all(prefix.as_bytes())?;
        }
        for (n, item) in combination.iter().enumerate() {
            if n > 0 {
                self.out.write_all(self.delimiter.as_bytes())?;
            }
            self.out.write_all(item.as_bytes())?;
        }
        if let Some(suffix) = self.suffix {
            self.out.write_all(suffix.as_bytes())?;
        }
        self.out.write_all(&[self.terminator])
    }

    /// Flush buffered output, returning the first write error if any.
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()
    }
}

impl<W: Write> Sink for TextSink<'_, W> {
    fn visit(&mut self, seq: Option<u64>, combination: &[&str]) -> i32 {
        match self.write_combination(seq, combination) {
            Ok(()) => 0,
            Err(error) => {
                warn!(%error, "failed to write combination");
                self.error = Some(error);
                WRITE_FAILED
            }
        }
    }
}

/// Enumerate combinations of `items` as text into `writer`.
///
/// Returns 0 on completion. A failed write is returned as
/// [`CmbError::Io`](crate::error::CmbError::Io).
pub fn enumerate_to_text<S, W>(config: &CmbConfig, items: &[S], writer: W) -> Result<i32>
where
    S: AsRef<str>,
    W: Write,
{
    let mut sink = TextSink::new(config, writer);
    let outcome = enumerate(config, items, &mut sink)?;
    sink.finish()?;
    Ok(outcome.code())
}

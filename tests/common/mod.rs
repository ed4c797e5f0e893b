// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use cmb::{enumerate, CmbConfig, Outcome, Sink};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test harness (`RUST_LOG=cmb=trace` to see them).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Items `"0"`, `"1"`, ... `"n-1"`.
pub fn numbered_items(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

/// A sink recording each combination as `(seq, items joined without a separator)`.
#[derive(Debug, Default)]
pub struct Joined(pub Vec<(Option<u64>, String)>);

impl Sink for Joined {
    fn visit(&mut self, seq: Option<u64>, combination: &[&str]) -> i32 {
        self.0.push((seq, combination.concat()));
        0
    }
}

/// Run `config` over `items`, returning the joined combinations and outcome.
pub fn run<S: AsRef<str>>(config: &CmbConfig, items: &[S]) -> (Vec<(Option<u64>, String)>, Outcome) {
    init_tracing();
    let mut sink = Joined::default();
    let outcome = enumerate(config, items, &mut sink).expect("valid configuration");
    (sink.0, outcome)
}

/// Just the joined combinations of a run.
pub fn combos<S: AsRef<str>>(config: &CmbConfig, items: &[S]) -> Vec<String> {
    run(config, items).0.into_iter().map(|(_, c)| c).collect()
}

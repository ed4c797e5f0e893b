// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the enumeration engine.
//!
//! These tests validate that the engine:
//! - Visits sizes in ascending order, lexicographic within a size
//! - Numbers combinations globally, independent of windowing
//! - Honors start/count windows, including across size boundaries
//! - Stops on the first non-zero sink return
//! - Agrees with `count` on the number of combinations

mod common;

use cmb::count::binomial;
use cmb::engine::{enumerate_with_callback, CollectSink};
use cmb::stats::Counters;
use cmb::{count, enumerate, CmbConfig, CmbError, Outcome};
use common::{combos, numbered_items, run};
use pretty_assertions::assert_eq;

const ABCD: [&str; 4] = ["a", "b", "c", "d"];

#[test]
fn test_choose_two_of_four_order_and_numbers() {
    let config = CmbConfig::builder()
        .size(2)
        .show_numbers(true)
        .build()
        .unwrap();
    let (seen, outcome) = run(&config, &ABCD);
    let expected: Vec<(Option<u64>, String)> = ["ab", "ac", "ad", "bc", "bd", "cd"]
        .iter()
        .enumerate()
        .map(|(i, c)| (Some(i as u64 + 1), c.to_string()))
        .collect();
    assert_eq!(seen, expected);
    assert_eq!(outcome.code(), 0);
    assert_eq!(count(&config, 4).unwrap(), 6);
}

#[test]
fn test_window_keeps_sequence_numbers() {
    let config = CmbConfig::builder()
        .size(2)
        .start(2)
        .count(2)
        .show_numbers(true)
        .build()
        .unwrap();
    let (seen, _) = run(&config, &ABCD);
    assert_eq!(
        seen,
        vec![(Some(3), String::from("ad")), (Some(4), String::from("bc"))]
    );
}

#[test]
fn test_numbers_hidden_without_show_numbers() {
    let config = CmbConfig::builder().size(1).build().unwrap();
    let (seen, _) = run(&config, &ABCD);
    assert!(seen.iter().all(|(seq, _)| seq.is_none()));
}

#[test]
fn test_window_across_size_boundary() {
    let config = CmbConfig::builder()
        .size_range(1, 2)
        .start(3)
        .count(3)
        .show_numbers(true)
        .build()
        .unwrap();
    let (seen, outcome) = run(&config, &ABCD);
    assert_eq!(
        seen,
        vec![
            (Some(4), String::from("d")),
            (Some(5), String::from("ab")),
            (Some(6), String::from("ac")),
        ]
    );
    assert_eq!(outcome.statistics().get(Counters::SizesVisited), 2);
    assert_eq!(outcome.statistics().get(Counters::Skipped), 3);
}

#[test]
fn test_empty_combination_comes_first() {
    let config = CmbConfig::builder()
        .size_min(0)
        .show_empty(true)
        .show_numbers(true)
        .build()
        .unwrap();
    let (seen, _) = run(&config, &["x", "y"]);
    assert_eq!(
        seen,
        vec![
            (Some(1), String::new()),
            (Some(2), String::from("x")),
            (Some(3), String::from("y")),
            (Some(4), String::from("xy")),
        ]
    );
}

#[test]
fn test_invocations_equal_count_minus_start() {
    let items = numbered_items(7);
    for (min, max) in [(0, 0), (0, 3), (1, 7), (2, 2), (3, 5), (7, 7)] {
        for show_empty in [false, true] {
            let base = CmbConfig::builder()
                .size_range(min, max)
                .show_empty(show_empty)
                .build()
                .unwrap();
            let total = count(&base, 7).unwrap();
            for start in [0, 1, total / 2, total, total + 5] {
                let config = base.to_builder().start(start).build().unwrap();
                let (seen, outcome) = run(&config, &items);
                let expected = total.saturating_sub(start);
                assert_eq!(seen.len() as u64, expected, "{min}..={max} start={start}");
                assert_eq!(outcome.emitted(), expected);
            }
        }
    }
}

#[test]
fn test_every_window_is_a_slice_of_the_full_run() {
    let items = numbered_items(6);
    let base = CmbConfig::builder().size_range(2, 4).build().unwrap();
    let full = combos(&base, &items);
    let total = full.len() as u64;
    for start in 0..=total {
        for len in [1, 2, 7] {
            let config = base.to_builder().start(start).count(len).build().unwrap();
            let from = start as usize;
            let to = (start + len).min(total) as usize;
            assert_eq!(combos(&config, &items), full[from..to].to_vec());
        }
    }
}

#[test]
fn test_combinations_are_strictly_increasing() {
    let items = numbered_items(9);
    let config = CmbConfig::builder().size(4).build().unwrap();
    let mut previous: Option<Vec<usize>> = None;
    let mut n = 0u64;
    enumerate_with_callback(&config, &items, |_, combination| {
        let indices: Vec<usize> = combination
            .iter()
            .map(|s| s.parse::<usize>().unwrap())
            .collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        if let Some(previous) = &previous {
            assert!(previous < &indices);
        }
        previous = Some(indices);
        n += 1;
        0
    })
    .unwrap();
    assert_eq!(n, binomial(9, 4).unwrap());
}

#[test]
fn test_rerun_is_identical() {
    let config = CmbConfig::builder()
        .size_range(1, 3)
        .start(5)
        .show_numbers(true)
        .build()
        .unwrap();
    let items = numbered_items(6);
    let (first, _) = run(&config, &items);
    let (second, _) = run(&config, &items);
    assert_eq!(first, second);
}

#[test]
fn test_non_zero_return_stops_after_k_calls() {
    for k in 1..=6u64 {
        let config = CmbConfig::builder().size(2).build().unwrap();
        let mut calls = 0u64;
        let code = enumerate_with_callback(&config, &ABCD, |_, _| {
            calls += 1;
            if calls == k {
                7
            } else {
                0
            }
        })
        .unwrap();
        assert_eq!(calls, k);
        assert_eq!(code, 7);
    }
}

#[test]
fn test_callback_returning_its_call_index() {
    // The first call returns 0, the second returns 1 and stops the run
    let config = CmbConfig::default();
    let mut total = 0;
    let code = enumerate_with_callback(&config, &["a", "b", "c"], |_, _| {
        total += 1;
        total - 1
    })
    .unwrap();
    assert_eq!(total, 2);
    assert_eq!(code, 1);
    assert_eq!(count(&config, 3).unwrap(), 7);
}

#[test]
fn test_abort_outcome_carries_statistics() {
    let config = CmbConfig::builder().size(1).build().unwrap();
    let mut sink = |_seq: Option<u64>, items: &[&str]| if items[0] == "c" { -3 } else { 0 };
    let outcome = enumerate(&config, &ABCD, &mut sink).unwrap();
    match outcome {
        Outcome::Aborted { code, ref statistics } => {
            assert_eq!(code, -3);
            assert_eq!(statistics.get(Counters::Emitted), 3);
        }
        Outcome::Completed { .. } => panic!("expected abort"),
    }
}

#[test]
fn test_duplicate_items_are_distinct_positions() {
    let config = CmbConfig::builder().size(2).build().unwrap();
    assert_eq!(combos(&config, &["a", "a", "b"]), vec!["aa", "ab", "ab"]);
}

#[test]
fn test_configuration_errors() {
    let mut sink = CollectSink::new();

    let config = CmbConfig::builder().size(5).build().unwrap();
    let err = enumerate(&config, &ABCD, &mut sink).unwrap_err();
    assert!(matches!(err, CmbError::InvalidRange { nitems: Some(4), .. }));

    let empty: [&str; 0] = [];
    let config = CmbConfig::builder().size(1).build().unwrap();
    let err = enumerate(&config, &empty, &mut sink).unwrap_err();
    assert!(matches!(err, CmbError::EmptyItemSet { size_min: 1 }));
    assert!(err.is_config_error());

    assert!(sink.combinations().is_empty());
}

#[test]
fn test_large_item_set_skip_ahead() {
    let items = numbered_items(10_000);
    let config = CmbConfig::builder()
        .size(2)
        .start(49_994_997)
        .show_numbers(true)
        .build()
        .unwrap();
    assert_eq!(count(&config, 10_000).unwrap(), 49_995_000);
    let mut sink = CollectSink::new();
    enumerate(&config, &items, &mut sink).unwrap();
    let seen: Vec<(Option<u64>, String)> = sink
        .into_combinations()
        .into_iter()
        .map(|(seq, c)| (seq, c.join(" ")))
        .collect();
    assert_eq!(
        seen,
        vec![
            (Some(49_994_998), String::from("9997 9998")),
            (Some(49_994_999), String::from("9997 9999")),
            (Some(49_995_000), String::from("9998 9999")),
        ]
    );
}

#[test]
fn test_choose_two_of_two_thousand_exhaustively() {
    let items = numbered_items(2_000);
    let config = CmbConfig::builder().size(2).build().unwrap();
    let mut n = 0u64;
    let code = enumerate_with_callback(&config, &items, |_, _| {
        n += 1;
        0
    })
    .unwrap();
    assert_eq!(code, 0);
    assert_eq!(n, count(&config, 2_000).unwrap());
    assert_eq!(n, 1_999_000);
}

// Host-side tests for frame-time statistics.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod stats {
    include!("../src/stats.rs");
}

use stats::FrameStats;
use std::time::Duration;

#[test]
fn reports_once_per_window() {
    let mut stats = FrameStats::new(4);
    let frame = Duration::from_millis(16);
    assert_eq!(stats.record(frame), None);
    assert_eq!(stats.record(frame), None);
    assert_eq!(stats.record(frame), None);
    let avg = stats.record(frame).expect("window full");
    assert!((avg - 16.0).abs() < 1e-9);
    // next window starts fresh
    assert_eq!(stats.record(frame), None);
}

#[test]
fn average_spans_uneven_frames() {
    let mut stats = FrameStats::new(2);
    assert_eq!(stats.record(Duration::from_millis(10)), None);
    let avg = stats.record(Duration::from_millis(30)).unwrap();
    assert!((avg - 20.0).abs() < 1e-9);
}

#[test]
fn zero_interval_reports_every_frame() {
    let mut stats = FrameStats::new(0);
    assert!(stats.record(Duration::from_millis(5)).is_some());
    assert!(stats.record(Duration::from_millis(5)).is_some());
}

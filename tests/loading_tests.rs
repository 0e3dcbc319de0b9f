//! Tests for the loading counter semantics.

use std::sync::atomic::Ordering;

use relay::loading::spinner;

mod common;
use common::helpers::*;

#[test]
fn test_on_start_fires_once_per_contiguous_run() {
    let (starts, stops, counter) = counting_counter();

    // One maximal run of three overlapping requests.
    counter.start();
    counter.start();
    counter.start();
    counter.stop();
    counter.stop();
    counter.stop();

    assert_eq!(starts.load(Ordering::SeqCst), 1);
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_intermediate_transitions_fire_neither_callback() {
    let (starts, stops, counter) = counting_counter();

    counter.start();
    assert_eq!(starts.load(Ordering::SeqCst), 1);

    // Increments and decrements while count > 0.
    counter.start();
    counter.stop();
    counter.start();
    counter.stop();

    assert_eq!(starts.load(Ordering::SeqCst), 1);
    assert_eq!(stops.load(Ordering::SeqCst), 0);

    counter.stop();
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_each_run_fires_its_own_pair() {
    let (starts, stops, counter) = counting_counter();

    for _ in 0..4 {
        counter.start();
        counter.start();
        counter.stop();
        counter.stop();
    }

    assert_eq!(starts.load(Ordering::SeqCst), 4);
    assert_eq!(stops.load(Ordering::SeqCst), 4);
}

#[test]
fn test_surplus_stops_never_go_negative_or_refire() {
    let (starts, stops, counter) = counting_counter();

    counter.stop();
    counter.stop();
    assert_eq!(counter.count(), 0);
    assert_eq!(stops.load(Ordering::SeqCst), 0);

    counter.start();
    counter.stop();
    counter.stop();
    counter.stop();

    assert_eq!(counter.count(), 0);
    assert_eq!(starts.load(Ordering::SeqCst), 1);
    assert_eq!(stops.load(Ordering::SeqCst), 1);

    // A new run still works after the surplus stops.
    counter.start();
    assert_eq!(starts.load(Ordering::SeqCst), 2);
    counter.stop();
    assert_eq!(stops.load(Ordering::SeqCst), 2);
}

#[test]
fn test_count_tracks_outstanding_requests() {
    let (_, _, counter) = counting_counter();

    assert_eq!(counter.count(), 0);
    counter.start();
    counter.start();
    assert_eq!(counter.count(), 2);
    counter.stop();
    assert_eq!(counter.count(), 1);
    counter.stop();
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_spinner_counter_transitions() {
    // Smoke test: the indicatif-backed counter keeps the same invariants.
    let counter = spinner("requesting...");
    counter.start();
    counter.start();
    counter.stop();
    counter.stop();
    counter.stop();
    assert_eq!(counter.count(), 0);
}

//! Shared test helpers for matcher tests.

#![allow(dead_code)]

use argmatch_matcher::{Matcher, MismatchHandler, Sequence, SourceLocation};
use std::sync::{Arc, Mutex};

/// Installs a test-friendly tracing subscriber once per test binary.
/// Filter with `RUST_LOG=argmatch_matcher=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A two-field value with no `PartialEq`, comparable only by registration.
#[derive(Debug, Clone)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

argmatch_matcher::opaque_argument!(Point);

/// A caller-defined multiset: iterates in insertion order, but position
/// carries no meaning. Relies on the default unordered category.
#[derive(Debug, Clone)]
pub struct Bag<T>(pub Vec<T>);

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Bag(Vec::new())
    }
}

impl<T: argmatch_matcher::Argument> argmatch_matcher::Argument for Bag<T> {
    fn synthesize(matcher: &Matcher) -> Option<argmatch_matcher::Comparator<Self>> {
        matcher.synthesize_sequence::<Self>()
    }
}

impl<T: argmatch_matcher::Argument> Sequence for Bag<T> {
    type Element = T;

    fn elements(&self) -> Vec<&T> {
        self.0.iter().collect()
    }
}

/// Collected `(message, location)` pairs from a recording handler.
pub type Reports = Arc<Mutex<Vec<(String, SourceLocation)>>>;

/// Returns a handler that records every report, plus the shared record.
pub fn recording_handler() -> (MismatchHandler, Reports) {
    let reports: Reports = Arc::default();
    let sink = Arc::clone(&reports);
    let handler: MismatchHandler = Arc::new(move |message: &str, location: &SourceLocation| {
        sink.lock().unwrap().push((message.to_string(), location.clone()));
    });
    (handler, reports)
}

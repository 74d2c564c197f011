//! # Sinks
//!
//! A [`Sink`] accepts each formatted entry a strategy produces. Its only
//! purpose is to keep the computed value observable: without a consumer the
//! optimizer is free to delete the formatting work being timed. Sinks
//! perform no transformation of their own.

use std::hint::black_box;

/// Consumer of formatted entries.
pub trait Sink {
    /// Accept one formatted entry.
    fn accept(&mut self, entry: String);
}

/// Sink that routes every entry through [`black_box`] and drops it.
///
/// This is the sink used in timed code; it is the closest stable-Rust
/// equivalent of a benchmark blackhole.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlackholeSink;

impl Sink for BlackholeSink {
    fn accept(&mut self, entry: String) {
        black_box(entry);
    }
}

/// Sink that retains entries in arrival order, for equivalence checks.
#[derive(Debug, Default)]
pub struct CaptureSink {
    entries: Vec<String>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries accepted so far, in order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consume the sink, yielding the captured entries.
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl Sink for CaptureSink {
    fn accept(&mut self, entry: String) {
        self.entries.push(entry);
    }
}

/// Sink that counts entries without retaining them.
#[derive(Debug, Default)]
pub struct CountingSink {
    count: u64,
}

impl CountingSink {
    /// Create a sink with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries accepted.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Sink for CountingSink {
    fn accept(&mut self, entry: String) {
        black_box(entry);
        self.count += 1;
    }
}

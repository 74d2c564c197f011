//! # Formatting Strategies
//!
//! Four interchangeable ways of walking a name list and delivering
//! `"index: name"` entries to a [`Sink`]. All four produce the identical
//! ordered sequence for the same input; only their algorithmic structure
//! differs, which is the whole point of the comparison.

use crate::sink::Sink;

/// Two-phase streaming: eagerly build the full list of formatted entries,
/// then drain it into the sink.
pub fn collect_then_drain<S: Sink>(names: &[String], sink: &mut S) {
    let entries: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(index, name)| format!("{index}: {name}"))
        .collect();

    for entry in entries {
        sink.accept(entry);
    }
}

/// Single-phase streaming: one fused traversal, no intermediate collection.
pub fn fused_stream<S: Sink>(names: &[String], sink: &mut S) {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| format!("{index}: {name}"))
        .for_each(|entry| sink.accept(entry));
}

/// Element iteration with an explicit running counter.
pub fn tracked_counter<S: Sink>(names: &[String], sink: &mut S) {
    let mut index = 0usize;
    for name in names {
        sink.accept(format!("{index}: {name}"));
        index += 1;
    }
}

/// Counted loop over integer indices with direct indexed access.
pub fn indexed_loop<S: Sink>(names: &[String], sink: &mut S) {
    for index in 0..names.len() {
        sink.accept(format!("{index}: {}", names[index]));
    }
}

/// Strategy selector, for uniform sweeps by the runner and benches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// [`collect_then_drain`]
    TwoPhase,
    /// [`fused_stream`]
    SinglePhase,
    /// [`tracked_counter`]
    IndexTracked,
    /// [`indexed_loop`]
    CountedIndex,
}

impl Strategy {
    /// All strategies, in sweep order.
    pub const ALL: [Strategy; 4] = [
        Strategy::TwoPhase,
        Strategy::SinglePhase,
        Strategy::IndexTracked,
        Strategy::CountedIndex,
    ];

    /// Stable identifier used in bench IDs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::TwoPhase => "collect_then_drain",
            Strategy::SinglePhase => "fused_stream",
            Strategy::IndexTracked => "tracked_counter",
            Strategy::CountedIndex => "indexed_loop",
        }
    }

    /// Run this strategy over `names`, delivering entries to `sink`.
    pub fn run<S: Sink>(&self, names: &[String], sink: &mut S) {
        match self {
            Strategy::TwoPhase => collect_then_drain(names, sink),
            Strategy::SinglePhase => fused_stream(names, sink),
            Strategy::IndexTracked => tracked_counter(names, sink),
            Strategy::CountedIndex => indexed_loop(names, sink),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

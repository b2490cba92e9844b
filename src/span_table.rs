// Redact Engine - Span Table
// Append/dedup/sort/overlap-resolution over finder-produced spans.
//
// Split into two named, independently testable phases (`prune_overlaps`,
// `finalize`) rather than one inlined sweep, since dedup on exact
// `(start, end)` coincidence has to happen before the overlap sweep runs,
// not during it.

use std::collections::HashSet;

use crate::model::Span;

/// A mutable ordered collection of candidate spans, built up by successive
/// finder passes and then pruned to a non-overlapping, sorted sequence.
#[derive(Debug, Default)]
pub struct SpanTable {
    text_len: usize,
    spans: Vec<Span>,
    seen_positions: HashSet<(usize, usize)>,
}

impl SpanTable {
    pub fn new(text_len: usize) -> Self {
        SpanTable {
            text_len,
            spans: Vec::new(),
            seen_positions: HashSet::new(),
        }
    }

    /// Insert a candidate span. Silently drops spans with empty text,
    /// out-of-range or inverted positions, or an already-seen `(start, end)`
    /// pair — finders are expected to be sloppy at the margins, the table
    /// is the single place that enforces these invariants.
    pub fn add(&mut self, span: Span) {
        if span.text.is_empty() || span.start >= span.end || span.end > self.text_len {
            return;
        }
        if !self.seen_positions.insert((span.start, span.end)) {
            return;
        }
        self.spans.push(span);
    }

    /// Resolve overlaps: sort by `start` ascending, `end` descending as a
    /// tiebreak, then keep the first span and drop any later span whose
    /// range intersects the last kept span's range. Because finders run in
    /// a fixed priority order and insert before this sweep runs, this makes
    /// "first-finder-wins, longest-span-on-tie" explicit.
    pub fn prune_overlaps(&mut self) {
        self.spans.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| b.end.cmp(&a.end))
                .then_with(|| a.confidence.cmp(&b.confidence).reverse())
        });

        let mut kept: Vec<Span> = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            let overlaps = kept
                .last()
                .map(|last: &Span| span.start < last.end)
                .unwrap_or(false);
            if !overlaps {
                kept.push(span);
            }
        }
        self.spans = kept;
    }

    /// Sort the remaining spans ascending by `start`. After `prune_overlaps`
    /// this is a no-op reorder safety net (the sweep already produces
    /// start-ascending output), but kept as an explicit, separately testable
    /// step so it stays separately testable.
    pub fn finalize(mut self) -> Vec<Span> {
        self.spans.sort_by_key(|s| s.start);
        self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

// Redact Engine - Recognizer
// Orchestrates every finder in a fixed priority order, resolves overlaps
// through a `SpanTable`, and finalizes candidate spans into caller-facing
// `Detection`s: identity, placeholder, display context, and the
// truncation cap.

use tracing::{debug, warn};

use crate::config::RecognizerConfig;
use crate::custom_names::CustomNameRegistry;
use crate::finders;
use crate::model::{Detection, EntityKind, Span};
use crate::span_table::SpanTable;

/// Detections beyond this count are dropped from the tail of the run, not
/// silently lost - `extract_entities` reports how many were cut via
/// `ExtractionResult::truncated`.
pub const MAX_DETECTIONS: usize = 1000;

/// Bytes of surrounding text captured on each side of a detection for
/// display, snapped inward to the nearest UTF-8 codepoint boundary.
const CONTEXT_RADIUS: usize = 30;

/// A reusable, independently configurable detector. Each instance owns its
/// own custom-name registry; separate `Recognizer`s never share state.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    config: RecognizerConfig,
    custom_names: CustomNameRegistry,
}

/// The outcome of a single `extract_entities` run.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub detections: Vec<Detection>,
    pub truncated: bool,
}

impl Recognizer {
    pub fn new() -> Self {
        Recognizer::default()
    }

    pub fn with_config(config: RecognizerConfig) -> Self {
        Recognizer {
            config,
            custom_names: CustomNameRegistry::new(),
        }
    }

    /// Replace the set of caller-supplied exact-match names.
    pub fn set_custom_names(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        self.custom_names.set(names);
    }

    /// Run every finder in the fixed order
    /// `custom_names -> full_names -> financial -> credit_card -> iban ->
    /// ip -> phone -> email -> url -> domain -> saudi_id -> ssn`,
    /// resolve overlaps, and finalize into `Detection`s.
    pub fn extract_entities(&self, text: &str) -> ExtractionResult {
        let mut table = SpanTable::new(text.len());

        let passes: Vec<Vec<Span>> = vec![
            finders::find_custom_names(text, &self.custom_names),
            finders::find_full_names(text, &self.config),
            finders::find_financial_amounts(text),
            finders::find_credit_cards(text),
            finders::find_ibans(text),
            finders::find_ips(text),
            finders::find_phones(text),
            finders::find_emails(text),
            finders::find_urls(text),
            finders::find_domains(text, &self.config),
            finders::find_saudi_ids(text),
            finders::find_ssns(text),
        ];

        for pass in passes {
            for span in pass {
                table.add(span);
            }
        }

        table.prune_overlaps();
        let spans = table.finalize();

        debug!(candidate_count = spans.len(), "recognition pass complete");

        let truncated = spans.len() > MAX_DETECTIONS;
        if truncated {
            warn!(
                total = spans.len(),
                cap = MAX_DETECTIONS,
                "detection count exceeds cap, truncating"
            );
        }

        let detections = spans
            .into_iter()
            .take(MAX_DETECTIONS)
            .enumerate()
            .map(|(index, span)| self.finalize_span(text, index, span))
            .collect();

        ExtractionResult {
            detections,
            truncated,
        }
    }

    fn finalize_span(&self, text: &str, index: usize, span: Span) -> Detection {
        // Ordinal is 1-based: the first detection overall is always `_1`,
        // regardless of its kind.
        let ordinal = index + 1;
        let placeholder = format!("[{}_{}]", span.kind.placeholder_prefix(), ordinal);
        let context = build_context(text, span.start, span.end);

        Detection {
            id: format!("det-{}-{}", ordinal, span.start),
            start: span.start,
            end: span.end,
            kind: span.kind,
            text: span.text,
            confidence: span.confidence,
            placeholder,
            approved: true,
            context,
        }
    }
}

/// Capture a window of `CONTEXT_RADIUS` bytes on each side of `[start, end)`,
/// snapped inward to the nearest codepoint boundary so the slice never
/// panics on a multi-byte character straddling the cut.
fn build_context(text: &str, start: usize, end: usize) -> String {
    let mut left = start.saturating_sub(CONTEXT_RADIUS);
    while left < start && !text.is_char_boundary(left) {
        left += 1;
    }

    let mut right = (end + CONTEXT_RADIUS).min(text.len());
    while right > end && !text.is_char_boundary(right) {
        right -= 1;
    }

    text[left..right].to_string()
}

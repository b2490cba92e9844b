// Redact Engine - Core Data Model
// Entity kinds, categories, spans, and finalized detections shared by every
// finder, the span table, the recognizer and the masking rewriter.

use serde::{Deserialize, Serialize};

/// The closed set of entity kinds a finder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Email,
    Phone,
    CreditCard,
    Iban,
    Ip,
    Url,
    Domain,
    SaudiId,
    Financial,
    Ssn,
    Custom,
}

impl EntityKind {
    /// Placeholder prefix used by the allocator, e.g. `PERSON`, `CARD`.
    pub fn placeholder_prefix(&self) -> &'static str {
        match self {
            EntityKind::Person => "PERSON",
            EntityKind::Email => "EMAIL",
            EntityKind::Phone => "PHONE",
            EntityKind::CreditCard => "CARD",
            EntityKind::Iban => "IBAN",
            EntityKind::Ip => "IP_ADDRESS",
            EntityKind::Url => "URL",
            EntityKind::Domain => "DOMAIN",
            EntityKind::SaudiId => "SAUDI_ID",
            EntityKind::Financial => "AMOUNT",
            EntityKind::Ssn => "SSN",
            EntityKind::Custom => "CUSTOM",
        }
    }

    /// Coarse grouping used for stats and caller-facing UI.
    pub fn category(&self) -> Category {
        match self {
            EntityKind::Person
            | EntityKind::Email
            | EntityKind::Phone
            | EntityKind::Ssn
            | EntityKind::SaudiId => Category::Pii,
            EntityKind::CreditCard | EntityKind::Iban | EntityKind::Financial => {
                Category::Financial
            }
            EntityKind::Ip | EntityKind::Url | EntityKind::Domain => Category::Technical,
            EntityKind::Custom => Category::Custom,
        }
    }
}

/// Coarse category grouping for stats and display. `Company` is reserved for
/// caller-driven organization matches; this crate never emits it itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pii,
    Financial,
    Technical,
    Company,
    Custom,
}

/// Confidence band used by the stats aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn of(confidence: u8) -> Self {
        match confidence {
            80..=100 => ConfidenceBand::High,
            50..=79 => ConfidenceBand::Medium,
            _ => ConfidenceBand::Low,
        }
    }
}

/// An intermediate candidate produced by a single finder, before overlap
/// resolution. `start`/`end` are byte offsets into the original text and
/// must land on UTF-8 codepoint boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: EntityKind,
    pub text: String,
    pub confidence: u8,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: EntityKind, text: impl Into<String>, confidence: u8) -> Self {
        Span {
            start,
            end,
            kind,
            text: text.into(),
            confidence,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A finalized, caller-facing detection: a Span plus identity, placeholder,
/// approval state and display context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub id: String,
    pub start: usize,
    pub end: usize,
    pub kind: EntityKind,
    pub text: String,
    pub confidence: u8,
    pub placeholder: String,
    pub approved: bool,
    pub context: String,
}

impl Detection {
    /// Coarse category for this detection's kind.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::of(self.confidence)
    }
}

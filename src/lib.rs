// Redact Engine
//
// A local-only detection and masking engine: scan text for twelve families
// of sensitive entities (names, financial data, network identifiers,
// contact details, national IDs), resolve overlaps deterministically, and
// rewrite approved detections into stable placeholders with a reversible
// mapping. No network calls, no persistence, no container/OCR parsing -
// those are the caller's concern.

mod checksum;
mod config;
mod custom_names;
mod error;
mod finders;
mod model;
mod recognizer;
mod rewriter;
mod span_table;
mod stats;

pub use config::{RecognizerConfig, DEFAULT_DOMAIN_TLDS, DEFAULT_FALSE_POSITIVE_WORDS};
pub use error::ConfigError;
pub use model::{Category, ConfidenceBand, Detection, EntityKind, Span};
pub use recognizer::{ExtractionResult, Recognizer, MAX_DETECTIONS};
pub use rewriter::{apply_masking, MaskingResult};
pub use stats::{compute_stats, DetectionStats};

#[cfg(test)]
mod tests {
    use super::*;

    /// Scenario A: mixed PII in one pass, every family represented, no
    /// crashes, no missed finder.
    #[test]
    fn scenario_mixed_pii_single_pass() {
        let mut recognizer = Recognizer::new();
        recognizer.set_custom_names(vec!["Yasser Al-Rashid"]);
        let text = "Yasser Al-Rashid (ID 1234567890) paid SAR 1,250.00 via card \
                    4532 0151 1283 0366 from IBAN SA0380000000608010167519. \
                    Reach him at yasser@example.com or +966 50 123 4567, \
                    server logs show 192.168.1.1.";

        let result = recognizer.extract_entities(text);
        assert!(!result.truncated);

        let kinds: std::collections::HashSet<EntityKind> =
            result.detections.iter().map(|d| d.kind).collect();
        assert!(kinds.contains(&EntityKind::Person));
        assert!(kinds.contains(&EntityKind::SaudiId));
        assert!(kinds.contains(&EntityKind::Financial));
        assert!(kinds.contains(&EntityKind::CreditCard));
        assert!(kinds.contains(&EntityKind::Iban));
        assert!(kinds.contains(&EntityKind::Email));
        assert!(kinds.contains(&EntityKind::Phone));
        assert!(kinds.contains(&EntityKind::Ip));

        let masked = apply_masking(text, &result.detections);
        assert!(!masked.redacted_text.contains("yasser@example.com"));
        assert!(!masked.redacted_text.contains("4532 0151 1283 0366"));
        assert!(!masked.mapping.is_empty());
    }

    /// Scenario B: a page number and a dollar amount must not be confused
    /// with each other.
    #[test]
    fn scenario_bare_number_is_not_a_financial_amount() {
        let recognizer = Recognizer::new();
        let result = recognizer.extract_entities("See page 42 for the $42 fee schedule.");
        let financial: Vec<_> = result
            .detections
            .iter()
            .filter(|d| d.kind == EntityKind::Financial)
            .collect();
        assert_eq!(financial.len(), 1);
        assert_eq!(financial[0].text, "$42");
    }

    /// Scenario C: an invalid credit card number (bad Luhn digit) must
    /// never be reported as a detection.
    #[test]
    fn scenario_invalid_credit_card_is_rejected() {
        let recognizer = Recognizer::new();
        let result = recognizer.extract_entities("Card on file: 4111111111111112");
        assert!(!result
            .detections
            .iter()
            .any(|d| d.kind == EntityKind::CreditCard));
    }

    /// Scenario D: both IPv6 literal forms are recognized in the same
    /// pass.
    #[test]
    fn scenario_both_ipv6_forms_detected() {
        let recognizer = Recognizer::new();
        let result = recognizer
            .extract_entities("Full: 2001:0db8:85a3:0000:0000:8a2e:0370:7334, short: ::1");
        let ips: Vec<_> = result
            .detections
            .iter()
            .filter(|d| d.kind == EntityKind::Ip)
            .collect();
        assert_eq!(ips.len(), 2);
    }

    /// Scenario E: a URL's domain is not separately reported as a bare
    /// domain, but a standalone domain mention still is.
    #[test]
    fn scenario_url_domain_not_double_counted_bare_domain_is() {
        let recognizer = Recognizer::new();
        let result = recognizer.extract_entities(
            "Visit https://example.com/docs, or check partner-corp.io directly.",
        );
        let domains: Vec<_> = result
            .detections
            .iter()
            .filter(|d| d.kind == EntityKind::Domain)
            .collect();
        assert_eq!(domains.len(), 1);
        assert_eq!(domains[0].text, "partner-corp.io");
        assert!(result.detections.iter().any(|d| d.kind == EntityKind::Url));
    }

    /// Scenario F: a registered custom name always wins over the
    /// capitalized-multiword heuristic for the same span.
    #[test]
    fn scenario_custom_name_precedence_over_heuristic() {
        let mut recognizer = Recognizer::new();
        recognizer.set_custom_names(vec!["John Smith"]);
        let result = recognizer.extract_entities("John Smith met Jane Doe yesterday");

        let johns: Vec<_> = result
            .detections
            .iter()
            .filter(|d| d.text == "John Smith")
            .collect();
        assert_eq!(johns.len(), 1);
        assert_eq!(johns[0].confidence, 100);

        assert!(result.detections.iter().any(|d| d.text == "Jane Doe"));
    }
}

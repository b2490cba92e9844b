// Redact Engine - National ID Finders
// Saudi national/iqama IDs and US Social Security Numbers: plain
// digit-group patterns, no checksum involved for either kind. The Saudi
// ID's "not preceded by a plus sign" rule needs a manual look-behind since
// the regex crate has none.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{EntityKind, Span};

static SAUDI_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[12]\d{9}\b").expect("saudi id regex should compile"));

pub fn find_saudi_ids(text: &str) -> Vec<Span> {
    SAUDI_ID_PATTERN
        .find_iter(text)
        .filter(|m| !preceded_by_plus(text, m.start()))
        .map(|m| Span::new(m.start(), m.end(), EntityKind::SaudiId, m.as_str(), 90))
        .collect()
}

/// `\b` treats `+` as a non-word character just like a space, so a phone
/// number like `+966512345678` would otherwise be misread as a 10-digit
/// Saudi ID starting right after the plus sign. Rejected by inspecting the
/// single byte before the match.
fn preceded_by_plus(text: &str, start: usize) -> bool {
    text.as_bytes().get(start.wrapping_sub(1)) == Some(&b'+') && start > 0
}

static SSN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("ssn regex should compile"));

pub fn find_ssns(text: &str) -> Vec<Span> {
    SSN_PATTERN
        .find_iter(text)
        .map(|m| Span::new(m.start(), m.end(), EntityKind::Ssn, m.as_str(), 90))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_saudi_id_starting_with_one() {
        let spans = find_saudi_ids("National ID: 1234567890 on file");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, EntityKind::SaudiId);
    }

    #[test]
    fn detects_saudi_id_starting_with_two() {
        let spans = find_saudi_ids("Iqama 2987654321 registered");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn rejects_when_preceded_by_plus_sign() {
        let spans = find_saudi_ids("Call +1234567890 for support");
        assert!(spans.is_empty());
    }

    #[test]
    fn rejects_ids_not_starting_with_one_or_two() {
        let spans = find_saudi_ids("Reference 3456789012 noted");
        assert!(spans.is_empty());
    }

    #[test]
    fn detects_standard_ssn() {
        let spans = find_ssns("SSN: 123-45-6789 confidential");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "123-45-6789");
    }

    #[test]
    fn rejects_malformed_ssn_grouping() {
        let spans = find_ssns("Not an ssn: 12-345-6789");
        assert!(spans.is_empty());
    }
}

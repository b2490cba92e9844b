// Redact Engine - Name Finders
// Custom-name exact matching (kind `person`, confidence 100) and the
// capitalized-multiword heuristic (kind `person`, confidence 85). Both
// follow the same compile-pattern / find_iter / filter shape the other
// finders use.

use regex::Regex;

use crate::config::RecognizerConfig;
use crate::custom_names::CustomNameRegistry;
use crate::model::{EntityKind, Span};

/// Match every registered custom name, case-insensitively, bounded by ASCII
/// word boundaries. Regex metacharacters in the name are escaped.
pub fn find_custom_names(text: &str, registry: &CustomNameRegistry) -> Vec<Span> {
    let mut spans = Vec::new();

    for name in registry.iter() {
        let pattern = format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(name));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        for m in re.find_iter(text) {
            spans.push(Span::new(
                m.start(),
                m.end(),
                EntityKind::Person,
                m.as_str(),
                100,
            ));
        }
    }

    spans
}

/// A run of two or more capitalized tokens, e.g. "Yasser Al-Rashid". Every
/// non-overlapping occurrence produced by `find_iter` gets its own span,
/// so a repeated name is detected at each mention, not just the first.
const FULL_NAME_PATTERN: &str =
    r"(?-u:\b)[A-Z][a-z]+(?:[ -](?:Al-|El-)?[A-Z][a-z]+)+(?-u:\b)";

pub fn find_full_names(text: &str, config: &RecognizerConfig) -> Vec<Span> {
    let re = Regex::new(FULL_NAME_PATTERN).expect("full name regex should compile");

    re.find_iter(text)
        .filter(|m| is_valid_full_name(text, m.start(), m.end(), config))
        .map(|m| Span::new(m.start(), m.end(), EntityKind::Person, m.as_str(), 85))
        .collect()
}

fn is_valid_full_name(text: &str, start: usize, end: usize, config: &RecognizerConfig) -> bool {
    let matched = &text[start..end];

    if matched.len() < 4 {
        return false;
    }

    if matched.contains("'s") || matched.contains("' s") {
        return false;
    }

    // Defend against a following possessive that the token pattern itself
    // cannot capture (apostrophe is outside the token character class).
    let tail = &text[end..];
    if tail.starts_with("'s") || tail.starts_with("' s") {
        return false;
    }

    for raw_token in matched.split(|c: char| c == ' ' || c == '-') {
        let token = raw_token.trim();
        if token.is_empty() {
            continue;
        }
        if config.is_false_positive_word(token) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_name_matches_case_insensitively() {
        let mut registry = CustomNameRegistry::new();
        registry.set(vec!["john"]);
        let spans = find_custom_names("Ask Dr. John Smith about it", &registry);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "John");
        assert_eq!(spans[0].confidence, 100);
    }

    #[test]
    fn custom_name_respects_ascii_word_boundaries() {
        let mut registry = CustomNameRegistry::new();
        registry.set(vec!["ann"]);
        let spans = find_custom_names("Annabelle wrote to Ann", &registry);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Ann");
    }

    #[test]
    fn custom_name_escapes_regex_metacharacters() {
        let mut registry = CustomNameRegistry::new();
        registry.set(vec!["smith+jones"]);
        let spans = find_custom_names("Contact Smith+Jones today", &registry);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn full_name_matches_hyphenated_arabic_style_surname() {
        let config = RecognizerConfig::default();
        let spans = find_full_names("Contact Yasser Al-Rashid at the office", &config);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Yasser Al-Rashid");
        assert_eq!(spans[0].confidence, 85);
    }

    #[test]
    fn full_name_rejects_false_positive_words() {
        let config = RecognizerConfig::default();
        let spans = find_full_names("Speak to Account Manager about it", &config);
        assert!(spans.is_empty());
    }

    #[test]
    fn full_name_rejects_possessive() {
        let config = RecognizerConfig::default();
        let spans = find_full_names("This is John Smith's desk", &config);
        assert!(spans.is_empty());
    }

    #[test]
    fn full_name_scans_repeated_occurrences_independently() {
        let config = RecognizerConfig::default();
        let spans = find_full_names("John Smith called John Smith back", &config);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, 0);
        assert!(spans[1].start > spans[0].end);
    }
}

// Redact Engine - Contact Finders
// Emails, phone numbers, URLs, and bare domains.
//
// Emails and URLs use the common "regex candidate, length-bound
// post-check" shape; phone numbers are a union of per-format patterns
// normalized by total digit count, rather than one omnibus international
// phone regex. Domain detection needs two manual exclusions (email local
// part, URL authority) that a bare regex with no look-behind can't
// express.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::RecognizerConfig;
use crate::model::{EntityKind, Span};

// ---------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email regex should compile")
});

pub fn find_emails(text: &str) -> Vec<Span> {
    EMAIL_PATTERN
        .find_iter(text)
        .filter(|m| is_plausible_email(m.as_str()))
        .map(|m| Span::new(m.start(), m.end(), EntityKind::Email, m.as_str(), 95))
        .collect()
}

fn is_plausible_email(candidate: &str) -> bool {
    match candidate.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && local.len() <= 64
                && !local.ends_with('.')
                && !domain.is_empty()
                && domain.len() <= 253
                && !domain.starts_with('.')
                && !domain.starts_with('-')
        }
        None => false,
    }
}

// ---------------------------------------------------------------------
// Phone numbers
// ---------------------------------------------------------------------
//
// Each pattern targets one common layout; the union is taken and every
// match re-validated by stripping non-digits and counting (7-15 digits,
// the E.164 envelope).

static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // +<country> grouped by spaces or dashes, e.g. +966 50 123 4567
        Regex::new(r"\+\d{1,3}[ -]?\(?\d{1,4}\)?(?:[ -]?\d{2,4}){2,4}").unwrap(),
        // (area) prefix-line, e.g. (555) 123-4567
        Regex::new(r"\(\d{3}\)[ -]?\d{3}[-]?\d{4}").unwrap(),
        // dash/dot grouped, e.g. 555-123-4567 or 555.123.4567
        Regex::new(r"\b\d{3}[-.]\d{3}[-.]\d{4}\b").unwrap(),
        // Saudi local mobile, e.g. 05xxxxxxxx
        Regex::new(r"\b05\d{8}\b").unwrap(),
    ]
});

pub fn find_phones(text: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = PHONE_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text))
        .filter(|m| has_plausible_digit_count(m.as_str()))
        .map(|m| Span::new(m.start(), m.end(), EntityKind::Phone, m.as_str(), 85))
        .collect();

    spans.sort_by_key(|s| s.start);
    spans
}

fn has_plausible_digit_count(candidate: &str) -> bool {
    let digits = candidate.chars().filter(|c| c.is_ascii_digit()).count();
    (7..=15).contains(&digits)
}

// ---------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\\bhttps?://[^\\s<>\"']+").expect("url regex should compile")
});

pub fn find_urls(text: &str) -> Vec<Span> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| {
            let (start, end) = trim_trailing_punctuation(m.as_str(), m.start(), m.end());
            Span::new(start, end, EntityKind::Url, &text[start..end], 95)
        })
        .collect()
}

/// Strip trailing sentence punctuation a greedy URL match tends to sweep up,
/// e.g. the period ending "see https://example.com."
fn trim_trailing_punctuation(matched: &str, start: usize, mut end: usize) -> (usize, usize) {
    let mut trimmed = matched;
    while let Some(last) = trimmed.chars().last() {
        if matches!(last, '.' | ',' | ';' | ':' | '!' | '?' | ')' | ']') {
            trimmed = &trimmed[..trimmed.len() - last.len_utf8()];
            end -= last.len_utf8();
        } else {
            break;
        }
    }
    (start, end)
}

// ---------------------------------------------------------------------
// Bare domains
// ---------------------------------------------------------------------

pub fn find_domains(text: &str, config: &RecognizerConfig) -> Vec<Span> {
    let tld_alternation = config
        .domain_tlds()
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    if tld_alternation.is_empty() {
        return Vec::new();
    }

    let pattern = format!(
        r"\b(?:[A-Za-z0-9](?:[A-Za-z0-9-]{{0,61}}[A-Za-z0-9])?\.)+(?i:{tld_alternation})\b"
    );
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    re.find_iter(text)
        .filter(|m| !is_email_local_part(text, m.start()))
        .filter(|m| !is_url_authority(text, m.start()))
        .filter(|m| !m.as_str().starts_with("www."))
        .map(|m| Span::new(m.start(), m.end(), EntityKind::Domain, m.as_str(), 90))
        .collect()
}

/// True if the character immediately before `start` is `@` - the candidate
/// is an email's domain part, already covered by `find_emails`.
fn is_email_local_part(text: &str, start: usize) -> bool {
    text[..start].chars().next_back() == Some('@')
}

/// True if `://` appears in the ten bytes immediately preceding `start` -
/// the candidate is a URL's authority, already covered by `find_urls`.
fn is_url_authority(text: &str, start: usize) -> bool {
    let window_start = start.saturating_sub(10);
    let mut window_start = window_start;
    while window_start < start && !text.is_char_boundary(window_start) {
        window_start += 1;
    }
    text[window_start..start].contains("://")
}

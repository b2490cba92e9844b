// Redact Engine - Network Finders
// IPv4 and IPv6 literal detection.
//
// Grounded on the octet-alternation style used across the retrieved PII
// scanners for IPv4 (`(?:25[0-5]|2[0-4]\d|[01]?\d\d?)` per-octet, rather
// than a blunt `\d{1,3}`), generalized here with an explicit post-filter
// so a bare version string like "10.2.3.4" in release notes doesn't read
// as a detection unless it has at least one octet >= 100.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{EntityKind, Span};

const OCTET: &str = r"(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)";

static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\b{OCTET}\.{OCTET}\.{OCTET}\.{OCTET}\b");
    Regex::new(&pattern).expect("ipv4 regex should compile")
});

// No \b at the edges: `::1` and `::ffff:10.0.0.1` legitimately start with a
// non-word character, so a leading word-boundary assertion would reject
// valid matches at the very positions where it matters most. Every
// alternative below requires a literal `::` somewhere (or all 8 groups) so
// a bare single colon in ordinary prose can never match.
static IPV6_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:[0-9A-Fa-f]{1,4}:){7}[0-9A-Fa-f]{1,4}",
        r"|(?:[0-9A-Fa-f]{1,4}:){1,6}:(?:[0-9A-Fa-f]{1,4}:){0,6}[0-9A-Fa-f]{1,4}",
        r"|(?:[0-9A-Fa-f]{1,4}:){1,6}:",
        r"|::(?:ffff:)?(?:\d{1,3}\.){3}\d{1,3}",
        r"|:(?::[0-9A-Fa-f]{1,4}){1,7}",
    ))
    .expect("ipv6 regex should compile")
});

pub fn find_ips(text: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = IPV4_PATTERN
        .find_iter(text)
        .filter(|m| has_meaningful_octet(m.as_str()))
        .map(|m| Span::new(m.start(), m.end(), EntityKind::Ip, m.as_str(), 95))
        .collect();

    spans.extend(
        IPV6_PATTERN
            .find_iter(text)
            .filter(|m| m.as_str().contains(':'))
            .map(|m| Span::new(m.start(), m.end(), EntityKind::Ip, m.as_str(), 95)),
    );

    spans
}

/// Reject dotted-quad literals whose every octet is a single digit - these
/// are far more often version numbers ("10.2.3.4") than routable addresses.
fn has_meaningful_octet(candidate: &str) -> bool {
    candidate.split('.').any(|part| part.len() > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_standard_ipv4() {
        let spans = find_ips("Server at 192.168.1.1 is up");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "192.168.1.1");
    }

    #[test]
    fn rejects_version_like_dotted_quads() {
        let spans = find_ips("Running release 1.2.3.4 now");
        assert!(spans.is_empty());
    }

    #[test]
    fn detects_full_form_ipv6() {
        let spans = find_ips("Address: 2001:0db8:85a3:0000:0000:8a2e:0370:7334 configured");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn detects_compressed_form_ipv6() {
        let spans = find_ips("Loopback is ::1 by convention");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "::1");
    }

    #[test]
    fn detects_ipv4_mapped_ipv6() {
        let spans = find_ips("Mapped address ::ffff:192.0.2.128 seen in logs");
        assert!(spans.iter().any(|s| s.text.contains("192.0.2.128")));
    }

    #[test]
    fn detects_both_forms_in_one_pass() {
        let spans = find_ips("v4 at 10.20.30.40 and v6 at fe80::1 both active");
        assert_eq!(spans.len(), 2);
    }
}

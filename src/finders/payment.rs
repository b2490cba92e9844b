// Redact Engine - Payment & Financial Finders
// Credit cards (Luhn + network prefix), IBANs (mod-97), and currency-tagged
// amounts. Each follows the same shape: compile a candidate regex, filter
// matches through a standalone validator function.

use std::sync::LazyLock;

use regex::Regex;

use crate::checksum::{iban_is_valid, luhn_is_valid};
use crate::model::{EntityKind, Span};

// ---------------------------------------------------------------------
// Credit cards
// ---------------------------------------------------------------------

static CREDIT_CARD_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:\d{4}[ -]\d{4}[ -]\d{4}[ -]\d{4}|\d{4}[ -]\d{6}[ -]\d{5}|\d{13}|\d{15}|\d{16})\b",
    )
    .expect("credit card regex should compile")
});

pub fn find_credit_cards(text: &str) -> Vec<Span> {
    CREDIT_CARD_CANDIDATE
        .find_iter(text)
        .filter_map(|m| {
            let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
            if !matches!(digits.len(), 13 | 15 | 16) {
                return None;
            }
            if !luhn_is_valid(&digits) || !has_recognized_network_prefix(&digits) {
                return None;
            }
            Some(Span::new(
                m.start(),
                m.end(),
                EntityKind::CreditCard,
                m.as_str(),
                95,
            ))
        })
        .collect()
}

fn has_recognized_network_prefix(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let two: u32 = digits[0..2].parse().unwrap_or(0);
    let four: u32 = if digits.len() >= 4 {
        digits[0..4].parse().unwrap_or(0)
    } else {
        0
    };

    match bytes[0] {
        b'4' => true,                                    // Visa
        _ if (51..=55).contains(&two) => true,            // Mastercard (old range)
        _ if (22..=27).contains(&two) => true,            // Mastercard (2-series)
        _ if two == 34 || two == 37 => true,               // Amex
        _ if four == 6011 => true,                          // Discover
        _ if two == 65 => true,                             // Discover
        _ if (644..=649).contains(&(four / 10)) => true,   // Discover 644-649
        _ => false,
    }
}

// ---------------------------------------------------------------------
// IBANs
// ---------------------------------------------------------------------

static IBAN_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z]{2}\d{2}(?:[ ]?[A-Z0-9]{1,4}){3,8}\b").expect("iban regex should compile")
});

pub fn find_ibans(text: &str) -> Vec<Span> {
    IBAN_CANDIDATE
        .find_iter(text)
        .filter(|m| iban_is_valid(m.as_str()))
        .map(|m| Span::new(m.start(), m.end(), EntityKind::Iban, m.as_str(), 95))
        .collect()
}

// ---------------------------------------------------------------------
// Financial amounts
// ---------------------------------------------------------------------

const NUMBER: &str = r"\d{1,3}(?:[,']\d{3})*(?:\.\d{1,2})?";
const MAGNITUDE: &str = r"(?:\s?(?:[KMB]\b|thousand|million|billion))?";
const CODES: &str = r"(?:USD|EUR|GBP|SAR|SR|AED|JPY|INR|CHF)";
const WORDS: &str = r"(?i:dollars|euros|pounds|riyals|dirhams|yen|rupees)";

static FINANCIAL_SYMBOL: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"[$€£¥₹]\s?{NUMBER}{MAGNITUDE}");
    Regex::new(&pattern).expect("financial symbol regex should compile")
});

static FINANCIAL_CODE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\b{CODES}\s?{NUMBER}{MAGNITUDE}\b");
    Regex::new(&pattern).expect("financial code-prefix regex should compile")
});

static FINANCIAL_CODE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\b{NUMBER}{MAGNITUDE}\s?{CODES}\b");
    Regex::new(&pattern).expect("financial code-suffix regex should compile")
});

static FINANCIAL_WORD_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\b{NUMBER}{MAGNITUDE}\s?{WORDS}\b");
    Regex::new(&pattern).expect("financial word-suffix regex should compile")
});

pub fn find_financial_amounts(text: &str) -> Vec<Span> {
    [
        &*FINANCIAL_SYMBOL,
        &*FINANCIAL_CODE_PREFIX,
        &*FINANCIAL_CODE_SUFFIX,
        &*FINANCIAL_WORD_SUFFIX,
    ]
    .iter()
    .flat_map(|re| re.find_iter(text))
    .map(|m| Span::new(m.start(), m.end(), EntityKind::Financial, m.as_str(), 95))
    .collect()
}

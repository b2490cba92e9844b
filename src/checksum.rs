// Redact Engine - Checksum Primitives
// Luhn (mod-10) for payment cards, ISO 7064 mod-97 for IBANs. Both share
// the same "strip separators, validate digit count" shape before running
// the actual checksum.

/// Validates a digit string using the Luhn (mod-10) checksum.
///
/// Non-digit characters are stripped defensively before validation. Rejects
/// anything outside the 13-19 digit range real payment card numbers occupy.
pub fn luhn_is_valid(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }

    let mut sum = 0u32;
    for (i, &digit) in digits.iter().rev().enumerate() {
        let mut d = digit;
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }

    sum % 10 == 0
}

/// Validates an IBAN using the ISO 7064 mod-97 checksum.
///
/// Input is uppercased and stripped of spaces before validation. Requires
/// the `^[A-Z]{2}[0-9]{2}[A-Z0-9]+$` shape and a total length of 15-34.
/// The remainder is computed by streaming base-10 digits through the
/// classic "multiply running remainder by 10 (or 100 for two-digit letter
/// expansions), add the next digit, mod 97" loop so the full integer is
/// never materialized.
pub fn iban_is_valid(input: &str) -> bool {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if cleaned.len() < 15 || cleaned.len() > 34 {
        return false;
    }

    let bytes: Vec<char> = cleaned.chars().collect();
    if bytes.len() < 4
        || !bytes[0].is_ascii_uppercase()
        || !bytes[1].is_ascii_uppercase()
        || !bytes[2].is_ascii_digit()
        || !bytes[3].is_ascii_digit()
        || !bytes[4..].iter().all(|c| c.is_ascii_alphanumeric())
    {
        return false;
    }

    // Move the first four characters (country + check digits) to the end.
    let rearranged: String = cleaned[4..].chars().chain(cleaned[..4].chars()).collect();

    let mut remainder: u64 = 0;
    for c in rearranged.chars() {
        let value = if c.is_ascii_digit() {
            c.to_digit(10).unwrap() as u64
        } else {
            // A=10, B=11, ..., Z=35
            (c as u64) - ('A' as u64) + 10
        };

        if value >= 10 {
            // Two-digit expansion: shift remainder by two decimal places.
            remainder = (remainder * 100 + value) % 97;
        } else {
            remainder = (remainder * 10 + value) % 97;
        }
    }

    remainder == 1
}

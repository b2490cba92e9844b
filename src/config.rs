// Redact Engine - Recognizer Configuration
//
// The full-name false-positive lexicon and the domain TLD list are
// best-effort closed lists that callers may want to extend. Both are
// exposed here as configuration rather than hard-coded constants, threaded
// into `Recognizer::with_config`.

use std::collections::HashSet;

use crate::error::ConfigError;

/// Words that disqualify an otherwise-capitalized-multiword match from being
/// treated as a person's name (e.g. "Account Manager", "Service Provider").
pub const DEFAULT_FALSE_POSITIVE_WORDS: &[&str] = &[
    "company",
    "corporation",
    "provider",
    "owner",
    "customer",
    "client",
    "employee",
    "employer",
    "manager",
    "director",
    "officer",
    "member",
    "partner",
    "vendor",
    "supplier",
    "contractor",
    "tenant",
    "landlord",
    "buyer",
    "seller",
    "lender",
    "borrower",
    "licensee",
    "licensor",
    "assignee",
    "assignor",
    "beneficiary",
    "trustee",
    "agent",
    "principal",
    "party",
    "parties",
    "entity",
    "organization",
    "business",
    "firm",
    "service",
    "services",
    "product",
    "products",
    "software",
    "system",
    "user",
    "account",
    "holder",
    "applicant",
    "recipient",
    "donor",
    "trade",
    "mark",
    "trademark",
    "copyright",
    "patent",
];

/// Closed list of TLDs the standalone-domain finder accepts. English-centric
/// by default; extend via `RecognizerConfig::with_domain_tlds` for broader
/// coverage.
pub const DEFAULT_DOMAIN_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "info", "biz", "name", "pro", "co",
    "io", "ai", "app", "dev", "tech", "online", "shop", "store", "blog", "cloud", "xyz",
    "us", "uk", "ca", "au", "de", "fr", "jp", "cn", "in", "br", "ru", "it", "es", "nl",
    "se", "no", "fi", "dk", "pl", "ch", "at", "be", "ie", "nz", "za", "mx", "kr", "sg",
    "hk", "tw", "ae", "sa", "eg", "tr", "gr", "pt", "il",
];

/// Runtime configuration for a `Recognizer`, covering the best-effort lists
/// the source leaves open-ended.
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    false_positive_words: HashSet<String>,
    domain_tlds: HashSet<String>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            false_positive_words: DEFAULT_FALSE_POSITIVE_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            domain_tlds: DEFAULT_DOMAIN_TLDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RecognizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the false-positive word list. Rejects empty entries.
    pub fn with_false_positive_words<I, S>(mut self, words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.into().trim().to_lowercase();
            if word.is_empty() {
                return Err(ConfigError::EmptyFalsePositiveWord);
            }
            set.insert(word);
        }
        self.false_positive_words = set;
        Ok(self)
    }

    /// Replace the accepted domain TLD list. Rejects an empty list.
    pub fn with_domain_tlds<I, S>(mut self, tlds: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: HashSet<String> = tlds
            .into_iter()
            .map(|s| s.into().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if set.is_empty() {
            return Err(ConfigError::EmptyTldList);
        }
        self.domain_tlds = set;
        Ok(self)
    }

    pub fn is_false_positive_word(&self, token: &str) -> bool {
        self.false_positive_words.contains(&token.to_lowercase())
    }

    pub fn is_known_tld(&self, tld: &str) -> bool {
        self.domain_tlds.contains(&tld.to_lowercase())
    }

    pub fn domain_tlds(&self) -> &HashSet<String> {
        &self.domain_tlds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_knows_common_tlds() {
        let cfg = RecognizerConfig::default();
        assert!(cfg.is_known_tld("com"));
        assert!(cfg.is_known_tld("COM"));
        assert!(!cfg.is_known_tld("notatld"));
    }

    #[test]
    fn default_config_flags_false_positive_words() {
        let cfg = RecognizerConfig::default();
        assert!(cfg.is_false_positive_word("Manager"));
        assert!(!cfg.is_false_positive_word("Yasser"));
    }

    #[test]
    fn rejects_empty_tld_list() {
        let result = RecognizerConfig::default().with_domain_tlds(Vec::<String>::new());
        assert_eq!(result.unwrap_err(), ConfigError::EmptyTldList);
    }

    #[test]
    fn rejects_empty_false_positive_word() {
        let result = RecognizerConfig::default().with_false_positive_words(vec!["ok", ""]);
        assert_eq!(result.unwrap_err(), ConfigError::EmptyFalsePositiveWord);
    }
}

// Redact Engine - Error Types
//
// Recognition and masking never fail: malformed or adversarial input
// degrades to an empty result, not an error. The surface that legitimately
// rejects input is construction time, building a `Recognizer` from a
// caller-supplied `RecognizerConfig`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TLD list must not be empty")]
    EmptyTldList,

    #[error("false-positive word list entry must not be empty")]
    EmptyFalsePositiveWord,
}

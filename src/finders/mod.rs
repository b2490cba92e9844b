// Redact Engine - Pattern Registry
//
// The twelve entity-recognition families, grouped into files by family
// rather than one-file-per-kind, mirroring how a related domain's
// operations share a module. Each finder is a pure function from text
// (plus whatever small bit of context it needs - the custom-name registry,
// or the recognizer config) to a `Vec<Span>`; none of them touch the
// `SpanTable` directly. De-duplication and overlap resolution are
// centralized there instead.

mod contact;
mod names;
mod national_id;
mod network;
mod payment;

pub use contact::{find_domains, find_emails, find_phones, find_urls};
pub use names::{find_custom_names, find_full_names};
pub use national_id::{find_saudi_ids, find_ssns};
pub use network::find_ips;
pub use payment::{find_credit_cards, find_financial_amounts, find_ibans};

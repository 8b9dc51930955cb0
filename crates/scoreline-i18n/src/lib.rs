//! # scoreline-i18n
//!
//! Hand-curated translation tables for well-known countries, leagues and
//! teams, plus the rule-based generators used when no table or learned entry
//! exists.

pub mod dictionary;
pub mod heuristics;

pub use dictionary::StaticDictionary;
pub use heuristics::Candidate;

//! # scoreline-core
//!
//! Core types, traits, configuration, and error handling for the scoreline
//! translation cache.

pub mod clock;
pub mod config;
pub mod error;
pub mod fixture;
pub mod mapping;
pub mod traits;

pub use config::shellexpand;
pub use mapping::{EntityType, LanguageCode, MappingKey, TranslationMapping};

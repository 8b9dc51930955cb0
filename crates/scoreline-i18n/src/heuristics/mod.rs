//! Rule-based translation generators, one pure function per entity type.
//!
//! Generators never consult storage themselves. Anything they need to know
//! about countries comes in through a `country_name` lookup supplied by the
//! caller, which typically checks the static tables first and learned
//! mappings second.

pub mod country;
pub mod league;
pub mod team;

use scoreline_core::{EntityType, LanguageCode};

/// Confidence of a country produced through an alias.
pub const COUNTRY_CONFIDENCE: f32 = 0.9;
/// Confidence of a league built from a pattern and a named country.
pub const LEAGUE_CONFIDENCE: f32 = 0.85;
/// Confidence of a league whose country came only from fixture context.
pub const LEAGUE_CONTEXT_CONFIDENCE: f32 = 0.8;
/// Confidence of a team with structural tokens substituted.
pub const TEAM_CONFIDENCE: f32 = 0.7;

/// A generated translation and how much to trust it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub confidence: f32,
}

impl Candidate {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Run the generator for `entity_type`.
///
/// `country_name(name)` must return the real `lang` translation of a country
/// name, or `None` when none is known. A candidate that merely repeats
/// `name` is discarded.
pub fn derive(
    name: &str,
    lang: LanguageCode,
    entity_type: EntityType,
    context_country: Option<&str>,
    country_name: &dyn Fn(&str) -> Option<String>,
) -> Option<Candidate> {
    if lang.is_source() || name.trim().is_empty() {
        return None;
    }
    let candidate = match entity_type {
        EntityType::Country => country::derive(name, country_name),
        EntityType::League => league::derive(name, lang, context_country, country_name),
        EntityType::Team => team::derive(name, lang),
    }?;
    (candidate.text != name && !candidate.text.trim().is_empty()).then_some(candidate)
}

/// Split `name` into whitespace-separated words.
pub(crate) fn words(name: &str) -> Vec<&str> {
    name.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none(_: &str) -> Option<String> {
        None
    }

    fn brazil(name: &str) -> Option<String> {
        (name == "Brazil").then(|| "巴西".to_string())
    }

    #[test]
    fn test_dispatch_by_type() {
        let team = derive("Leeds United", LanguageCode::ZhHk, EntityType::Team, None, &none);
        assert_eq!(team.unwrap().confidence, TEAM_CONFIDENCE);
        let league = derive(
            "Premier League",
            LanguageCode::ZhHk,
            EntityType::League,
            Some("Brazil"),
            &brazil,
        );
        assert_eq!(league.unwrap().text, "巴西超級聯賽");
        assert!(derive("Leeds United", LanguageCode::ZhHk, EntityType::League, None, &none).is_none());
    }

    #[test]
    fn test_source_language_and_blank_names() {
        assert!(derive("Leeds United", LanguageCode::En, EntityType::Team, None, &none).is_none());
        assert!(derive("   ", LanguageCode::ZhHk, EntityType::Team, None, &none).is_none());
    }

    #[test]
    fn test_echo_candidates_discarded() {
        let echo = |name: &str| Some(name.to_string());
        assert!(derive("Brazil", LanguageCode::Es, EntityType::Country, None, &echo).is_none());
    }
}

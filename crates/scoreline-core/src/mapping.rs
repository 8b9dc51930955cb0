//! The learned translation entity and the enums that partition it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ScorelineError;

/// Confidence assigned to echo placeholders (a language copied from `original`).
pub const ECHO_CONFIDENCE: f32 = 0.3;

/// Display languages understood by the cache.
///
/// `En` is the source language of the upstream feeds; every other code is a
/// translation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "it")]
    It,
    #[serde(rename = "zh-hk")]
    ZhHk,
    #[serde(rename = "zh-tw")]
    ZhTw,
    #[serde(rename = "zh-cn", alias = "zh")]
    ZhCn,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 11] = [
        Self::En,
        Self::Es,
        Self::Pt,
        Self::De,
        Self::Fr,
        Self::It,
        Self::ZhHk,
        Self::ZhTw,
        Self::ZhCn,
        Self::Ja,
        Self::Ko,
    ];

    /// Every language a learned mapping can carry a translation for.
    pub fn targets() -> impl Iterator<Item = LanguageCode> {
        Self::ALL.into_iter().filter(|l| !l.is_source())
    }

    /// Whether this is the language raw feed names already arrive in.
    pub fn is_source(&self) -> bool {
        matches!(self, Self::En)
    }

    /// Whether names are written without spaces between words (CJK).
    pub fn is_cjk(&self) -> bool {
        matches!(self, Self::ZhHk | Self::ZhTw | Self::ZhCn | Self::Ja)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Pt => "pt",
            Self::De => "de",
            Self::Fr => "fr",
            Self::It => "it",
            Self::ZhHk => "zh-hk",
            Self::ZhTw => "zh-tw",
            Self::ZhCn => "zh-cn",
            Self::Ja => "ja",
            Self::Ko => "ko",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = ScorelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase().replace('_', "-");
        match tag.as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "pt" => Ok(Self::Pt),
            "de" => Ok(Self::De),
            "fr" => Ok(Self::Fr),
            "it" => Ok(Self::It),
            "zh-hk" => Ok(Self::ZhHk),
            "zh-tw" => Ok(Self::ZhTw),
            "zh" | "zh-cn" => Ok(Self::ZhCn),
            "ja" => Ok(Self::Ja),
            "ko" => Ok(Self::Ko),
            other => Err(ScorelineError::Config(format!("unsupported language: {other}"))),
        }
    }
}

/// Partition of the translation namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Country,
    League,
    Team,
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [Self::Country, Self::League, Self::Team];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::League => "league",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ScorelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "country" => Ok(Self::Country),
            "league" => Ok(Self::League),
            "team" => Ok(Self::Team),
            other => Err(ScorelineError::Config(format!("unknown entity type: {other}"))),
        }
    }
}

/// Natural key of a mapping: the raw name within its entity type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MappingKey {
    pub entity_type: EntityType,
    pub original: String,
}

impl MappingKey {
    pub fn new(entity_type: EntityType, original: impl Into<String>) -> Self {
        Self {
            entity_type,
            original: original.into(),
        }
    }
}

impl fmt::Display for MappingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.original)
    }
}

/// A learned raw-name → per-language display string mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMapping {
    pub original: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Sparse; a missing language falls back to `original`.
    pub translations: BTreeMap<LanguageCode, String>,
    pub frequency: u64,
    pub last_used: DateTime<Utc>,
    pub confidence: f32,
}

impl TranslationMapping {
    /// An empty mapping observed once at `now`.
    pub fn new(original: impl Into<String>, entity_type: EntityType, now: DateTime<Utc>) -> Self {
        Self {
            original: original.into(),
            entity_type,
            translations: BTreeMap::new(),
            frequency: 1,
            last_used: now,
            confidence: ECHO_CONFIDENCE,
        }
    }

    pub fn with_translation(mut self, lang: LanguageCode, value: impl Into<String>) -> Self {
        self.translations.insert(lang, value.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn key(&self) -> MappingKey {
        MappingKey::new(self.entity_type, self.original.clone())
    }

    /// Whether `lang` holds only the untranslated original (or nothing).
    pub fn is_placeholder(&self, lang: LanguageCode) -> bool {
        match self.translations.get(&lang) {
            Some(value) => value == &self.original,
            None => true,
        }
    }

    /// The learned value for `lang`, ignoring echo placeholders.
    pub fn real_translation(&self, lang: LanguageCode) -> Option<&str> {
        self.translations
            .get(&lang)
            .filter(|v| *v != &self.original)
            .map(String::as_str)
    }

    /// Number of languages with a value other than the original.
    pub fn real_translation_count(&self) -> usize {
        self.translations
            .values()
            .filter(|v| *v != &self.original)
            .count()
    }

    /// Whether every target language has a real (non-echo) value.
    pub fn is_complete(&self) -> bool {
        LanguageCode::targets().all(|lang| !self.is_placeholder(lang))
    }

    /// Structural checks applied to anything read back from storage or imported.
    pub fn validate(&self) -> Result<(), String> {
        if self.original.trim().is_empty() {
            return Err("empty original".to_string());
        }
        if self.translations.is_empty() {
            return Err("no translations".to_string());
        }
        if self.translations.values().any(|v| v.trim().is_empty()) {
            return Err("blank translation value".to_string());
        }
        if self.frequency == 0 {
            return Err("frequency must be at least 1".to_string());
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!("confidence out of range: {}", self.confidence));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_language_parse_is_lenient() {
        assert_eq!("zh-HK".parse::<LanguageCode>().unwrap(), LanguageCode::ZhHk);
        assert_eq!("zh_tw".parse::<LanguageCode>().unwrap(), LanguageCode::ZhTw);
        assert_eq!("zh".parse::<LanguageCode>().unwrap(), LanguageCode::ZhCn);
        assert!("xx".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn test_targets_exclude_source() {
        assert!(LanguageCode::targets().all(|l| l != LanguageCode::En));
        assert_eq!(LanguageCode::targets().count(), LanguageCode::ALL.len() - 1);
    }

    #[test]
    fn test_mapping_wire_format() {
        let m = TranslationMapping::new("FC Porto", EntityType::Team, now())
            .with_translation(LanguageCode::ZhHk, "波圖");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["type"], "team");
        assert_eq!(json["translations"]["zh-hk"], "波圖");
        assert_eq!(json["lastUsed"], "2026-03-01T12:00:00Z");
        let back: TranslationMapping = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_placeholder_detection() {
        let m = TranslationMapping::new("Porto", EntityType::Team, now())
            .with_translation(LanguageCode::De, "Porto")
            .with_translation(LanguageCode::Ja, "ポルト");
        assert!(m.is_placeholder(LanguageCode::De));
        assert!(m.is_placeholder(LanguageCode::Ko));
        assert!(!m.is_placeholder(LanguageCode::Ja));
        assert_eq!(m.real_translation(LanguageCode::De), None);
        assert_eq!(m.real_translation_count(), 1);
        assert!(!m.is_complete());
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let empty = TranslationMapping::new("Porto", EntityType::Team, now());
        assert!(empty.validate().is_err());

        let mut zero = empty.clone().with_translation(LanguageCode::Ja, "ポルト");
        zero.frequency = 0;
        assert!(zero.validate().is_err());

        let mut nan = empty.with_translation(LanguageCode::Ja, "ポルト");
        nan.confidence = f32::NAN;
        assert!(nan.validate().is_err());
    }
}

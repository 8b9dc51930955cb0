//! Render-pass memo in front of the resolver.

use chrono::{DateTime, Duration, Utc};
use scoreline_core::{config::MemoConfig, EntityType, LanguageCode};
use std::collections::HashMap;

/// `name|lang|type`, plus the context country for leagues.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoKey {
    pub name: String,
    pub lang: LanguageCode,
    pub entity_type: EntityType,
    pub country: Option<String>,
}

impl MemoKey {
    pub fn new(name: &str, lang: LanguageCode, entity_type: EntityType, country: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            lang,
            entity_type,
            country: country.map(str::to_string),
        }
    }
}

/// Bounded, time-limited cache of resolved strings.
///
/// Cleared at the start of every rendering pass; entries older than the TTL
/// are ignored even within a pass.
#[derive(Debug)]
pub struct EphemeralMemo {
    entries: HashMap<MemoKey, (String, DateTime<Utc>)>,
    max_entries: usize,
    ttl: Duration,
}

impl EphemeralMemo {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries,
            ttl,
        }
    }

    pub fn get(&self, key: &MemoKey, now: DateTime<Utc>) -> Option<&str> {
        self.entries
            .get(key)
            .filter(|(_, stamp)| now - *stamp < self.ttl)
            .map(|(value, _)| value.as_str())
    }

    /// Remember `value`. When full, expired entries are swept first; if the
    /// memo is still full the value is simply not remembered.
    pub fn put(&mut self, key: MemoKey, value: String, now: DateTime<Utc>) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            let ttl = self.ttl;
            self.entries.retain(|_, (_, stamp)| now - *stamp < ttl);
            if self.entries.len() >= self.max_entries {
                return;
            }
        }
        self.entries.insert(key, (value, now));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&MemoConfig> for EphemeralMemo {
    fn from(config: &MemoConfig) -> Self {
        let ttl = i64::try_from(config.ttl_secs)
            .unwrap_or(i64::MAX)
            .min(i64::MAX / 1000);
        Self::new(config.max_entries, Duration::seconds(ttl))
    }
}

//! Bounded in-memory collection of learned mappings.
//!
//! Split into focused submodules:
//! - `eviction`: frequency × recency scoring and ranking

mod eviction;

#[cfg(test)]
mod tests;

pub use eviction::score;

use chrono::{DateTime, Duration, Utc};
use scoreline_core::{
    config::{CacheConfig, MAX_RECENCY_WINDOW_DAYS},
    mapping::MappingKey,
    EntityType, TranslationMapping,
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

const DEFAULT_RECENCY_DAYS: i64 = 30;

/// Size and recency parameters for the store.
#[derive(Debug, Clone)]
pub struct StoreLimits {
    pub max_mappings: usize,
    pub cleanup_threshold: usize,
    pub recency_window: Duration,
}

impl From<&CacheConfig> for StoreLimits {
    fn from(config: &CacheConfig) -> Self {
        let max_mappings = config.max_mappings.max(1);
        let recency_window = (1..=MAX_RECENCY_WINDOW_DAYS)
            .contains(&config.recency_window_days)
            .then(|| Duration::try_days(config.recency_window_days))
            .flatten()
            .unwrap_or_else(|| {
                warn!(
                    days = config.recency_window_days,
                    "recency window out of range, using {DEFAULT_RECENCY_DAYS} days"
                );
                Duration::days(DEFAULT_RECENCY_DAYS)
            });
        Self {
            max_mappings,
            cleanup_threshold: config.cleanup_threshold.clamp(1, max_mappings),
            recency_window,
        }
    }
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self::from(&CacheConfig::default())
    }
}

/// What an upsert did to the addressed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Merged,
    /// The candidate was not stored (empty or invalid).
    Rejected,
}

/// Result of one upsert, including anything the eviction pass dropped.
#[derive(Debug)]
pub struct UpsertResult {
    pub outcome: UpsertOutcome,
    pub evicted: Vec<TranslationMapping>,
}

impl UpsertResult {
    /// Whether the number of stored mappings changed.
    pub fn size_changed(&self) -> bool {
        self.outcome == UpsertOutcome::Inserted || !self.evicted.is_empty()
    }
}

/// Sole owner of every learned [`TranslationMapping`].
#[derive(Debug, Default)]
pub struct LearnedMappingStore {
    entries: HashMap<MappingKey, TranslationMapping>,
    /// Lowercased original → stored original, per type.
    folded: HashMap<(EntityType, String), String>,
    limits: StoreLimits,
}

impl LearnedMappingStore {
    pub fn new(limits: StoreLimits) -> Self {
        Self {
            entries: HashMap::new(),
            folded: HashMap::new(),
            limits,
        }
    }

    /// Rebuild a store from a persisted snapshot.
    ///
    /// Duplicate keys merge; the result is trimmed to the configured caps.
    pub fn from_snapshot(
        limits: StoreLimits,
        snapshot: Vec<TranslationMapping>,
        now: DateTime<Utc>,
    ) -> (Self, Vec<TranslationMapping>) {
        let mut store = Self::new(limits);
        for mapping in snapshot {
            if mapping.validate().is_err() {
                continue;
            }
            let key = mapping.key();
            match store.entries.get_mut(&key) {
                Some(existing) => {
                    let stamp = existing.last_used.max(mapping.last_used);
                    merge_into(existing, mapping, stamp);
                }
                None => store.insert(mapping),
            }
        }
        let evicted = store.evict_if_needed(now);
        (store, evicted)
    }

    pub fn limits(&self) -> &StoreLimits {
        &self.limits
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, original: &str, entity_type: EntityType) -> Option<&TranslationMapping> {
        self.entries.get(&MappingKey::new(entity_type, original))
    }

    /// Exact lookup, then case-insensitive.
    pub fn get_ignore_case(
        &self,
        original: &str,
        entity_type: EntityType,
    ) -> Option<&TranslationMapping> {
        if let Some(found) = self.get(original, entity_type) {
            return Some(found);
        }
        let stored = self.folded.get(&(entity_type, original.to_lowercase()))?;
        self.get(stored, entity_type)
    }

    /// Merge `incoming` into the store, then evict if the hard cap was crossed.
    ///
    /// Existing translations are only replaced where they are still echo
    /// placeholders; frequency grows by the incoming frequency and confidence
    /// keeps the higher of the two.
    pub fn upsert(&mut self, incoming: TranslationMapping, now: DateTime<Utc>) -> UpsertResult {
        let key = incoming.key();
        let outcome = match self.entries.get_mut(&key) {
            Some(existing) => {
                merge_into(existing, incoming, now);
                UpsertOutcome::Merged
            }
            None => {
                if let Err(reason) = incoming.validate() {
                    debug!(key = %key, reason = %reason, "rejected mapping");
                    UpsertOutcome::Rejected
                } else {
                    self.insert(incoming);
                    UpsertOutcome::Inserted
                }
            }
        };

        let evicted = if outcome == UpsertOutcome::Inserted {
            self.evict_if_needed(now)
        } else {
            Vec::new()
        };
        UpsertResult { outcome, evicted }
    }

    /// Bump frequency and recency after the resolver served this mapping.
    pub fn record_use(&mut self, key: &MappingKey, now: DateTime<Utc>) -> bool {
        match self.entries.get_mut(key) {
            Some(mapping) => {
                mapping.frequency = mapping.frequency.saturating_add(1);
                mapping.last_used = now;
                true
            }
            None => false,
        }
    }

    /// Every mapping, ordered by key.
    pub fn snapshot(&self) -> Vec<TranslationMapping> {
        let mut all: Vec<TranslationMapping> = self.entries.values().cloned().collect();
        all.sort_by(|a, b| a.key().cmp(&b.key()));
        all
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslationMapping> {
        self.entries.values()
    }

    /// Mapping counts per entity type (every type present, zero included).
    pub fn counts_by_type(&self) -> BTreeMap<EntityType, usize> {
        let mut counts: BTreeMap<EntityType, usize> =
            EntityType::ALL.into_iter().map(|t| (t, 0)).collect();
        for key in self.entries.keys() {
            *counts.entry(key.entity_type).or_insert(0) += 1;
        }
        counts
    }

    fn insert(&mut self, mut mapping: TranslationMapping) {
        mapping.confidence = mapping.confidence.clamp(0.0, 1.0);
        self.folded
            .entry((mapping.entity_type, mapping.original.to_lowercase()))
            .or_insert_with(|| mapping.original.clone());
        self.entries.insert(mapping.key(), mapping);
    }

    /// Drop the lowest-value mappings once the hard cap is crossed.
    ///
    /// The pass trims down to `cleanup_threshold`, ranked by [`score`], so
    /// the next one only runs after the store has grown back past
    /// `max_mappings`.
    fn evict_if_needed(&mut self, now: DateTime<Utc>) -> Vec<TranslationMapping> {
        if self.entries.len() <= self.limits.max_mappings {
            return Vec::new();
        }

        let doomed = eviction::select_victims(
            self.entries.values(),
            self.limits.cleanup_threshold.min(self.limits.max_mappings),
            now,
            self.limits.recency_window,
        );
        if doomed.is_empty() {
            return Vec::new();
        }

        let evicted: Vec<TranslationMapping> = doomed
            .iter()
            .filter_map(|key| self.entries.remove(key))
            .collect();
        self.rebuild_folded();

        info!(
            evicted = evicted.len(),
            remaining = self.entries.len(),
            "evicted learned mappings"
        );
        evicted
    }

    fn rebuild_folded(&mut self) {
        self.folded.clear();
        let mut keys: Vec<&MappingKey> = self.entries.keys().collect();
        keys.sort();
        for key in keys {
            self.folded
                .entry((key.entity_type, key.original.to_lowercase()))
                .or_insert_with(|| key.original.clone());
        }
    }
}

/// Apply the merge rule to an existing mapping.
fn merge_into(existing: &mut TranslationMapping, incoming: TranslationMapping, now: DateTime<Utc>) {
    for (lang, value) in incoming.translations {
        if value.trim().is_empty() {
            continue;
        }
        match existing.translations.get(&lang) {
            None => {
                existing.translations.insert(lang, value);
            }
            Some(current) if current == &existing.original && value != existing.original => {
                existing.translations.insert(lang, value);
            }
            Some(_) => {}
        }
    }
    existing.frequency = existing.frequency.saturating_add(incoming.frequency.max(1));
    existing.last_used = now;
    if incoming.confidence.is_finite() {
        existing.confidence = existing.confidence.max(incoming.confidence.clamp(0.0, 1.0));
    }
}

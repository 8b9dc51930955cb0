//! Tiered lookup: memo → static tables → learned mappings → heuristics.

use crate::memo::{EphemeralMemo, MemoKey};
use crate::queue::LearningQueue;
use scoreline_core::{
    clock::Clock,
    fixture::{EncounterContext, EncounterRecord},
    traits::LearningEvents,
    EntityType, LanguageCode,
};
use scoreline_i18n::{heuristics, StaticDictionary};
use scoreline_memory::LearnedMappingStore;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::trace;

/// Learned key for a league seen in a country context.
pub fn qualified_league(name: &str, country: &str) -> String {
    format!("{name} ({country})")
}

/// Real `lang` name of a country: static table first, learned mapping second.
pub(crate) fn country_name(
    dictionary: &StaticDictionary,
    store: &LearnedMappingStore,
    country: &str,
    lang: LanguageCode,
) -> Option<String> {
    if let Some(found) = dictionary.lookup(country, lang, EntityType::Country) {
        return Some(found.to_string());
    }
    store
        .get_ignore_case(country.trim(), EntityType::Country)
        .and_then(|m| m.real_translation(lang))
        .map(str::to_string)
}

/// Hit counters per resolution tier.
#[derive(Debug, Default)]
struct TierCounters {
    memo: AtomicU64,
    dictionary: AtomicU64,
    learned: AtomicU64,
    heuristic: AtomicU64,
    miss: AtomicU64,
}

/// Point-in-time copy of the tier counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolverStats {
    pub memo_hits: u64,
    pub static_hits: u64,
    pub learned_hits: u64,
    pub heuristic_hits: u64,
    pub misses: u64,
}

/// Serves display strings. Never fails: a miss returns the input name.
pub struct TranslationResolver {
    dictionary: StaticDictionary,
    store: Arc<Mutex<LearnedMappingStore>>,
    memo: Mutex<EphemeralMemo>,
    queue: Arc<LearningQueue>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn LearningEvents>,
    learning_enabled: bool,
    counters: TierCounters,
}

impl TranslationResolver {
    pub fn new(
        store: Arc<Mutex<LearnedMappingStore>>,
        memo: EphemeralMemo,
        queue: Arc<LearningQueue>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn LearningEvents>,
        learning_enabled: bool,
    ) -> Self {
        Self {
            dictionary: StaticDictionary::new(),
            store,
            memo: Mutex::new(memo),
            queue,
            clock,
            events,
            learning_enabled,
            counters: TierCounters::default(),
        }
    }

    fn memo(&self) -> MutexGuard<'_, EphemeralMemo> {
        self.memo.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn store(&self) -> MutexGuard<'_, LearnedMappingStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Translate without context.
    pub fn translate(&self, name: &str, lang: LanguageCode, entity_type: EntityType) -> String {
        self.translate_in(name, lang, entity_type, &EncounterContext::default())
    }

    /// Translate an entity seen in `context`.
    pub fn translate_in(
        &self,
        name: &str,
        lang: LanguageCode,
        entity_type: EntityType,
        context: &EncounterContext,
    ) -> String {
        if lang.is_source() || name.trim().is_empty() {
            return name.to_string();
        }
        let country = match entity_type {
            EntityType::League => context
                .country
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty()),
            _ => None,
        };

        let now = self.clock.now();
        let key = MemoKey::new(name, lang, entity_type, country);
        if let Some(hit) = self.memo().get(&key, now) {
            self.counters.memo.fetch_add(1, Ordering::Relaxed);
            return hit.to_string();
        }

        if let Some(hit) = self.dictionary.lookup_in(name, lang, entity_type, country) {
            self.counters.dictionary.fetch_add(1, Ordering::Relaxed);
            return self.remember(key, hit.to_string(), now);
        }

        let resolved = {
            let mut store = self.store();
            let qualified = country.map(|c| qualified_league(name, c));
            let primary = qualified.as_deref().unwrap_or(name);
            match self.learned(&mut store, primary, lang, entity_type, now) {
                Some(hit) => Some((hit, &self.counters.learned)),
                None => {
                    let derived = heuristics::derive(name, lang, entity_type, country, &|c: &str| {
                        country_name(&self.dictionary, &store, c, lang)
                    })
                    .map(|candidate| candidate.text);
                    match derived {
                        Some(text) => Some((text, &self.counters.heuristic)),
                        // A bare league mapping knows no country; it only
                        // backs up the context-aware heuristics.
                        None if qualified.is_some() => self
                            .learned(&mut store, name, lang, entity_type, now)
                            .map(|hit| (hit, &self.counters.learned)),
                        None => None,
                    }
                }
            }
        };
        if let Some((hit, counter)) = resolved {
            counter.fetch_add(1, Ordering::Relaxed);
            return self.remember(key, hit, now);
        }

        self.counters.miss.fetch_add(1, Ordering::Relaxed);
        let record = EncounterRecord::new(name.trim(), entity_type).with_context(context.clone());
        trace!(name, lang = %lang, entity_type = %entity_type, "no translation");
        self.events.on_miss(&record);
        if self.learning_enabled {
            self.queue.enqueue(record);
        }
        name.to_string()
    }

    /// Learned tier. Echo placeholders are not hits; a hit counts as a use.
    fn learned(
        &self,
        store: &mut LearnedMappingStore,
        original: &str,
        lang: LanguageCode,
        entity_type: EntityType,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Option<String> {
        let mapping = store.get_ignore_case(original, entity_type)?;
        let value = mapping.real_translation(lang)?.to_string();
        let key = mapping.key();
        store.record_use(&key, now);
        Some(value)
    }

    fn remember(&self, key: MemoKey, value: String, now: chrono::DateTime<chrono::Utc>) -> String {
        self.memo().put(key, value.clone(), now);
        value
    }

    /// Start a new rendering pass.
    pub fn begin_pass(&self) {
        self.memo().clear();
    }

    pub fn stats(&self) -> ResolverStats {
        let c = &self.counters;
        ResolverStats {
            memo_hits: c.memo.load(Ordering::Relaxed),
            static_hits: c.dictionary.load(Ordering::Relaxed),
            learned_hits: c.learned.load(Ordering::Relaxed),
            heuristic_hits: c.heuristic.load(Ordering::Relaxed),
            misses: c.miss.load(Ordering::Relaxed),
        }
    }
}

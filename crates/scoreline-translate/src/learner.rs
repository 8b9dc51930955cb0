//! Background learner: drains the queue and commits derived mappings.

use crate::queue::{LearningQueue, QueuedRecord};
use crate::resolver::{country_name, qualified_league};
use chrono::{DateTime, Utc};
use scoreline_core::{
    clock::Clock, error::ScorelineError, traits::LearningEvents, EntityType, LanguageCode,
    TranslationMapping,
};
use scoreline_i18n::{heuristics, StaticDictionary};
use scoreline_memory::{LearnedMappingStore, PersistenceAdapter, UpsertOutcome};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Learner lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LearnerState {
    Idle,
    Draining,
}

/// Summary of one drain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DrainReport {
    /// Records taken off the queue.
    pub taken: usize,
    /// Records committed to the store (inserted or merged).
    pub learned: usize,
    /// Records already translated, or with nothing useful to learn.
    pub skipped: usize,
    /// Records that could not be processed at all.
    pub malformed: usize,
    /// Mappings dropped by eviction during this drain.
    pub evicted: usize,
    /// Queue length after the drain.
    pub remaining: usize,
}

enum Learned {
    Skipped,
    Committed {
        mapping: TranslationMapping,
        evicted: Vec<TranslationMapping>,
    },
}

/// Resets the draining flag however the drain ends.
struct DrainGuard<'a>(&'a AtomicBool);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct BatchLearner {
    dictionary: StaticDictionary,
    store: Arc<Mutex<LearnedMappingStore>>,
    queue: Arc<LearningQueue>,
    persistence: Option<PersistenceAdapter>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn LearningEvents>,
    batch_size: usize,
    interval: Duration,
    draining: AtomicBool,
}

impl BatchLearner {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<Mutex<LearnedMappingStore>>,
        queue: Arc<LearningQueue>,
        persistence: Option<PersistenceAdapter>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn LearningEvents>,
        batch_size: usize,
        interval: Duration,
    ) -> Self {
        Self {
            dictionary: StaticDictionary::new(),
            store,
            queue,
            persistence,
            clock,
            events,
            batch_size: batch_size.max(1),
            interval,
            draining: AtomicBool::new(false),
        }
    }

    fn store(&self) -> MutexGuard<'_, LearnedMappingStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> LearnerState {
        if self.draining.load(Ordering::Acquire) {
            LearnerState::Draining
        } else {
            LearnerState::Idle
        }
    }

    /// Process up to one batch.
    ///
    /// Returns `None` without touching the queue if another drain is
    /// already running.
    pub async fn drain_once(&self) -> Option<DrainReport> {
        if self
            .draining
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("drain already in progress, ignoring trigger");
            return None;
        }
        let _guard = DrainGuard(&self.draining);

        let batch = self.queue.take_batch(self.batch_size);
        let mut report = DrainReport {
            taken: batch.len(),
            ..DrainReport::default()
        };
        if batch.is_empty() {
            return Some(report);
        }

        let now = self.clock.now();
        let mut learned = Vec::new();
        let mut evicted = Vec::new();
        {
            let mut store = self.store();
            for queued in batch {
                let name = queued.record.name.clone();
                match self.learn_one(&mut store, queued, now) {
                    Ok(Learned::Skipped) => report.skipped += 1,
                    Ok(Learned::Committed {
                        mapping,
                        evicted: dropped,
                    }) => {
                        report.learned += 1;
                        learned.push(mapping);
                        evicted.extend(dropped);
                    }
                    Err(e) => {
                        debug!(name = %name, "skipping record: {e}");
                        report.malformed += 1;
                    }
                }
            }
        }
        report.evicted = evicted.len();

        for mapping in &learned {
            self.events.on_learned(mapping);
        }
        if !evicted.is_empty() {
            let keys: Vec<_> = evicted.iter().map(TranslationMapping::key).collect();
            self.events.on_evicted(&keys);
        }
        if report.learned > 0 || report.evicted > 0 {
            self.flush().await;
        }

        report.remaining = self.queue.len();
        info!(
            taken = report.taken,
            learned = report.learned,
            skipped = report.skipped,
            malformed = report.malformed,
            evicted = report.evicted,
            remaining = report.remaining,
            "learning drain complete"
        );
        Some(report)
    }

    /// Drain until the queue is empty or another drain holds the learner.
    pub async fn drain_until_empty(&self) -> Vec<DrainReport> {
        let mut reports = Vec::new();
        while !self.queue.is_empty() {
            match self.drain_once().await {
                Some(report) => reports.push(report),
                None => break,
            }
        }
        reports
    }

    /// Derive and commit a mapping for one queued record.
    fn learn_one(
        &self,
        store: &mut LearnedMappingStore,
        queued: QueuedRecord,
        now: DateTime<Utc>,
    ) -> Result<Learned, ScorelineError> {
        let record = queued.record;
        let name = record.name.trim();
        if name.is_empty() || name.chars().any(char::is_control) {
            return Err(ScorelineError::MalformedRecord(format!(
                "unusable {} name {:?}",
                record.entity_type, record.name
            )));
        }
        let entity_type = record.entity_type;
        let country = match entity_type {
            EntityType::League => record
                .context
                .country
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty()),
            _ => None,
        };

        if self.dictionary.contains(name, entity_type, country) {
            return Ok(Learned::Skipped);
        }

        // Leagues seen with a country are learned per country.
        let original = match country {
            Some(c) => qualified_league(name, c),
            None => name.to_string(),
        };
        if store
            .get(&original, entity_type)
            .is_some_and(TranslationMapping::is_complete)
        {
            return Ok(Learned::Skipped);
        }

        let mut candidate = TranslationMapping::new(original.clone(), entity_type, now);
        candidate.frequency = queued.observations.max(1);
        let mut best: Option<f32> = None;
        for lang in LanguageCode::targets() {
            let derived = heuristics::derive(name, lang, entity_type, country, &|c: &str| {
                country_name(&self.dictionary, &*store, c, lang)
            });
            if let Some(found) = derived {
                best = Some(best.map_or(found.confidence, |b| b.max(found.confidence)));
                candidate.translations.insert(lang, found.text);
            }
        }
        let Some(confidence) = best else {
            debug!(name, entity_type = %entity_type, "no heuristic translation");
            return Ok(Learned::Skipped);
        };

        for lang in LanguageCode::targets() {
            candidate
                .translations
                .entry(lang)
                .or_insert_with(|| original.clone());
        }
        candidate.confidence = confidence;

        let result = store.upsert(candidate.clone(), now);
        if result.outcome == UpsertOutcome::Rejected {
            return Ok(Learned::Skipped);
        }
        // Absent only if its own insert evicted it.
        let mapping = store.get(&original, entity_type).cloned().unwrap_or(candidate);
        Ok(Learned::Committed {
            mapping,
            evicted: result.evicted,
        })
    }

    /// Persist the current snapshot. No-op without persistence.
    pub async fn flush(&self) -> bool {
        let Some(persistence) = &self.persistence else {
            return true;
        };
        let snapshot = self.store().snapshot();
        persistence.save(&snapshot).await
    }

    /// Timer- and high-water-driven drain loop.
    ///
    /// Runs until `shutdown` flips to `true` (or its sender is dropped), then
    /// drains what is left and flushes.
    pub async fn run(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_secs = self.interval.as_secs(),
            batch_size = self.batch_size,
            "learner started"
        );
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !self.queue.is_empty() {
                        self.drain_once().await;
                    }
                }
                _ = self.queue.high_water() => {
                    self.drain_once().await;
                    while self.queue.above_high_water() {
                        if self.drain_once().await.is_none() {
                            break;
                        }
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        let reports = self.drain_until_empty().await;
        if !self.flush().await {
            warn!("final flush of learned mappings failed");
        }
        info!(final_drains = reports.len(), "learner stopped");
    }
}

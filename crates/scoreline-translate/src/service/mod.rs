//! The translation service: one explicitly constructed object owning the
//! store, resolver, queue and learner.


use crate::events::TracingEvents;
use crate::export::{self, ImportReport, MappingExport};
use crate::learner::{BatchLearner, DrainReport, LearnerState};
use crate::memo::EphemeralMemo;
use crate::queue::{EnqueueOutcome, LearningQueue};
use crate::resolver::{ResolverStats, TranslationResolver};
use scoreline_core::{
    clock::{Clock, SystemClock},
    config::{Config, LearningConfig, StorageConfig},
    error::ScorelineError,
    fixture::{EncounterContext, EncounterRecord, FixtureRecord},
    traits::LearningEvents,
    EntityType, LanguageCode, TranslationMapping,
};
use scoreline_memory::{
    open_backend, LearnedMappingStore, PersistenceAdapter, StoreLimits, UpsertOutcome,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Counters for the `stats` command and debug overlays.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStats {
    pub total_mappings: usize,
    pub by_type: BTreeMap<EntityType, usize>,
    pub queue_len: usize,
    pub queue_dropped: u64,
    pub learner: LearnerState,
    pub resolver: ResolverStats,
    /// Backend name, or `None` when running memory-only.
    pub persistence: Option<String>,
}

pub struct TranslationService {
    resolver: TranslationResolver,
    learner: Arc<BatchLearner>,
    store: Arc<Mutex<LearnedMappingStore>>,
    queue: Arc<LearningQueue>,
    persistence: Option<PersistenceAdapter>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn LearningEvents>,
    learning: LearningConfig,
    shutdown: watch::Sender<bool>,
    learner_task: Mutex<Option<JoinHandle<()>>>,
}

impl TranslationService {
    /// Open the configured backend and build a service on the system clock.
    ///
    /// A backend that cannot be opened leaves the service memory-only.
    pub async fn from_config(config: &Config) -> Self {
        let storage = StorageConfig {
            db_path: config.scoreline.resolve(&config.storage.db_path),
            ..config.storage.clone()
        };
        let persistence = match open_backend(&storage).await {
            Ok(backend) => Some(PersistenceAdapter::new(backend, &config.storage.key_prefix)),
            Err(e) => {
                warn!("translation storage unavailable, running memory-only: {e}");
                None
            }
        };
        Self::open(
            config,
            persistence,
            Arc::new(SystemClock),
            Arc::new(TracingEvents),
        )
        .await
    }

    /// Build a service, restoring any snapshot `persistence` holds.
    pub async fn open(
        config: &Config,
        persistence: Option<PersistenceAdapter>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn LearningEvents>,
    ) -> Self {
        let snapshot = match &persistence {
            Some(p) => p.load().await.unwrap_or_default(),
            None => Vec::new(),
        };
        let loaded = snapshot.len();
        let (store, evicted) =
            LearnedMappingStore::from_snapshot(StoreLimits::from(&config.cache), snapshot, clock.now());
        info!(
            loaded,
            kept = store.size(),
            backend = ?persistence.as_ref().map(PersistenceAdapter::backend_name),
            "translation cache ready"
        );

        let store = Arc::new(Mutex::new(store));
        let queue = Arc::new(LearningQueue::from(&config.learning));
        let resolver = TranslationResolver::new(
            store.clone(),
            EphemeralMemo::from(&config.memo),
            queue.clone(),
            clock.clone(),
            events.clone(),
            config.learning.enabled,
        );
        let learner = Arc::new(BatchLearner::new(
            store.clone(),
            queue.clone(),
            persistence.clone(),
            clock.clone(),
            events.clone(),
            config.learning.batch_size,
            Duration::from_secs(config.learning.interval_secs),
        ));
        let (shutdown, _) = watch::channel(false);

        let service = Self {
            resolver,
            learner,
            store,
            queue,
            persistence,
            clock,
            events,
            learning: config.learning.clone(),
            shutdown,
            learner_task: Mutex::new(None),
        };
        if !evicted.is_empty() {
            let keys: Vec<_> = evicted.iter().map(TranslationMapping::key).collect();
            service.events.on_evicted(&keys);
            service.flush().await;
        }
        service
    }

    fn store(&self) -> MutexGuard<'_, LearnedMappingStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    // --- Display layer ---

    pub fn translate(&self, name: &str, lang: LanguageCode, entity_type: EntityType) -> String {
        self.resolver.translate(name, lang, entity_type)
    }

    pub fn translate_in(
        &self,
        name: &str,
        lang: LanguageCode,
        entity_type: EntityType,
        context: &EncounterContext,
    ) -> String {
        self.resolver.translate_in(name, lang, entity_type, context)
    }

    /// Start a new rendering pass.
    pub fn begin_pass(&self) {
        self.resolver.begin_pass();
    }

    // --- Learning intake ---

    /// Queue every entity a fixture mentions. Returns how many were accepted.
    pub fn observe_fixture(&self, fixture: &FixtureRecord) -> usize {
        if !self.learning.enabled {
            return 0;
        }
        match fixture.encounters() {
            Ok(records) => records
                .into_iter()
                .filter(|r| self.queue.enqueue(r.clone()) != EnqueueOutcome::Dropped)
                .count(),
            Err(e) => {
                debug!("skipping fixture: {e}");
                0
            }
        }
    }

    pub fn enqueue(&self, record: EncounterRecord) -> EnqueueOutcome {
        self.queue.enqueue(record)
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub async fn drain_once(&self) -> Option<DrainReport> {
        self.learner.drain_once().await
    }

    pub async fn drain_until_empty(&self) -> Vec<DrainReport> {
        self.learner.drain_until_empty().await
    }

    // --- Store access ---

    /// Merge a mapping into the store, persisting if the store grew or shrank.
    pub async fn upsert(&self, mapping: TranslationMapping) -> UpsertOutcome {
        let now = self.clock.now();
        let (result, merged) = {
            let mut store = self.store();
            let key = mapping.key();
            let result = store.upsert(mapping, now);
            let merged = store.get(&key.original, key.entity_type).cloned();
            (result, merged)
        };
        if result.outcome != UpsertOutcome::Rejected {
            self.resolver.begin_pass();
            if let Some(mapping) = &merged {
                self.events.on_learned(mapping);
            }
        }
        if !result.evicted.is_empty() {
            let keys: Vec<_> = result.evicted.iter().map(TranslationMapping::key).collect();
            self.events.on_evicted(&keys);
        }
        if result.size_changed() {
            self.flush().await;
        }
        result.outcome
    }

    pub fn get(&self, original: &str, entity_type: EntityType) -> Option<TranslationMapping> {
        self.store().get(original, entity_type).cloned()
    }

    pub fn size(&self) -> usize {
        self.store().size()
    }

    // --- Export / import ---

    pub fn export_all_mappings(&self) -> MappingExport {
        let store = self.store();
        let mappings = store.snapshot();
        MappingExport {
            exported_at: self.clock.now(),
            total_mappings: mappings.len(),
            by_type: store.counts_by_type(),
            mappings,
        }
    }

    /// Merge an external snapshot with the usual upsert rule.
    ///
    /// Unusable entries are counted and skipped; only a blob that is not a
    /// snapshot at all is an error.
    pub async fn import_mappings(&self, blob: &str) -> Result<ImportReport, ScorelineError> {
        let entries = export::entries(blob)?;
        let now = self.clock.now();
        let mut report = ImportReport {
            received: entries.len(),
            ..ImportReport::default()
        };
        let mut touched = Vec::new();
        let mut evicted = Vec::new();
        {
            let mut store = self.store();
            for entry in entries {
                let Some(mapping) = export::parse_entry(entry) else {
                    report.corrupt += 1;
                    continue;
                };
                let key = mapping.key();
                let result = store.upsert(mapping, now);
                match result.outcome {
                    UpsertOutcome::Inserted => report.inserted += 1,
                    UpsertOutcome::Merged => report.merged += 1,
                    UpsertOutcome::Rejected => report.corrupt += 1,
                }
                touched.push(key);
                evicted.extend(result.evicted);
            }
        }
        report.evicted = evicted.len();

        let learned: Vec<TranslationMapping> = touched
            .iter()
            .filter_map(|key| self.get(&key.original, key.entity_type))
            .collect();
        for mapping in &learned {
            self.events.on_learned(mapping);
        }
        if !evicted.is_empty() {
            let keys: Vec<_> = evicted.iter().map(TranslationMapping::key).collect();
            self.events.on_evicted(&keys);
        }
        if report.inserted + report.merged > 0 {
            self.resolver.begin_pass();
            self.flush().await;
        }
        info!(
            received = report.received,
            inserted = report.inserted,
            merged = report.merged,
            corrupt = report.corrupt,
            evicted = report.evicted,
            "imported mappings"
        );
        Ok(report)
    }

    // --- Lifecycle ---

    pub fn stats(&self) -> ServiceStats {
        let store = self.store();
        ServiceStats {
            total_mappings: store.size(),
            by_type: store.counts_by_type(),
            queue_len: self.queue.len(),
            queue_dropped: self.queue.dropped(),
            learner: self.learner.state(),
            resolver: self.resolver.stats(),
            persistence: self
                .persistence
                .as_ref()
                .map(|p| p.backend_name().to_string()),
        }
    }

    /// Persist the current snapshot. `true` when there is nothing to persist to.
    pub async fn flush(&self) -> bool {
        self.learner.flush().await
    }

    /// Start the background learner. Returns `false` if learning is disabled
    /// or the learner is already running.
    pub fn spawn_learner(&self) -> bool {
        if !self.learning.enabled {
            return false;
        }
        let mut task = self.learner_task.lock().unwrap_or_else(|e| e.into_inner());
        if task.is_some() {
            return false;
        }
        let learner = self.learner.clone();
        let shutdown = self.shutdown.subscribe();
        *task = Some(tokio::spawn(async move {
            learner.run(shutdown).await;
        }));
        true
    }

    /// Stop the learner (after its final drain) and flush.
    pub async fn shutdown(&self) {
        self.shutdown.send_replace(true);
        let task = self
            .learner_task
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        match task {
            Some(handle) => {
                if let Err(e) = handle.await {
                    warn!("learner task ended abnormally: {e}");
                    self.flush().await;
                }
            }
            None => {
                if !self.flush().await {
                    warn!("final flush of learned mappings failed");
                }
            }
        }
        info!(mappings = self.size(), "translation service stopped");
    }
}

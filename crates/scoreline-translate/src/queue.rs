//! Intake buffer between the resolver (and fixture feeds) and the learner.

use scoreline_core::{config::LearningConfig, fixture::EncounterRecord};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use tokio::sync::Notify;
use tracing::{debug, warn};

/// What happened to an enqueued record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    /// New natural key, appended to the queue.
    Queued,
    /// Already pending; its observation count went up.
    Coalesced,
    /// The queue was full.
    Dropped,
}

/// A record taken off the queue, with how often it was seen while waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedRecord {
    pub record: EncounterRecord,
    pub observations: u64,
}

#[derive(Debug, Default)]
struct QueueState {
    order: VecDeque<String>,
    pending: HashMap<String, QueuedRecord>,
}

/// FIFO of distinct encounter records, deduplicated by natural key.
#[derive(Debug)]
pub struct LearningQueue {
    state: Mutex<QueueState>,
    capacity: usize,
    high_water_mark: usize,
    high_water: Notify,
    dropped: AtomicU64,
}

impl LearningQueue {
    pub fn new(capacity: usize, high_water_mark: usize) -> Self {
        Self {
            state: Mutex::new(QueueState::default()),
            capacity,
            high_water_mark,
            high_water: Notify::new(),
            dropped: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add a record unless its natural key is already pending.
    ///
    /// Never blocks on the learner. Crossing the high-water mark wakes it.
    pub fn enqueue(&self, record: EncounterRecord) -> EnqueueOutcome {
        let key = record.natural_key();
        let len = {
            let mut state = self.lock();
            if let Some(pending) = state.pending.get_mut(&key) {
                pending.observations = pending.observations.saturating_add(1);
                return EnqueueOutcome::Coalesced;
            }
            if state.order.len() >= self.capacity {
                drop(state);
                let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                // First drop and every thousandth after it.
                if dropped % 1000 == 1 {
                    warn!(capacity = self.capacity, dropped, "learning queue full, dropping records");
                }
                return EnqueueOutcome::Dropped;
            }
            state.order.push_back(key.clone());
            state.pending.insert(
                key,
                QueuedRecord {
                    record,
                    observations: 1,
                },
            );
            state.order.len()
        };

        if len >= self.high_water_mark {
            debug!(len, "learning queue above high-water mark");
            self.high_water.notify_one();
        }
        EnqueueOutcome::Queued
    }

    /// Atomically remove up to `n` records from the front.
    pub fn take_batch(&self, n: usize) -> Vec<QueuedRecord> {
        let mut state = self.lock();
        let take = n.min(state.order.len());
        let keys: Vec<String> = state.order.drain(..take).collect();
        keys.into_iter()
            .filter_map(|key| state.pending.remove(&key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn above_high_water(&self) -> bool {
        self.len() >= self.high_water_mark
    }

    /// Records refused because the queue was full, since startup.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Resolves once the queue has crossed its high-water mark.
    pub async fn high_water(&self) {
        self.high_water.notified().await;
    }
}

impl From<&LearningConfig> for LearningQueue {
    fn from(config: &LearningConfig) -> Self {
        Self::new(config.queue_capacity, config.high_water_mark)
    }
}

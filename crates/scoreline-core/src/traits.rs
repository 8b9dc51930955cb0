use crate::{
    error::ScorelineError,
    fixture::{EncounterRecord, FixtureRecord},
    mapping::{MappingKey, TranslationMapping},
};
use async_trait::async_trait;

/// Durable string-keyed storage (a SQLite file, or a plain map in tests) that
/// the learned cache lives in.
///
/// Values are opaque strings; the persistence layer owns their format.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    async fn get(&self, key: &str) -> Result<Option<String>, ScorelineError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), ScorelineError>;

    /// Remove a key. Returns `true` if something was removed.
    async fn remove(&self, key: &str) -> Result<bool, ScorelineError>;

    /// Every key currently stored, in unspecified order.
    async fn keys(&self) -> Result<Vec<String>, ScorelineError>;

    /// Write many entries at once. Backends with transactions override this.
    async fn set_many(&self, entries: &[(String, String)]) -> Result<(), ScorelineError> {
        for (key, value) in entries {
            self.set(key, value).await?;
        }
        Ok(())
    }
}

/// Upstream source of fixture records.
///
/// The sequence is unbounded; calling `start` again restarts it.
#[async_trait]
pub trait FixtureFeed: Send + Sync {
    /// Human-readable feed name.
    fn name(&self) -> &str;

    /// Start producing records. The receiver closes when the feed ends.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<FixtureRecord>, ScorelineError>;
}

/// Subscriber for learning-cache events, in place of console logging.
///
/// All methods default to no-ops; hosts override what they care about.
/// Callbacks run inline on the caller's thread and must not block.
pub trait LearningEvents: Send + Sync {
    /// A mapping was created or merged by a learning pass or import.
    fn on_learned(&self, _mapping: &TranslationMapping) {}

    /// Mappings dropped by an eviction pass.
    fn on_evicted(&self, _evicted: &[MappingKey]) {}

    /// A translate call fell through every tier.
    fn on_miss(&self, _record: &EncounterRecord) {}
}

//! Snapshot persistence over a [`KeyValueStore`].
//!
//! Each mapping lives under its own key, `<prefix>:<type>:<original>`, with a
//! JSON body. One bad key therefore never takes the others down: load drops
//! whatever it cannot read and keeps going. Writes are best-effort; the
//! in-memory store stays authoritative whatever the backend does.

use scoreline_core::{
    error::ScorelineError, mapping::MappingKey, traits::KeyValueStore, EntityType,
    TranslationMapping,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Values some storage layers write in place of a missing entry.
const SENTINEL_VALUES: [&str; 2] = ["undefined", "null"];

/// Serializes and restores learned-mapping snapshots.
#[derive(Clone)]
pub struct PersistenceAdapter {
    backend: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl PersistenceAdapter {
    pub fn new(backend: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Storage key for one mapping.
    pub fn entry_key(&self, key: &MappingKey) -> String {
        format!("{}:{}:{}", self.prefix, key.entity_type, key.original)
    }

    fn owns(&self, storage_key: &str) -> bool {
        storage_key
            .strip_prefix(self.prefix.as_str())
            .is_some_and(|rest| rest.starts_with(':'))
    }

    /// Decode one stored entry, checking it against the key it was stored under.
    fn parse_entry(&self, storage_key: &str, raw: &str) -> Result<TranslationMapping, ScorelineError> {
        let corrupt = |reason: String| ScorelineError::CorruptEntry {
            key: storage_key.to_string(),
            reason,
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() || SENTINEL_VALUES.contains(&trimmed) {
            return Err(corrupt(format!("sentinel value {trimmed:?}")));
        }

        let mapping: TranslationMapping =
            serde_json::from_str(trimmed).map_err(|e| corrupt(e.to_string()))?;
        mapping.validate().map_err(corrupt)?;

        // `<prefix>:<type>:<original>`; the original itself may contain ':'.
        let rest = &storage_key[self.prefix.len() + 1..];
        let (type_part, original_part) = rest
            .split_once(':')
            .ok_or_else(|| corrupt("key has no type segment".to_string()))?;
        let key_type: EntityType = type_part
            .parse()
            .map_err(|_| corrupt(format!("unknown type segment {type_part:?}")))?;
        if key_type != mapping.entity_type || original_part != mapping.original {
            return Err(corrupt("key does not match entry body".to_string()));
        }

        Ok(mapping)
    }

    /// Read every stored mapping.
    ///
    /// Returns `None` when nothing is stored or the backend cannot be read at
    /// all. Corrupt entries are dropped and removed from the backend.
    pub async fn load(&self) -> Option<Vec<TranslationMapping>> {
        let keys = match self.backend.keys().await {
            Ok(keys) => keys,
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "failed to enumerate stored mappings");
                return None;
            }
        };

        let keys: Vec<String> = keys.into_iter().filter(|k| self.owns(k)).collect();
        if keys.is_empty() {
            return None;
        }

        let mut loaded = Vec::with_capacity(keys.len());
        let mut corrupt_keys = Vec::new();
        for key in keys {
            let raw = match self.backend.get(&key).await {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(e) => {
                    debug!(key = %key, error = %e, "failed to read stored mapping");
                    continue;
                }
            };
            match self.parse_entry(&key, &raw) {
                Ok(mapping) => loaded.push(mapping),
                Err(e) => {
                    debug!("dropping stored mapping: {e}");
                    corrupt_keys.push(key);
                }
            }
        }

        if !corrupt_keys.is_empty() {
            warn!(
                dropped = corrupt_keys.len(),
                loaded = loaded.len(),
                "dropped corrupt persisted mappings"
            );
            for key in &corrupt_keys {
                let _ = self.backend.remove(key).await;
            }
        }

        info!(
            backend = self.backend.name(),
            count = loaded.len(),
            "loaded learned mappings"
        );
        Some(loaded)
    }

    /// Write `snapshot` and remove stored mappings that are no longer in it.
    ///
    /// Returns `false` if any part of the write failed. Failures are logged,
    /// never raised.
    pub async fn save(&self, snapshot: &[TranslationMapping]) -> bool {
        let mut entries = Vec::with_capacity(snapshot.len());
        for mapping in snapshot {
            match serde_json::to_string(mapping) {
                Ok(body) => entries.push((self.entry_key(&mapping.key()), body)),
                Err(e) => warn!(key = %mapping.key(), error = %e, "failed to serialize mapping"),
            }
        }

        if let Err(e) = self.backend.set_many(&entries).await {
            warn!(
                backend = self.backend.name(),
                count = entries.len(),
                error = %e,
                "failed to persist learned mappings"
            );
            return false;
        }

        let live: HashSet<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        let stale: Vec<String> = match self.backend.keys().await {
            Ok(keys) => keys
                .into_iter()
                .filter(|k| self.owns(k) && !live.contains(k.as_str()))
                .collect(),
            Err(e) => {
                warn!(error = %e, "failed to enumerate keys for stale cleanup");
                return false;
            }
        };

        let mut ok = true;
        for key in &stale {
            if let Err(e) = self.backend.remove(key).await {
                warn!(key = %key, error = %e, "failed to remove evicted mapping");
                ok = false;
            }
        }

        debug!(
            written = entries.len(),
            removed = stale.len(),
            "persisted learned mappings"
        );
        ok
    }
}

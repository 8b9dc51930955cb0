//! Two-factor eviction ranking: frequency, doubled for recently used mappings.

use chrono::{DateTime, Duration, Utc};
use scoreline_core::{mapping::MappingKey, TranslationMapping};
use std::cmp::Reverse;

/// Retention value of one mapping at `now`.
pub fn score(mapping: &TranslationMapping, now: DateTime<Utc>, recency_window: Duration) -> u64 {
    let boost = if now - mapping.last_used <= recency_window {
        2
    } else {
        1
    };
    mapping.frequency.saturating_mul(boost)
}

/// Keys that fall outside the best `keep` mappings.
///
/// Ties break on recency (newer wins), then on key for determinism.
pub(super) fn select_victims<'a>(
    mappings: impl Iterator<Item = &'a TranslationMapping>,
    keep: usize,
    now: DateTime<Utc>,
    recency_window: Duration,
) -> Vec<MappingKey> {
    let mut ranked: Vec<(u64, DateTime<Utc>, MappingKey)> = mappings
        .map(|m| (score(m, now, recency_window), m.last_used, m.key()))
        .collect();
    if ranked.len() <= keep {
        return Vec::new();
    }
    ranked.sort_by(|a, b| {
        Reverse(a.0)
            .cmp(&Reverse(b.0))
            .then_with(|| Reverse(a.1).cmp(&Reverse(b.1)))
            .then_with(|| a.2.cmp(&b.2))
    });
    ranked.into_iter().skip(keep).map(|(_, _, key)| key).collect()
}

//! Default [`LearningEvents`] subscriber: structured log lines.

use scoreline_core::{
    fixture::EncounterRecord,
    mapping::MappingKey,
    traits::LearningEvents,
    TranslationMapping,
};
use tracing::{debug, info};

/// Emits every learning event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEvents;

impl LearningEvents for TracingEvents {
    fn on_learned(&self, mapping: &TranslationMapping) {
        debug!(
            key = %mapping.key(),
            languages = mapping.real_translation_count(),
            frequency = mapping.frequency,
            confidence = mapping.confidence,
            "learned mapping"
        );
    }

    fn on_evicted(&self, evicted: &[MappingKey]) {
        if evicted.is_empty() {
            return;
        }
        let sample: Vec<String> = evicted.iter().take(5).map(ToString::to_string).collect();
        info!(count = evicted.len(), sample = ?sample, "evicted learned mappings");
    }

    fn on_miss(&self, record: &EncounterRecord) {
        debug!(
            name = %record.name,
            entity_type = %record.entity_type,
            country = ?record.context.country,
            "translation miss"
        );
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentEvents;

impl LearningEvents for SilentEvents {}

//! Debug export and external snapshot import.

use chrono::{DateTime, Utc};
use scoreline_core::{error::ScorelineError, EntityType, TranslationMapping};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Everything the store holds, with summary counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingExport {
    pub exported_at: DateTime<Utc>,
    pub total_mappings: usize,
    pub by_type: BTreeMap<EntityType, usize>,
    pub mappings: Vec<TranslationMapping>,
}

/// Outcome of [`crate::TranslationService::import_mappings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Entries found in the blob.
    pub received: usize,
    pub inserted: usize,
    pub merged: usize,
    /// Not a usable mapping (unparseable, or failing validation).
    pub corrupt: usize,
    pub evicted: usize,
}

/// Split an import blob into individual entries.
///
/// Accepts an export document (`{"mappings": [...]}`) or a bare array.
pub(crate) fn entries(blob: &str) -> Result<Vec<Value>, ScorelineError> {
    let doc: Value = serde_json::from_str(blob)
        .map_err(|e| ScorelineError::Import(format!("not valid JSON: {e}")))?;
    match doc {
        Value::Array(items) => Ok(items),
        Value::Object(mut fields) => match fields.remove("mappings") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(ScorelineError::Import(
                "expected a \"mappings\" array".to_string(),
            )),
        },
        _ => Err(ScorelineError::Import(
            "expected an export document or an array of mappings".to_string(),
        )),
    }
}

/// Decode one entry; `None` if it is not a usable mapping.
pub(crate) fn parse_entry(entry: Value) -> Option<TranslationMapping> {
    let mapping: TranslationMapping = serde_json::from_value(entry).ok()?;
    mapping.validate().is_ok().then_some(mapping)
}

//! Serde default functions for configuration fields.

pub(super) fn default_true() -> bool {
    true
}
pub(super) fn default_data_dir() -> String {
    "~/.scoreline".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_storage_backend() -> String {
    "sqlite".to_string()
}
pub(super) fn default_db_path() -> String {
    "~/.scoreline/data/translations.db".to_string()
}
pub(super) fn default_key_prefix() -> String {
    "translation".to_string()
}
pub(super) fn default_max_mappings() -> usize {
    5000
}
pub(super) fn default_cleanup_threshold() -> usize {
    4500
}
pub(super) fn default_recency_window_days() -> i64 {
    30
}
pub(super) fn default_learning_interval() -> u64 {
    30
}
pub(super) fn default_batch_size() -> usize {
    50
}
pub(super) fn default_high_water_mark() -> usize {
    200
}
pub(super) fn default_queue_capacity() -> usize {
    5000
}
pub(super) fn default_memo_entries() -> usize {
    2048
}
pub(super) fn default_memo_ttl() -> u64 {
    300
}

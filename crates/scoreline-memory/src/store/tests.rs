use super::*;
use scoreline_core::LanguageCode;

fn t0() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn limits(max: usize, threshold: usize) -> StoreLimits {
    StoreLimits {
        max_mappings: max,
        cleanup_threshold: threshold,
        recency_window: Duration::days(30),
    }
}

fn team(name: &str) -> TranslationMapping {
    TranslationMapping::new(name, EntityType::Team, t0())
        .with_translation(LanguageCode::ZhHk, format!("{name}隊"))
        .with_confidence(0.7)
}

#[test]
fn test_insert_and_get() {
    let mut store = LearnedMappingStore::new(limits(10, 10));
    let result = store.upsert(team("FC Porto"), t0());
    assert_eq!(result.outcome, UpsertOutcome::Inserted);
    assert!(result.size_changed());
    assert_eq!(store.size(), 1);
    assert!(store.get("FC Porto", EntityType::Team).is_some());
    assert!(store.get("FC Porto", EntityType::League).is_none());
    assert!(store.get("fc porto", EntityType::Team).is_none());
}

#[test]
fn test_case_insensitive_lookup() {
    let mut store = LearnedMappingStore::new(limits(10, 10));
    store.upsert(team("FC Porto"), t0());
    let found = store.get_ignore_case("fc PORTO", EntityType::Team).unwrap();
    assert_eq!(found.original, "FC Porto");
    assert!(store.get_ignore_case("fc porto", EntityType::Country).is_none());
}

#[test]
fn test_empty_translations_rejected() {
    let mut store = LearnedMappingStore::new(limits(10, 10));
    let empty = TranslationMapping::new("Nobody", EntityType::Team, t0());
    let result = store.upsert(empty, t0());
    assert_eq!(result.outcome, UpsertOutcome::Rejected);
    assert!(!result.size_changed());
    assert!(store.is_empty());
}

#[test]
fn test_merge_unions_and_bumps() {
    let mut store = LearnedMappingStore::new(limits(10, 10));
    store.upsert(team("FC Porto").with_confidence(0.5), t0());

    let later = t0() + Duration::hours(1);
    let update = TranslationMapping::new("FC Porto", EntityType::Team, later)
        .with_translation(LanguageCode::Ja, "FCポルト")
        .with_translation(LanguageCode::ZhHk, "something else")
        .with_confidence(0.9);
    let result = store.upsert(update, later);
    assert_eq!(result.outcome, UpsertOutcome::Merged);
    assert!(!result.size_changed());

    let m = store.get("FC Porto", EntityType::Team).unwrap();
    assert_eq!(m.frequency, 2);
    assert_eq!(m.last_used, later);
    assert_eq!(m.confidence, 0.9);
    assert_eq!(m.real_translation(LanguageCode::Ja), Some("FCポルト"));
    // Learned data is never overwritten.
    assert_eq!(m.real_translation(LanguageCode::ZhHk), Some("FC Porto隊"));
}

#[test]
fn test_merge_never_downgrades() {
    let mut store = LearnedMappingStore::new(limits(10, 10));
    store.upsert(team("Benfica"), t0());
    let echo = TranslationMapping::new("Benfica", EntityType::Team, t0())
        .with_translation(LanguageCode::ZhHk, "Benfica");
    store.upsert(echo, t0());
    let m = store.get("Benfica", EntityType::Team).unwrap();
    assert_eq!(m.real_translation(LanguageCode::ZhHk), Some("Benfica隊"));
    assert_eq!(m.confidence, 0.7);
}

#[test]
fn test_placeholder_is_upgraded() {
    let mut store = LearnedMappingStore::new(limits(10, 10));
    let seeded = TranslationMapping::new("Benfica", EntityType::Team, t0())
        .with_translation(LanguageCode::ZhHk, "賓菲加")
        .with_translation(LanguageCode::Ja, "Benfica");
    store.upsert(seeded, t0());
    let better = TranslationMapping::new("Benfica", EntityType::Team, t0())
        .with_translation(LanguageCode::Ja, "ベンフィカ");
    store.upsert(better, t0());
    let m = store.get("Benfica", EntityType::Team).unwrap();
    assert_eq!(m.real_translation(LanguageCode::Ja), Some("ベンフィカ"));
}

#[test]
fn test_frequency_never_decreases() {
    let mut store = LearnedMappingStore::new(limits(10, 10));
    let mut last = 0;
    for _ in 0..5 {
        store.upsert(team("FC Porto"), t0());
        let f = store.get("FC Porto", EntityType::Team).unwrap().frequency;
        assert!(f > last);
        last = f;
    }
    assert!(store.record_use(&MappingKey::new(EntityType::Team, "FC Porto"), t0()));
    assert_eq!(store.get("FC Porto", EntityType::Team).unwrap().frequency, last + 1);
    assert!(!store.record_use(&MappingKey::new(EntityType::Team, "Nope"), t0()));
}

#[test]
fn test_same_name_per_type_is_independent() {
    let mut store = LearnedMappingStore::new(limits(10, 10));
    store.upsert(team("Brazil"), t0());
    let country = TranslationMapping::new("Brazil", EntityType::Country, t0())
        .with_translation(LanguageCode::ZhHk, "巴西");
    store.upsert(country, t0());
    assert_eq!(store.size(), 2);
    let counts = store.counts_by_type();
    assert_eq!(counts[&EntityType::Team], 1);
    assert_eq!(counts[&EntityType::Country], 1);
    assert_eq!(counts[&EntityType::League], 0);
}

#[test]
fn test_size_never_exceeds_cap() {
    let mut store = LearnedMappingStore::new(limits(10, 8));
    for i in 0..50 {
        store.upsert(team(&format!("Team {i}")), t0() + Duration::minutes(i));
        assert!(store.size() <= 10, "size {} after {} upserts", store.size(), i + 1);
    }
    // 50 = 11 + 3 * 13: the last insert just triggered a pass.
    assert_eq!(store.size(), 8);
}

#[test]
fn test_eviction_trims_to_soft_cap() {
    let mut store = LearnedMappingStore::new(limits(10, 8));
    for i in 0..10 {
        let result = store.upsert(team(&format!("Team {i}")), t0());
        assert!(result.evicted.is_empty(), "evicted below the hard cap at {i}");
    }
    assert_eq!(store.size(), 10);

    let result = store.upsert(team("Team 10"), t0());
    assert_eq!(result.evicted.len(), 3);
    assert_eq!(store.size(), 8);

    // Room again until the hard cap is crossed.
    for name in ["Team 11", "Team 12"] {
        assert!(store.upsert(team(name), t0()).evicted.is_empty());
    }
    assert_eq!(store.size(), 10);
}

#[test]
fn test_limits_from_config_never_panic() {
    let config = CacheConfig {
        max_mappings: 10,
        cleanup_threshold: 0,
        recency_window_days: i64::MAX / 1000,
    };
    let limits = StoreLimits::from(&config);
    assert_eq!(limits.recency_window, Duration::days(30));
    assert_eq!(limits.cleanup_threshold, 1);

    let negative = CacheConfig {
        recency_window_days: -5,
        ..CacheConfig::default()
    };
    assert_eq!(StoreLimits::from(&negative).recency_window, Duration::days(30));

    let week = CacheConfig {
        recency_window_days: 7,
        ..CacheConfig::default()
    };
    assert_eq!(StoreLimits::from(&week).recency_window, Duration::days(7));
}

#[test]
fn test_eviction_prefers_frequent_and_recent() {
    let mut store = LearnedMappingStore::new(limits(3, 3));
    let now = t0() + Duration::days(60);

    // Old but heavily used: score 10.
    let mut veteran = team("Veteran");
    veteran.frequency = 10;
    store.upsert(veteran, now);
    // Recent, used twice: score 4.
    let mut recent = team("Recent");
    recent.frequency = 2;
    recent.last_used = now;
    store.upsert(recent, now);
    // Old, used once: score 1.
    store.upsert(team("Stale"), now);

    let mut fresh = team("Fresh");
    fresh.last_used = now;
    let result = store.upsert(fresh, now);

    assert_eq!(result.evicted.len(), 1);
    assert_eq!(result.evicted[0].original, "Stale");
    assert!(result.size_changed());
    assert!(store.get("Veteran", EntityType::Team).is_some());
    assert!(store.get("Fresh", EntityType::Team).is_some());
    assert!(store.get_ignore_case("stale", EntityType::Team).is_none());
}

#[test]
fn test_score_recency_boost() {
    let now = t0() + Duration::days(10);
    let mut m = team("X");
    m.frequency = 3;
    assert_eq!(score(&m, now, Duration::days(30)), 6);
    assert_eq!(score(&m, now + Duration::days(30), Duration::days(30)), 3);
}

#[test]
fn test_from_snapshot_merges_and_trims() {
    let mut dup = team("A");
    dup.frequency = 4;
    let snapshot = vec![team("A"), dup, team("B"), team("C"), team("D")];
    let (store, evicted) = LearnedMappingStore::from_snapshot(limits(3, 3), snapshot, t0());
    assert_eq!(store.size(), 3);
    assert_eq!(evicted.len(), 1);
    assert_eq!(store.get("A", EntityType::Team).unwrap().frequency, 5);
}

#[test]
fn test_snapshot_is_sorted() {
    let mut store = LearnedMappingStore::new(limits(10, 10));
    store.upsert(team("b"), t0());
    store.upsert(team("a"), t0());
    let names: Vec<String> = store.snapshot().into_iter().map(|m| m.original).collect();
    assert_eq!(names, vec!["a", "b"]);
}

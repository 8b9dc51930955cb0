//! Upstream fixture shapes and the queue records derived from them.
//!
//! Feed payloads are duck-typed: any field may be absent. Absent fields are
//! "no signal", never an error, with one exception: a fixture without a
//! `teams` block is treated as malformed and skipped as a whole.

use serde::{Deserialize, Serialize};

use crate::error::ScorelineError;
use crate::mapping::EntityType;

/// A fixture as delivered by the upstream feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    #[serde(default)]
    pub teams: Option<Teams>,
    #[serde(default)]
    pub league: Option<LeagueRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    #[serde(default)]
    pub home: Option<TeamRef>,
    #[serde(default)]
    pub away: Option<TeamRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Where an entity was seen; feeds context-aware league resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EncounterContext {
    pub country: Option<String>,
    pub league_id: Option<i64>,
}

impl EncounterContext {
    pub fn country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            league_id: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.league_id.is_none()
    }
}

/// One observed entity name awaiting learning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterRecord {
    pub name: String,
    pub entity_type: EntityType,
    pub context: EncounterContext,
}

impl EncounterRecord {
    pub fn new(name: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            name: name.into(),
            entity_type,
            context: EncounterContext::default(),
        }
    }

    pub fn with_context(mut self, context: EncounterContext) -> Self {
        self.context = context;
        self
    }

    /// Dedup key used by the learning queue.
    ///
    /// Leagues include their country so that identically named leagues in
    /// different countries are learned separately.
    pub fn natural_key(&self) -> String {
        match (self.entity_type, &self.context.country) {
            (EntityType::League, Some(country)) => {
                format!("{}|{}|{}", self.entity_type, self.name, country)
            }
            _ => format!("{}|{}", self.entity_type, self.name),
        }
    }
}

fn clean(name: &Option<String>) -> Option<&str> {
    name.as_deref().map(str::trim).filter(|n| !n.is_empty())
}

impl FixtureRecord {
    /// Every entity name this fixture carries, with its surrounding context.
    pub fn encounters(&self) -> Result<Vec<EncounterRecord>, ScorelineError> {
        let teams = self
            .teams
            .as_ref()
            .ok_or_else(|| ScorelineError::MalformedRecord("fixture has no teams".to_string()))?;

        let country = self.league.as_ref().and_then(|l| clean(&l.country));
        let league_id = self.league.as_ref().and_then(|l| l.id);
        let context = EncounterContext {
            country: country.map(str::to_string),
            league_id,
        };

        let mut out = Vec::new();
        for side in [&teams.home, &teams.away] {
            if let Some(name) = side.as_ref().and_then(|t| clean(&t.name)) {
                out.push(EncounterRecord::new(name, EntityType::Team).with_context(context.clone()));
            }
        }
        if let Some(league) = self.league.as_ref().and_then(|l| clean(&l.name)) {
            out.push(EncounterRecord::new(league, EntityType::League).with_context(context.clone()));
        }
        if let Some(country) = country {
            out.push(EncounterRecord::new(country, EntityType::Country));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_fixture_yields_all_entities() {
        let json = r#"{
            "teams": {"home": {"name": "FC Porto"}, "away": {"name": "Benfica"}},
            "league": {"name": "Primeira Liga", "country": "Portugal", "id": 94}
        }"#;
        let fixture: FixtureRecord = serde_json::from_str(json).unwrap();
        let found = fixture.encounters().unwrap();
        assert_eq!(found.len(), 4);
        assert_eq!(found[0].name, "FC Porto");
        assert_eq!(found[0].context.country.as_deref(), Some("Portugal"));
        assert_eq!(found[0].context.league_id, Some(94));
        assert_eq!(found[2].entity_type, EntityType::League);
        assert_eq!(found[3].entity_type, EntityType::Country);
        assert!(found[3].context.is_empty());
    }

    #[test]
    fn test_missing_fields_are_no_signal() {
        let json = r#"{"teams": {"home": {"name": "  "}, "away": {}}, "extra": 1}"#;
        let fixture: FixtureRecord = serde_json::from_str(json).unwrap();
        assert!(fixture.encounters().unwrap().is_empty());
    }

    #[test]
    fn test_missing_teams_is_malformed() {
        let fixture: FixtureRecord =
            serde_json::from_str(r#"{"league": {"name": "Serie A"}}"#).unwrap();
        assert!(matches!(
            fixture.encounters(),
            Err(ScorelineError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_league_key_is_partitioned_by_country() {
        let england = EncounterRecord::new("Premier League", EntityType::League)
            .with_context(EncounterContext::country("England"));
        let brazil = EncounterRecord::new("Premier League", EntityType::League)
            .with_context(EncounterContext::country("Brazil"));
        assert_ne!(england.natural_key(), brazil.natural_key());

        let team_a = EncounterRecord::new("Porto", EntityType::Team)
            .with_context(EncounterContext::country("Portugal"));
        let team_b = EncounterRecord::new("Porto", EntityType::Team);
        assert_eq!(team_a.natural_key(), team_b.natural_key());
    }
}

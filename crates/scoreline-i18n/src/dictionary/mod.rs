//! Hand-curated translations for well-known countries, leagues and teams.
//!
//! Each table row carries one column per target language, in [`COLUMNS`]
//! order. An empty cell means the name is written the same as in English and
//! is treated as "no translation" so it never masks a learned value.

mod countries;
mod leagues;
mod teams;


use scoreline_core::{EntityType, LanguageCode};

/// Column order of every table row.
pub(crate) const COLUMNS: [LanguageCode; 10] = [
    LanguageCode::ZhHk,
    LanguageCode::ZhTw,
    LanguageCode::ZhCn,
    LanguageCode::Ja,
    LanguageCode::Ko,
    LanguageCode::Es,
    LanguageCode::Pt,
    LanguageCode::De,
    LanguageCode::Fr,
    LanguageCode::It,
];

/// One table row.
#[derive(Debug)]
pub(crate) struct Entry {
    pub name: &'static str,
    /// Country a league belongs to. `None` for countries, teams and
    /// international competitions.
    pub country: Option<&'static str>,
    pub names: [&'static str; 10],
}

impl Entry {
    pub(crate) const fn new(name: &'static str, names: [&'static str; 10]) -> Self {
        Self {
            name,
            country: None,
            names,
        }
    }

    pub(crate) const fn scoped(
        name: &'static str,
        country: &'static str,
        names: [&'static str; 10],
    ) -> Self {
        Self {
            name,
            country: Some(country),
            names,
        }
    }

    fn get(&self, lang: LanguageCode) -> Option<&'static str> {
        let column = COLUMNS.iter().position(|c| *c == lang)?;
        let value = self.names[column];
        (!value.is_empty()).then_some(value)
    }

    /// A scoped entry only matches when the caller's country agrees, or when
    /// the caller has no country at all.
    fn fits(&self, country: Option<&str>) -> bool {
        match (self.country, country) {
            (Some(own), Some(wanted)) => own.eq_ignore_ascii_case(wanted.trim()),
            _ => true,
        }
    }
}

fn table(entity_type: EntityType) -> &'static [Entry] {
    match entity_type {
        EntityType::Country => countries::ENTRIES,
        EntityType::League => leagues::ENTRIES,
        EntityType::Team => teams::ENTRIES,
    }
}

/// Exact match first, then case-insensitive.
fn find(entity_type: EntityType, name: &str, country: Option<&str>) -> Option<&'static Entry> {
    let entries = table(entity_type);
    let name = name.trim();
    entries
        .iter()
        .find(|e| e.name == name && e.fits(country))
        .or_else(|| {
            let folded = name.to_lowercase();
            entries
                .iter()
                .find(|e| e.name.to_lowercase() == folded && e.fits(country))
        })
}

/// Read-only lookup over the built-in tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticDictionary;

impl StaticDictionary {
    pub fn new() -> Self {
        Self
    }

    /// Translation of `name` into `lang`, ignoring any context.
    pub fn lookup(&self, name: &str, lang: LanguageCode, entity_type: EntityType) -> Option<&'static str> {
        self.lookup_in(name, lang, entity_type, None)
    }

    /// Translation of `name` into `lang` for an entity seen in `country`.
    pub fn lookup_in(
        &self,
        name: &str,
        lang: LanguageCode,
        entity_type: EntityType,
        country: Option<&str>,
    ) -> Option<&'static str> {
        if lang.is_source() {
            return None;
        }
        find(entity_type, name, country)?.get(lang)
    }

    /// Whether a table row covers this entity at all.
    pub fn contains(&self, name: &str, entity_type: EntityType, country: Option<&str>) -> bool {
        find(entity_type, name, country).is_some()
    }

    /// Number of rows per entity type.
    pub fn entry_count(&self, entity_type: EntityType) -> usize {
        table(entity_type).len()
    }
}

//! League names: "<Country> <competition>" patterns.
//!
//! The competition part is matched as a whole-word phrase and rendered
//! through a per-language template; `{c}` stands for the translated country.

use super::{words, Candidate, LEAGUE_CONFIDENCE, LEAGUE_CONTEXT_CONFIDENCE};
use scoreline_core::LanguageCode;

/// Competition phrases, most specific first.
const PHRASES: &[(&str, Competition)] = &[
    ("premier league", Competition::Premier),
    ("super league", Competition::Super),
    ("superliga", Competition::Super),
    ("first division", Competition::FirstDivision),
    ("division 1", Competition::FirstDivision),
    ("second division", Competition::SecondDivision),
    ("division 2", Competition::SecondDivision),
    ("super cup", Competition::SuperCup),
    ("league cup", Competition::LeagueCup),
    ("cup", Competition::Cup),
    ("league", Competition::League),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Competition {
    Premier,
    Super,
    FirstDivision,
    SecondDivision,
    SuperCup,
    LeagueCup,
    Cup,
    League,
}

impl Competition {
    fn template(self, lang: LanguageCode) -> Option<&'static str> {
        use LanguageCode::*;
        let t = match self {
            Self::Premier => match lang {
                ZhHk | ZhTw => "{c}超級聯賽",
                ZhCn => "{c}超级联赛",
                Ja => "{c}プレミアリーグ",
                Ko => "{c} 프리미어리그",
                Es => "Premier League de {c}",
                Pt => "Premier League de {c}",
                Fr => "Premier League de {c}",
                It => "Premier League di {c}",
                De | En => return None,
            },
            Self::Super => match lang {
                ZhHk | ZhTw => "{c}超級聯賽",
                ZhCn => "{c}超级联赛",
                Ja => "{c}スーパーリーグ",
                Ko => "{c} 슈퍼리그",
                Es => "Superliga de {c}",
                Pt => "Superliga de {c}",
                Fr => "Super League de {c}",
                It => "Superlega di {c}",
                De | En => return None,
            },
            Self::FirstDivision => match lang {
                ZhHk => "{c}甲組聯賽",
                ZhTw => "{c}甲級聯賽",
                ZhCn => "{c}甲级联赛",
                Ja => "{c}1部リーグ",
                Ko => "{c} 1부 리그",
                Es => "Primera División de {c}",
                Pt => "Primeira Divisão de {c}",
                De => "{c} Erste Liga",
                Fr => "Première Division de {c}",
                It => "Prima Divisione di {c}",
                En => return None,
            },
            Self::SecondDivision => match lang {
                ZhHk => "{c}乙組聯賽",
                ZhTw => "{c}乙級聯賽",
                ZhCn => "{c}乙级联赛",
                Ja => "{c}2部リーグ",
                Ko => "{c} 2부 리그",
                Es => "Segunda División de {c}",
                Pt => "Segunda Divisão de {c}",
                De => "{c} Zweite Liga",
                Fr => "Deuxième Division de {c}",
                It => "Seconda Divisione di {c}",
                En => return None,
            },
            Self::SuperCup => match lang {
                ZhHk | ZhTw => "{c}超級盃",
                ZhCn => "{c}超级杯",
                Ja => "{c}スーパーカップ",
                Ko => "{c} 슈퍼컵",
                Es => "Supercopa de {c}",
                Pt => "Supercopa de {c}",
                De => "{c} Supercup",
                Fr => "Supercoupe de {c}",
                It => "Supercoppa di {c}",
                En => return None,
            },
            Self::LeagueCup => match lang {
                ZhHk | ZhTw => "{c}聯賽盃",
                ZhCn => "{c}联赛杯",
                Ja => "{c}リーグカップ",
                Ko => "{c} 리그컵",
                Es => "Copa de la Liga de {c}",
                Pt => "Copa da Liga de {c}",
                De => "{c} Ligapokal",
                Fr => "Coupe de la Ligue de {c}",
                It => "Coppa di Lega di {c}",
                En => return None,
            },
            Self::Cup => match lang {
                ZhHk | ZhTw => "{c}盃",
                ZhCn => "{c}杯",
                Ja => "{c}カップ",
                Ko => "{c} 컵",
                Es => "Copa de {c}",
                Pt => "Taça de {c}",
                De => "{c} Pokal",
                Fr => "Coupe de {c}",
                It => "Coppa di {c}",
                En => return None,
            },
            Self::League => match lang {
                ZhHk | ZhTw => "{c}聯賽",
                ZhCn => "{c}联赛",
                Ja => "{c}リーグ",
                Ko => "{c} 리그",
                Es => "Liga de {c}",
                Pt => "Liga de {c}",
                De => "{c} Liga",
                Fr => "Ligue de {c}",
                It => "Lega di {c}",
                En => return None,
            },
        };
        Some(t)
    }
}

/// Word range `(start, end)` where `phrase` occurs, compared case-insensitively.
fn find_phrase(name_words: &[&str], phrase: &str) -> Option<(usize, usize)> {
    let phrase_words = words(phrase);
    if phrase_words.is_empty() || name_words.len() < phrase_words.len() {
        return None;
    }
    (0..=name_words.len() - phrase_words.len())
        .find(|&start| {
            phrase_words
                .iter()
                .enumerate()
                .all(|(i, p)| name_words[start + i].eq_ignore_ascii_case(p))
        })
        .map(|start| (start, start + phrase_words.len()))
}

/// Build a localized league name.
///
/// The country comes from words before the competition phrase when those
/// name a known country ("Kenya Premier League"), otherwise from the
/// fixture context. Names with words after the competition phrase
/// ("Premier League 2") have no candidate.
pub fn derive(
    name: &str,
    lang: LanguageCode,
    context_country: Option<&str>,
    country_name: &dyn Fn(&str) -> Option<String>,
) -> Option<Candidate> {
    let name_words = words(name);
    let ((start, end), competition) = PHRASES.iter().find_map(|(phrase, competition)| {
        find_phrase(&name_words, phrase).map(|range| (range, *competition))
    })?;
    if end != name_words.len() {
        return None;
    }
    let template = competition.template(lang)?;

    let prefix = name_words[..start].join(" ");
    let (country, confidence) = match (!prefix.is_empty())
        .then(|| country_name(&prefix))
        .flatten()
    {
        Some(translated) => (translated, LEAGUE_CONFIDENCE),
        None => {
            let context = context_country.map(str::trim).filter(|c| !c.is_empty())?;
            (country_name(context)?, LEAGUE_CONTEXT_CONFIDENCE)
        }
    };

    Some(Candidate::new(template.replace("{c}", &country), confidence))
}

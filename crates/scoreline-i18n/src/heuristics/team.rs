//! Team names: structural tokens only.
//!
//! Club names themselves are not translatable by rule, so only the generic
//! words around them ("FC", "United", "Women", ...) are substituted, and only
//! as whole words. Latin-script languages keep those words as-is apart from
//! squad qualifiers.

use super::{words, Candidate, TEAM_CONFIDENCE};
use scoreline_core::LanguageCode;

fn token(word: &str, lang: LanguageCode) -> Option<&'static str> {
    use LanguageCode::*;
    let canonical = word.trim_matches(|c: char| c == '.' || c == ',').replace('.', "");
    let t = match canonical.to_ascii_uppercase().as_str() {
        "FC" | "AFC" => match lang {
            ZhHk => "足球會",
            ZhTw => "足球俱樂部",
            ZhCn => "足球俱乐部",
            _ => return None,
        },
        "UNITED" | "UTD" => match lang {
            ZhHk | ZhTw => "聯",
            ZhCn => "联",
            Ja => "ユナイテッド",
            Ko => "유나이티드",
            _ => return None,
        },
        "CITY" => match lang {
            ZhHk | ZhTw | ZhCn => "城",
            Ja => "シティ",
            Ko => "시티",
            _ => return None,
        },
        "ATHLETIC" => match lang {
            ZhHk | ZhTw => "競技",
            ZhCn => "竞技",
            Ja => "アスレティック",
            Ko => "애슬레틱",
            _ => return None,
        },
        "TOWN" => match lang {
            ZhHk | ZhTw => "鎮",
            ZhCn => "镇",
            Ja => "タウン",
            Ko => "타운",
            _ => return None,
        },
        "ROVERS" => match lang {
            ZhHk => "流浪",
            ZhTw | ZhCn => "流浪者",
            Ja => "ローヴァーズ",
            Ko => "로버스",
            _ => return None,
        },
        "WANDERERS" => match lang {
            ZhHk => "流浪",
            ZhTw | ZhCn => "流浪者",
            Ja => "ワンダラーズ",
            Ko => "원더러스",
            _ => return None,
        },
        "WOMEN" => match lang {
            ZhHk | ZhTw | ZhCn => "女足",
            Ja => "女子",
            Ko => "여자",
            Es => "Femenino",
            Pt => "Feminino",
            De => "Frauen",
            Fr => "Féminin",
            It => "Femminile",
            En => return None,
        },
        "RESERVES" | "II" => match lang {
            ZhHk | ZhTw => "預備隊",
            ZhCn => "预备队",
            Ja => "リザーブ",
            Ko => "리저브",
            Es | Pt => "Reservas",
            De => "Reserve",
            Fr => "Réserve",
            It => "Riserve",
            En => return None,
        },
        _ => return None,
    };
    Some(t)
}

/// Substitute structural tokens; `None` when no word changed.
pub fn derive(name: &str, lang: LanguageCode) -> Option<Candidate> {
    let mut out = String::with_capacity(name.len());
    let mut replaced_any = false;
    let mut prev_replaced = false;

    for (i, word) in words(name).into_iter().enumerate() {
        // A lone "W" only means "Women" in its bracketed form.
        let stripped = if word.eq_ignore_ascii_case("(w)") {
            "Women"
        } else {
            word.trim_start_matches('(').trim_end_matches(')')
        };
        let (text, replaced) = match token(stripped, lang) {
            Some(t) => (t, true),
            None => (word, false),
        };
        // Adjacent CJK tokens are written without a space between them.
        if i > 0 && !(lang.is_cjk() && prev_replaced && replaced) {
            out.push(' ');
        }
        out.push_str(text);
        replaced_any |= replaced;
        prev_replaced = replaced;
    }

    replaced_any.then(|| Candidate::new(out, TEAM_CONFIDENCE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_token_substitution() {
        assert_eq!(
            derive("Leeds United", LanguageCode::ZhHk).unwrap().text,
            "Leeds 聯"
        );
        assert_eq!(
            derive("Bristol City", LanguageCode::Ja).unwrap().text,
            "Bristol シティ"
        );
        assert_eq!(
            derive("FC Porto", LanguageCode::ZhCn).unwrap().text,
            "足球俱乐部 Porto"
        );
    }

    #[test]
    fn test_adjacent_tokens_join() {
        assert_eq!(
            derive("Wrexham City FC", LanguageCode::ZhHk).unwrap().text,
            "Wrexham 城足球會"
        );
        assert_eq!(
            derive("Wrexham City FC", LanguageCode::Ko).unwrap().text,
            "Wrexham 시티 FC"
        );
    }

    #[test]
    fn test_latin_languages_pass_through() {
        assert!(derive("FC Porto", LanguageCode::De).is_none());
        assert!(derive("Leeds United", LanguageCode::Es).is_none());
        assert_eq!(
            derive("Arsenal Women", LanguageCode::Es).unwrap().text,
            "Arsenal Femenino"
        );
    }

    #[test]
    fn test_whole_words_only() {
        assert!(derive("Unitedville", LanguageCode::ZhHk).is_none());
        assert!(derive("Citystars", LanguageCode::Ja).is_none());
        assert!(derive("Benfica", LanguageCode::ZhHk).is_none());
    }

    #[test]
    fn test_dotted_and_bracketed_tokens() {
        assert_eq!(
            derive("Cork F.C.", LanguageCode::ZhTw).unwrap().text,
            "Cork 足球俱樂部"
        );
        assert_eq!(
            derive("Lyon (W)", LanguageCode::Fr).unwrap().text,
            "Lyon Féminin"
        );
    }

    #[test]
    fn test_bare_w_is_not_women() {
        assert!(derive("W Connection", LanguageCode::ZhHk).is_none());
        assert!(derive("Alpha W Beta", LanguageCode::Es).is_none());
        assert_eq!(
            derive("Lyon (w)", LanguageCode::ZhHk).unwrap().text,
            "Lyon 女足"
        );
    }
}

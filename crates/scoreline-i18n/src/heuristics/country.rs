//! Country names: feeds spell the same country many ways.

use super::{Candidate, COUNTRY_CONFIDENCE};

/// Feed spelling → canonical table name.
fn alias(normalized: &str) -> Option<&'static str> {
    let canonical = match normalized.to_lowercase().as_str() {
        "korea republic" | "republic of korea" | "korea" | "s korea" | "s. korea" => {
            "South Korea"
        }
        "united states" | "united states of america" | "us" | "u.s.a." => "USA",
        "türkiye" | "turkiye" => "Turkey",
        "czechia" => "Czech Republic",
        "holland" | "the netherlands" => "Netherlands",
        "republic of ireland" | "eire" => "Ireland",
        "ksa" => "Saudi Arabia",
        "prc" | "china pr" => "China",
        "hong kong sar" | "hong kong, china" => "Hong Kong",
        _ => return None,
    };
    Some(canonical)
}

/// Collapse separators and whitespace: `"Czech-Republic"` → `"Czech Republic"`.
pub fn normalize(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Translate a country through its canonical spelling.
///
/// Only produces a candidate when the canonical spelling differs from the
/// raw name; otherwise the lookup tiers already answered (or could not).
pub fn derive(name: &str, country_name: &dyn Fn(&str) -> Option<String>) -> Option<Candidate> {
    let normalized = normalize(name);
    let canonical = alias(&normalized).map(str::to_string).unwrap_or(normalized);
    if canonical == name {
        return None;
    }
    let text = country_name(&canonical)?;
    Some(Candidate::new(text, COUNTRY_CONFIDENCE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zh(name: &str) -> Option<String> {
        match name {
            "South Korea" => Some("南韓".to_string()),
            "Czech Republic" => Some("捷克".to_string()),
            "USA" => Some("美國".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_alias_resolves() {
        let got = derive("Korea Republic", &zh).unwrap();
        assert_eq!(got.text, "南韓");
        assert_eq!(got.confidence, COUNTRY_CONFIDENCE);
        assert_eq!(derive("United-States", &zh).unwrap().text, "美國");
    }

    #[test]
    fn test_separator_normalization() {
        assert_eq!(normalize("Czech-Republic"), "Czech Republic");
        assert_eq!(normalize("  South_Korea "), "South Korea");
        assert_eq!(derive("Czech_Republic", &zh).unwrap().text, "捷克");
    }

    #[test]
    fn test_canonical_names_produce_nothing() {
        assert!(derive("South Korea", &zh).is_none());
        assert!(derive("Atlantis", &zh).is_none());
    }
}

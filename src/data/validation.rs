use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::deck::{DeckExtra, DeckRecord, DeckType, PerformanceProfile, Tier};

pub const DIFFICULTY_RANGE: (i64, i64) = (1, 10);
pub const GOING_RANGE: (i64, i64) = (1, 5);

/// A deck entry as it appears in `decks.json`.
///
/// Fields stay raw JSON until validation so a badly typed value only costs
/// that field, never the deck.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawDeck {
    #[serde(rename = "type", default)]
    pub deck_type: Option<Value>,
    #[serde(default)]
    pub tier: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
    #[serde(default)]
    pub weaknesses: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
}

/// A per-deck overlay entry from `additional.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawExtra {
    #[serde(default)]
    pub going: Option<Value>,
    #[serde(default)]
    pub engine: Option<Value>,
    #[serde(default)]
    pub stats: Option<Value>,
    #[serde(default)]
    pub analysis: Option<Value>,
}

/// A matchup entry from `matchups.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawMatchup {
    #[serde(default)]
    pub side_in: Vec<String>,
}

/// Integral JSON number, including floats such as `7.0`
fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

fn integer_field(value: Value, field: &str, warnings: &mut Vec<String>) -> Option<i64> {
    let parsed = as_integer(&value);
    if parsed.is_none() {
        warnings.push(format!("{}: expected an integer, got {}", field, value));
    }
    parsed
}

fn string_field(value: Option<Value>, field: &str, warnings: &mut Vec<String>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        other => {
            warnings.push(format!("{}: expected a string, got {}", field, other));
            None
        }
    }
}

fn string_list(value: Option<Value>, field: &str, warnings: &mut Vec<String>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| string_field(Some(item), field, warnings))
            .collect(),
        Some(other) => {
            warnings.push(format!("{}: expected a list, got {}", field, other));
            Vec::new()
        }
    }
}

fn clamp_field(
    value: i64,
    (low, high): (i64, i64),
    field: &str,
    errors: &mut Vec<String>,
) -> i32 {
    if value < low || value > high {
        let clamped = value.clamp(low, high);
        errors.push(format!(
            "{}: {} out of range {}-{}, clamped to {}",
            field, value, low, high, clamped
        ));
        clamped as i32
    } else {
        value as i32
    }
}

/// Convert a raw deck into a typed record.
///
/// Never fails: unknown or mistyped tier/type literals become `None`, a
/// difficulty that is not an integral number becomes `None`, out-of-range
/// difficulty is clamped to 1-10. Every adjustment is reported in the returned
/// warnings so the caller can log them.
pub fn validate_deck(name: &str, raw: RawDeck) -> (DeckRecord, Vec<String>) {
    let mut warnings = Vec::new();

    let tier_field = format!("decks.{}.tier", name);
    let tier = match string_field(raw.tier.clone(), &tier_field, &mut warnings) {
        Some(s) => {
            let parsed = Tier::parse(&s);
            if parsed.is_none() {
                warnings.push(format!(
                    "{}: unknown tier '{}' (expected one of: {})",
                    tier_field,
                    s,
                    Tier::ALL.map(|t| t.as_str()).join(", ")
                ));
            }
            parsed
        }
        None => {
            if raw.tier.is_none() {
                warnings.push(format!("{}: missing", tier_field));
            }
            None
        }
    };

    let type_field = format!("decks.{}.type", name);
    let deck_type = match string_field(raw.deck_type.clone(), &type_field, &mut warnings) {
        Some(s) => {
            let parsed = DeckType::parse(&s);
            if parsed.is_none() {
                warnings.push(format!(
                    "{}: unknown type '{}' (expected one of: {})",
                    type_field,
                    s,
                    DeckType::ALL.map(|t| t.as_str()).join(", ")
                ));
            }
            parsed
        }
        None => {
            if raw.deck_type.is_none() {
                warnings.push(format!("{}: missing", type_field));
            }
            None
        }
    };

    let difficulty_field = format!("decks.{}.difficulty", name);
    let difficulty = match raw.difficulty {
        Some(value) => integer_field(value, &difficulty_field, &mut warnings)
            .map(|d| clamp_field(d, DIFFICULTY_RANGE, &difficulty_field, &mut warnings)),
        None => {
            warnings.push(format!("{}: missing, deck cannot be scored", difficulty_field));
            None
        }
    };

    let record = DeckRecord {
        name: name.to_string(),
        tier,
        deck_type,
        difficulty,
        weaknesses: string_list(
            raw.weaknesses,
            &format!("decks.{}.weaknesses", name),
            &mut warnings,
        ),
        image: string_field(raw.image, &format!("decks.{}.image", name), &mut warnings),
    };
    (record, warnings)
}

/// One going side: missing or mistyped falls back to the neutral rating,
/// present ratings are clamped to 1-5.
fn going_side(value: Option<&Value>, field: &str, warnings: &mut Vec<String>) -> i32 {
    let neutral = PerformanceProfile::NEUTRAL_RATING;
    match value {
        None => neutral,
        Some(v) => match integer_field(v.clone(), field, warnings) {
            Some(rating) => clamp_field(rating, GOING_RANGE, field, warnings),
            None => neutral,
        },
    }
}

/// Convert a raw overlay into a typed one.
///
/// A missing going side defaults to the neutral rating; present ratings are
/// clamped to 1-5. Stats that are not integral numbers are dropped.
pub fn validate_extra(name: &str, raw: RawExtra) -> (DeckExtra, Vec<String>) {
    let mut warnings = Vec::new();

    let going = match raw.going {
        None => None,
        Some(Value::Object(map)) => {
            let first_field = format!("additional.{}.going.first", name);
            let second_field = format!("additional.{}.going.second", name);
            Some(PerformanceProfile::new(
                going_side(map.get("first"), &first_field, &mut warnings),
                going_side(map.get("second"), &second_field, &mut warnings),
            ))
        }
        Some(other) => {
            warnings.push(format!(
                "additional.{}.going: expected an object, got {}",
                name, other
            ));
            None
        }
    };

    let mut stats = BTreeMap::new();
    match raw.stats {
        None => {}
        Some(Value::Object(map)) => {
            for (key, value) in map {
                let field = format!("additional.{}.stats.{}", name, key);
                if let Some(v) = integer_field(value, &field, &mut warnings) {
                    let v = clamp_field(v, DIFFICULTY_RANGE, &field, &mut warnings);
                    stats.insert(key, v);
                }
            }
        }
        Some(other) => warnings.push(format!(
            "additional.{}.stats: expected an object, got {}",
            name, other
        )),
    }

    let extra = DeckExtra {
        going,
        engine: string_field(raw.engine, &format!("additional.{}.engine", name), &mut warnings),
        stats,
        analysis: string_field(
            raw.analysis,
            &format!("additional.{}.analysis", name),
            &mut warnings,
        ),
    };
    (extra, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_deck(tier: Option<&str>, deck_type: Option<&str>, difficulty: Option<i64>) -> RawDeck {
        RawDeck {
            deck_type: deck_type.map(|t| json!(t)),
            tier: tier.map(|t| json!(t)),
            difficulty: difficulty.map(|d| json!(d)),
            weaknesses: Some(json!(["Nibiru"])),
            image: Some(json!("deck.jpg")),
        }
    }

    fn raw_extra(value: Value) -> RawExtra {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_deck_has_no_warnings() {
        let (deck, warnings) = validate_deck("Dragon Link", raw_deck(Some("Tier 1"), Some("Combo"), Some(8)));
        assert!(warnings.is_empty(), "{:?}", warnings);
        assert_eq!(deck.name, "Dragon Link");
        assert_eq!(deck.tier, Some(Tier::Tier1));
        assert_eq!(deck.deck_type, Some(DeckType::Combo));
        assert_eq!(deck.difficulty, Some(8));
        assert_eq!(deck.weaknesses, vec!["Nibiru".to_string()]);
        assert_eq!(deck.image.as_deref(), Some("deck.jpg"));
    }

    #[test]
    fn test_lowercase_tier_is_unknown() {
        let (deck, warnings) = validate_deck("Chimera", raw_deck(Some("rogue"), Some("Combo"), Some(5)));
        assert_eq!(deck.tier, None);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("decks.Chimera.tier"));
        assert!(warnings[0].contains("'rogue'"));
    }

    #[test]
    fn test_unknown_type() {
        let (deck, warnings) = validate_deck("X", raw_deck(Some("Tier 2"), Some("Midrange"), Some(5)));
        assert_eq!(deck.deck_type, None);
        assert!(warnings[0].contains("decks.X.type"));
    }

    #[test]
    fn test_difficulty_clamped() {
        let (deck, warnings) = validate_deck("X", raw_deck(Some("Tier 2"), Some("Combo"), Some(14)));
        assert_eq!(deck.difficulty, Some(10));
        assert!(warnings[0].contains("clamped to 10"));

        let (deck, _) = validate_deck("Y", raw_deck(Some("Tier 2"), Some("Combo"), Some(-3)));
        assert_eq!(deck.difficulty, Some(1));
    }

    #[test]
    fn test_integral_float_difficulty_accepted() {
        let mut raw = raw_deck(Some("Tier 1"), Some("Combo"), None);
        raw.difficulty = Some(json!(7.0));
        let (deck, warnings) = validate_deck("Branded", raw);
        assert_eq!(deck.difficulty, Some(7));
        assert!(warnings.is_empty(), "{:?}", warnings);
    }

    #[test]
    fn test_mistyped_difficulty_is_not_computable() {
        for value in [json!("6"), json!(6.5), json!(true), json!([6])] {
            let mut raw = raw_deck(Some("Tier 1"), Some("Combo"), None);
            raw.difficulty = Some(value);
            let (deck, warnings) = validate_deck("Odd", raw);
            assert_eq!(deck.difficulty, None);
            assert_eq!(deck.tier, Some(Tier::Tier1));
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].contains("decks.Odd.difficulty: expected an integer"));
        }
    }

    #[test]
    fn test_mistyped_strings_dropped_with_warning() {
        let raw = RawDeck {
            deck_type: Some(json!(3)),
            tier: Some(json!(1)),
            difficulty: Some(json!(4)),
            weaknesses: Some(json!(["Nibiru", 7])),
            image: Some(json!(false)),
        };
        let (deck, warnings) = validate_deck("Typed", raw);
        assert_eq!(deck.tier, None);
        assert_eq!(deck.deck_type, None);
        assert_eq!(deck.difficulty, Some(4));
        assert_eq!(deck.weaknesses, vec!["Nibiru".to_string()]);
        assert_eq!(deck.image, None);
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("decks.Typed.tier: expected a string"));
    }

    #[test]
    fn test_missing_fields_reported() {
        let (deck, warnings) = validate_deck("Bare", RawDeck::default());
        assert_eq!(deck.tier, None);
        assert_eq!(deck.deck_type, None);
        assert_eq!(deck.difficulty, None);
        assert!(deck.weaknesses.is_empty());
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_raw_deck_parses_document_json() {
        let json = r#"{
            "type": "Combo",
            "tier": "Tier 1",
            "difficulty": 8,
            "weaknesses": ["Nibiru", "Droll & Lock Bird", "Dimension Shifter"],
            "image": "dragon-link.jpg"
        }"#;
        let raw: RawDeck = serde_json::from_str(json).unwrap();
        let (deck, warnings) = validate_deck("Dragon Link", raw);
        assert!(warnings.is_empty());
        assert_eq!(deck.deck_type, Some(DeckType::Combo));
        assert_eq!(deck.weaknesses.len(), 3);
    }

    #[test]
    fn test_extra_partial_going_defaults_missing_side() {
        let (extra, warnings) = validate_extra("X", raw_extra(json!({ "going": { "first": 5 } })));
        assert!(warnings.is_empty());
        assert_eq!(extra.going, Some(PerformanceProfile::new(5, 3)));
    }

    #[test]
    fn test_extra_without_going() {
        let (extra, warnings) = validate_extra("X", RawExtra::default());
        assert!(warnings.is_empty());
        assert_eq!(extra.going, None);
        assert_eq!(extra.analysis, None);
    }

    #[test]
    fn test_extra_clamps_ratings() {
        let raw = raw_extra(json!({
            "going": { "first": 0, "second": 9 },
            "engine": "Dragon Ruler",
            "stats": { "consistency": 12 }
        }));
        let (extra, warnings) = validate_extra("X", raw);
        assert_eq!(extra.going, Some(PerformanceProfile::new(1, 5)));
        assert_eq!(extra.stat("consistency"), Some(10));
        assert_eq!(extra.engine.as_deref(), Some("Dragon Ruler"));
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("additional.X.going.first")));
    }

    #[test]
    fn test_extra_lenient_numbers() {
        let raw = raw_extra(json!({
            "going": { "first": 4.0, "second": "high" },
            "stats": { "consistency": 8.0, "versatility": "a lot" },
            "analysis": "Grinds through interruption."
        }));
        let (extra, warnings) = validate_extra("X", raw);
        assert_eq!(extra.going, Some(PerformanceProfile::new(4, 3)));
        assert_eq!(extra.stat("consistency"), Some(8));
        assert_eq!(extra.stat("versatility"), None);
        assert_eq!(extra.analysis.as_deref(), Some("Grinds through interruption."));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_extra_mistyped_going_dropped() {
        let (extra, warnings) = validate_extra("X", raw_extra(json!({ "going": 4, "stats": [1] })));
        assert_eq!(extra.going, None);
        assert!(extra.stats.is_empty());
        assert_eq!(warnings.len(), 2);
    }
}

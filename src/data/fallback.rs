use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::loader::build_meta_data;
use super::repository::{DataSource, MetaData};
use crate::reference::{Handtrap, SideDeckCard};

fn object(value: Value) -> BTreeMap<String, Value> {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => BTreeMap::new(),
    }
}

/// Built-in example data used when the deck list cannot be loaded.
///
/// Goes through the same validation path as file data.
pub fn fallback_data() -> MetaData {
    let decks = object(json!({
        "Dragon Link": {
            "type": "Combo",
            "tier": "Tier 1",
            "difficulty": 8,
            "weaknesses": ["Nibiru", "Droll & Lock Bird", "Dimension Shifter"],
            "image": "dragon-link.jpg"
        },
        "Labrynth": {
            "type": "Control",
            "tier": "Tier 2",
            "difficulty": 5,
            "weaknesses": ["Harpie's Feather Duster", "Lightning Storm"],
            "image": "labrynth.jpg"
        },
        "Tenpai Dragon": {
            "type": "Aggro",
            "tier": "Tier 2",
            "difficulty": 3,
            "weaknesses": ["Nibiru", "Effect Veiler"],
            "image": "tenpai-dragon.jpg"
        }
    }));

    let extras = object(json!({
        "Dragon Link": {
            "going": { "first": 5, "second": 2 },
            "engine": "Rokket",
            "analysis": "Fields several negates going first but folds to early interruption."
        },
        "Labrynth": { "going": { "first": 4, "second": 3 } },
        "Tenpai Dragon": { "going": { "first": 3, "second": 4 } }
    }));

    let side_cards = vec![SideDeckCard {
        name: "Ash Blossom & Joyous Spring".to_string(),
        card_type: "handtrap".to_string(),
        description: Some(
            "Negates effects that add cards from the Deck to the hand or send them to the GY."
                .to_string(),
        ),
        usage: Some("95% of decks".to_string()),
        image: Some("ash-blossom.jpg".to_string()),
    }];

    let handtraps = vec![Handtrap {
        name: "Ash Blossom & Joyous Spring".to_string(),
        tier: "S".to_string(),
        image: Some("ash-blossom.jpg".to_string()),
        formats: Some(vec![
            "master-duel".to_string(),
            "tcg".to_string(),
            "ocg".to_string(),
        ]),
    }];

    build_meta_data(
        decks,
        extras,
        BTreeMap::new(),
        side_cards,
        handtraps,
        DataSource::Fallback,
    )
}

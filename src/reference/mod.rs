use serde::{Deserialize, Serialize};
use std::fmt;

/// A card commonly brought in from the side deck.
///
/// `card_type` is a role slug such as "handtrap" or "board-breaker"; unknown
/// slugs are kept and shown verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SideDeckCard {
    pub name: String,
    #[serde(rename = "type", default)]
    pub card_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl SideDeckCard {
    pub fn role_label(&self) -> &str {
        role_label(&self.card_type)
    }
}

/// Display name of a side-deck role slug
pub fn role_label(role: &str) -> &str {
    match role {
        "handtrap" => "Handtrap",
        "board-breaker" => "Board Breaker",
        "floodgate" => "Floodgate",
        "removal" => "Removal",
        other => other,
    }
}

/// Side-deck cards matching `role`, or all cards when no role is given
pub fn filter_side_cards<'a>(
    cards: &'a [SideDeckCard],
    role: Option<&str>,
) -> Vec<&'a SideDeckCard> {
    cards
        .iter()
        .filter(|c| role.map_or(true, |r| c.card_type == r))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandtrapTier {
    S,
    A,
    B,
    C,
}

impl HandtrapTier {
    pub const ALL: [HandtrapTier; 4] = [
        HandtrapTier::S,
        HandtrapTier::A,
        HandtrapTier::B,
        HandtrapTier::C,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "S" => Some(HandtrapTier::S),
            "A" => Some(HandtrapTier::A),
            "B" => Some(HandtrapTier::B),
            "C" => Some(HandtrapTier::C),
            _ => None,
        }
    }
}

impl fmt::Display for HandtrapTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandtrapTier::S => "S",
            HandtrapTier::A => "A",
            HandtrapTier::B => "B",
            HandtrapTier::C => "C",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Handtrap {
    pub name: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Formats the card is legal/relevant in; absent means every format
    #[serde(default)]
    pub formats: Option<Vec<String>>,
}

impl Handtrap {
    pub fn tier(&self) -> Option<HandtrapTier> {
        HandtrapTier::parse(&self.tier)
    }

    pub fn plays_in(&self, format: &str) -> bool {
        match &self.formats {
            Some(formats) => formats.iter().any(|f| f == format),
            None => true,
        }
    }
}

/// Handtraps grouped S, A, B, C for `format` (all formats when `None`).
///
/// Every tier is present in the result, possibly empty. Cards with an
/// unrecognised tier are left out.
pub fn handtrap_tier_list<'a>(
    cards: &'a [Handtrap],
    format: Option<&str>,
) -> Vec<(HandtrapTier, Vec<&'a Handtrap>)> {
    HandtrapTier::ALL
        .iter()
        .map(|tier| {
            let members = cards
                .iter()
                .filter(|c| c.tier() == Some(*tier))
                .filter(|c| format.map_or(true, |f| c.plays_in(f)))
                .collect();
            (*tier, members)
        })
        .collect()
}

use std::collections::BTreeMap;
use std::fmt;

/// Competitive-strength bucket assigned to a deck archetype.
///
/// Wire literals are case-sensitive: "Tier 1", "Tier 2", "Tier 3", "Rogue", "Fun".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
    Rogue,
    Fun,
}

impl Tier {
    /// All tiers, most competitive first
    pub const ALL: [Tier; 5] = [Tier::Tier1, Tier::Tier2, Tier::Tier3, Tier::Rogue, Tier::Fun];

    /// Tiers counted in meta statistics. Rogue and Fun are browse-only.
    pub const COMPETITIVE: [Tier; 3] = [Tier::Tier1, Tier::Tier2, Tier::Tier3];

    /// Parse the exact wire literal. Anything else is unknown.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Tier 1" => Some(Tier::Tier1),
            "Tier 2" => Some(Tier::Tier2),
            "Tier 3" => Some(Tier::Tier3),
            "Rogue" => Some(Tier::Rogue),
            "Fun" => Some(Tier::Fun),
            _ => None,
        }
    }

    /// Parse a filter shorthand as typed on the command line: "1", "2", "3", "rogue", "fun"
    pub fn from_filter(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "t1" | "tier 1" | "tier1" => Some(Tier::Tier1),
            "2" | "t2" | "tier 2" | "tier2" => Some(Tier::Tier2),
            "3" | "t3" | "tier 3" | "tier3" => Some(Tier::Tier3),
            "rogue" => Some(Tier::Rogue),
            "fun" => Some(Tier::Fun),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Tier1 => "Tier 1",
            Tier::Tier2 => "Tier 2",
            Tier::Tier3 => "Tier 3",
            Tier::Rogue => "Rogue",
            Tier::Fun => "Fun",
        }
    }

    pub fn is_competitive(&self) -> bool {
        Tier::COMPETITIVE.contains(self)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::Tier1 => "Top deck of the format, highly competitive",
            Tier::Tier2 => "Competitive deck with a few weaknesses",
            Tier::Tier3 => "Viable, but not optimal for large tournaments",
            Tier::Rogue => "Can surprise opponents at local tournaments",
            Tier::Fun => "For casual play and having fun",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deck archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeckType {
    Combo,
    Control,
    Aggro,
    MidRange,
}

impl DeckType {
    pub const ALL: [DeckType; 4] = [
        DeckType::Combo,
        DeckType::Control,
        DeckType::Aggro,
        DeckType::MidRange,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Combo" => Some(DeckType::Combo),
            "Control" => Some(DeckType::Control),
            "Aggro" => Some(DeckType::Aggro),
            "Mid-Range" => Some(DeckType::MidRange),
            _ => None,
        }
    }

    /// Lenient parse for command-line filters
    pub fn from_filter(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "combo" => Some(DeckType::Combo),
            "control" => Some(DeckType::Control),
            "aggro" => Some(DeckType::Aggro),
            "midrange" => Some(DeckType::MidRange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeckType::Combo => "Combo",
            DeckType::Control => "Control",
            DeckType::Aggro => "Aggro",
            DeckType::MidRange => "Mid-Range",
        }
    }
}

impl fmt::Display for DeckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deck archetype as it reaches the engine, after boundary validation.
///
/// `tier`, `deck_type` and `difficulty` are `None` when the source document
/// omitted them or used a value outside the accepted vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckRecord {
    pub name: String,
    pub tier: Option<Tier>,
    pub deck_type: Option<DeckType>,
    pub difficulty: Option<i32>,
    pub weaknesses: Vec<String>,
    pub image: Option<String>,
}

impl DeckRecord {
    pub fn is_competitive(&self) -> bool {
        self.tier.is_some_and(|t| t.is_competitive())
    }

    /// First listed weakness, shown in the meta table
    pub fn primary_weakness(&self) -> Option<&str> {
        self.weaknesses.first().map(String::as_str)
    }

    pub fn tier_label(&self) -> &str {
        self.tier.map(|t| t.as_str()).unwrap_or("Unknown")
    }

    pub fn type_label(&self) -> &str {
        self.deck_type.map(|t| t.as_str()).unwrap_or("Unknown")
    }
}

/// Situational performance ratings (1-5) going first and going second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceProfile {
    pub going_first: i32,
    pub going_second: i32,
}

impl PerformanceProfile {
    pub const NEUTRAL_RATING: i32 = 3;

    pub fn new(going_first: i32, going_second: i32) -> Self {
        Self {
            going_first,
            going_second,
        }
    }

    pub fn average(&self) -> f64 {
        (self.going_first + self.going_second) as f64 / 2.0
    }
}

impl Default for PerformanceProfile {
    fn default() -> Self {
        Self::new(Self::NEUTRAL_RATING, Self::NEUTRAL_RATING)
    }
}

/// Optional per-deck overlay: performance profile, engine notes and stats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckExtra {
    pub going: Option<PerformanceProfile>,
    pub engine: Option<String>,
    /// Named 1-10 ratings such as "consistency" or "versatility"
    pub stats: BTreeMap<String, i32>,
    pub analysis: Option<String>,
}

impl DeckExtra {
    pub fn stat(&self, key: &str) -> Option<i32> {
        self.stats.get(key).copied()
    }
}

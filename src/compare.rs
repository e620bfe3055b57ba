use crate::deck::{DeckExtra, DeckRecord, PerformanceProfile};
use crate::scoring::{
    matchup_tactics, matchup_tips, matchup_verdict, tier_weight, MatchupTactics, MatchupVerdict,
};

/// Stat used when a deck's overlay does not rate it
pub const DEFAULT_STAT: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Deck1,
    Deck2,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Better {
    Higher,
    Lower,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: &'static str,
    pub value1: String,
    pub value2: String,
    pub winner: Winner,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub deck1: String,
    pub deck2: String,
    pub rows: Vec<CategoryRow>,
    /// `None` when either deck cannot be scored
    pub verdict: Option<MatchupVerdict>,
    pub tactics: MatchupTactics,
    /// Empty without a verdict
    pub tips: Vec<String>,
}

impl Comparison {
    /// Categories won by each deck, as (deck1, deck2)
    pub fn wins(&self) -> (usize, usize) {
        let count = |w: Winner| self.rows.iter().filter(|r| r.winner == w).count();
        (count(Winner::Deck1), count(Winner::Deck2))
    }
}

fn winner(a: Option<i32>, b: Option<i32>, better: Better) -> Winner {
    match (a, b) {
        (Some(a), Some(b)) if a == b => Winner::Tie,
        (Some(a), Some(b)) => match (better, a > b) {
            (Better::Higher, true) | (Better::Lower, false) => Winner::Deck1,
            _ => Winner::Deck2,
        },
        (Some(_), None) => Winner::Deck1,
        (None, Some(_)) => Winner::Deck2,
        (None, None) => Winner::Tie,
    }
}

fn value_or_unknown(value: Option<i32>, max: i32) -> String {
    match value {
        Some(v) => format!("{}/{}", v, max),
        None => "Unknown".to_string(),
    }
}

fn row(
    category: &'static str,
    a: Option<i32>,
    b: Option<i32>,
    max: i32,
    better: Better,
) -> CategoryRow {
    CategoryRow {
        category,
        value1: value_or_unknown(a, max),
        value2: value_or_unknown(b, max),
        winner: winner(a, b, better),
    }
}

/// Compare two decks category by category and attach the matchup verdict.
///
/// Missing going profiles and stats take their neutral defaults. A deck
/// without a difficulty loses the difficulty row.
pub fn compare_decks(
    deck1: &DeckRecord,
    extra1: Option<&DeckExtra>,
    deck2: &DeckRecord,
    extra2: Option<&DeckExtra>,
) -> Comparison {
    let going1 = extra1.and_then(|e| e.going).unwrap_or_default();
    let going2 = extra2.and_then(|e| e.going).unwrap_or_default();
    let stat = |extra: Option<&DeckExtra>, key: &str| {
        Some(extra.and_then(|e| e.stat(key)).unwrap_or(DEFAULT_STAT))
    };

    let tier_row = CategoryRow {
        category: "Tier",
        value1: deck1.tier_label().to_string(),
        value2: deck2.tier_label().to_string(),
        winner: winner(
            Some(tier_weight(deck1.tier)),
            Some(tier_weight(deck2.tier)),
            Better::Higher,
        ),
    };

    let rows = vec![
        tier_row,
        row("Difficulty", deck1.difficulty, deck2.difficulty, 10, Better::Lower),
        row(
            "Consistency",
            stat(extra1, "consistency"),
            stat(extra2, "consistency"),
            10,
            Better::Higher,
        ),
        row(
            "Going First",
            Some(going1.going_first),
            Some(going2.going_first),
            5,
            Better::Higher,
        ),
        row(
            "Going Second",
            Some(going1.going_second),
            Some(going2.going_second),
            5,
            Better::Higher,
        ),
        row(
            "Versatility",
            stat(extra1, "versatility"),
            stat(extra2, "versatility"),
            10,
            Better::Higher,
        ),
    ];

    let verdict = matchup_verdict(deck1, &going1, deck2, &going2);
    let tips = verdict
        .as_ref()
        .map(|v| matchup_tips(v, deck1.tier, deck2.tier))
        .unwrap_or_default();

    Comparison {
        deck1: deck1.name.clone(),
        deck2: deck2.name.clone(),
        rows,
        verdict,
        tactics: matchup_tactics(deck1.tier, deck2.tier),
        tips,
    }
}

/// Profile-only variant used when no overlays are at hand
pub fn compare_with_profiles(
    deck1: &DeckRecord,
    going1: PerformanceProfile,
    deck2: &DeckRecord,
    going2: PerformanceProfile,
) -> Comparison {
    let extra1 = DeckExtra {
        going: Some(going1),
        ..DeckExtra::default()
    };
    let extra2 = DeckExtra {
        going: Some(going2),
        ..DeckExtra::default()
    };
    compare_decks(deck1, Some(&extra1), deck2, Some(&extra2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{DeckType, Tier};
    use crate::scoring::Favored;
    use std::collections::BTreeMap;

    fn deck(name: &str, tier: Tier, difficulty: Option<i32>) -> DeckRecord {
        DeckRecord {
            name: name.to_string(),
            tier: Some(tier),
            deck_type: Some(DeckType::Combo),
            difficulty,
            weaknesses: vec![],
            image: None,
        }
    }

    fn extra(first: i32, second: i32, stats: &[(&str, i32)]) -> DeckExtra {
        DeckExtra {
            going: Some(PerformanceProfile::new(first, second)),
            engine: None,
            stats: stats
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            analysis: None,
        }
    }

    fn winners(c: &Comparison) -> Vec<Winner> {
        c.rows.iter().map(|r| r.winner).collect()
    }

    #[test]
    fn test_compare_categories() {
        let a = deck("Dragon Link", Tier::Tier1, Some(8));
        let b = deck("Labrynth", Tier::Tier2, Some(5));
        let ea = extra(5, 2, &[("consistency", 7)]);
        let eb = extra(4, 4, &[("consistency", 7), ("versatility", 8)]);

        let c = compare_decks(&a, Some(&ea), &b, Some(&eb));
        let categories: Vec<&str> = c.rows.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec!["Tier", "Difficulty", "Consistency", "Going First", "Going Second", "Versatility"]
        );
        assert_eq!(
            winners(&c),
            vec![
                Winner::Deck1,
                Winner::Deck2,
                Winner::Tie,
                Winner::Deck1,
                Winner::Deck2,
                Winner::Deck2,
            ]
        );
        assert_eq!(c.rows[1].value1, "8/10");
        assert_eq!(c.rows[5].value1, "5/10");
        assert_eq!(c.wins(), (2, 3));
    }

    #[test]
    fn test_compare_verdict() {
        // 85 + 44 + 52.5 = 60.5 -> 61 vs 70 + 65 + 60 = 65
        let a = deck("Dragon Link", Tier::Tier1, Some(8));
        let b = deck("Labrynth", Tier::Tier2, Some(5));
        let c = compare_with_profiles(
            &a,
            PerformanceProfile::new(5, 2),
            &b,
            PerformanceProfile::new(4, 4),
        );
        let verdict = c.verdict.unwrap();
        assert_eq!(verdict.score_deck1, 61);
        assert_eq!(verdict.score_deck2, 65);
        assert_eq!(verdict.favored, Favored::Even);
        assert_eq!(c.tips[0], "The side deck will decide this matchup");
        assert_eq!(c.tactics.deck1_plan, "Apply constant pressure");
    }

    #[test]
    fn test_compare_against_rogue_deck() {
        // 85 + 79 + 45 = 70 vs 40 + 37 + 45 = 41 (40.67)
        let a = deck("Snake-Eye", Tier::Tier1, Some(3));
        let b = deck("Chimera", Tier::Rogue, Some(9));
        let c = compare_decks(&a, None, &b, None);
        assert_eq!(c.verdict.as_ref().unwrap().favored, Favored::Deck1);
        assert_eq!(c.tactics.deck2_plan, "Don't underestimate the opponent");
        assert_eq!(c.tips.last().unwrap(), "Expect unusual lines from Chimera");
    }

    #[test]
    fn test_compare_without_overlays_uses_defaults() {
        let a = deck("A", Tier::Tier1, Some(5));
        let b = deck("B", Tier::Tier1, Some(5));
        let c = compare_decks(&a, None, &b, None);
        assert!(winners(&c).iter().all(|w| *w == Winner::Tie));
        assert_eq!(c.rows[3].value1, "3/5");
        assert_eq!(c.wins(), (0, 0));
    }

    #[test]
    fn test_compare_missing_difficulty() {
        let a = deck("A", Tier::Tier1, None);
        let b = deck("B", Tier::Tier3, Some(9));
        let c = compare_decks(&a, None, &b, None);
        assert_eq!(c.rows[1].value1, "Unknown");
        assert_eq!(c.rows[1].winner, Winner::Deck2);
        assert!(c.verdict.is_none());
        assert!(c.tips.is_empty());
    }
}

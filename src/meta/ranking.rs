use std::collections::BTreeMap;

use crate::deck::{DeckRecord, DeckType, PerformanceProfile, Tier};
use crate::scoring::{matchup_verdict, round_half_up, score_deck, MatchupVerdict};

/// Default size of the top-decks ranking
pub const DEFAULT_TOP_N: usize = 5;

/// Average reported for an archetype with no competitive decks
pub const EMPTY_TYPE_PERFORMANCE: i64 = 50;

/// A competitive deck with its composite score, for ranked display
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDeck<'a> {
    pub deck: &'a DeckRecord,
    pub score: i64,
    pub incomplete: bool,
}

/// Score every competitive deck that can be scored.
fn score_competitive<'a, F>(decks: &'a [DeckRecord], profile: &F) -> Vec<RankedDeck<'a>>
where
    F: Fn(&DeckRecord) -> Option<PerformanceProfile>,
{
    decks
        .iter()
        .filter(|d| d.is_competitive())
        .filter_map(|deck| {
            let going = profile(deck);
            let result = score_deck(deck, going.as_ref())?;
            Some(RankedDeck {
                deck,
                score: result.score,
                incomplete: result.incomplete,
            })
        })
        .collect()
}

/// Competitive decks by composite score descending, ties by name ascending.
///
/// Returns at most `n` entries and never pads. Decks without a difficulty are
/// skipped since they cannot be scored.
pub fn top_decks<'a, F>(decks: &'a [DeckRecord], n: usize, profile: F) -> Vec<RankedDeck<'a>>
where
    F: Fn(&DeckRecord) -> Option<PerformanceProfile>,
{
    let mut ranked = score_competitive(decks, &profile);
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.deck.name.cmp(&b.deck.name))
    });
    ranked.truncate(n);
    ranked
}

/// Head-to-head verdicts among the top three: #1 vs #2, #2 vs #3, #1 vs #3.
///
/// Empty when fewer than three decks are ranked.
pub fn key_matchups<F>(ranked: &[RankedDeck<'_>], profile: F) -> Vec<MatchupVerdict>
where
    F: Fn(&DeckRecord) -> Option<PerformanceProfile>,
{
    if ranked.len() < 3 {
        return Vec::new();
    }

    [(0, 1), (1, 2), (0, 2)]
        .iter()
        .filter_map(|&(i, j)| {
            let a = ranked[i].deck;
            let b = ranked[j].deck;
            let perf_a = profile(a).unwrap_or_default();
            let perf_b = profile(b).unwrap_or_default();
            matchup_verdict(a, &perf_a, b, &perf_b)
        })
        .collect()
}

/// How many ranked decks are Tier 1
pub fn top_tier_count(ranked: &[RankedDeck<'_>]) -> usize {
    ranked
        .iter()
        .filter(|r| r.deck.tier == Some(Tier::Tier1))
        .count()
}

/// Rounded mean score of the ranked decks; 0 when there are none
pub fn average_score(ranked: &[RankedDeck<'_>]) -> i64 {
    if ranked.is_empty() {
        return 0;
    }
    let total: i64 = ranked.iter().map(|r| r.score).sum();
    round_half_up(total as f64 / ranked.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypePerformance {
    pub deck_type: DeckType,
    /// Rounded mean score, or 50 when `deck_count` is 0
    pub average: i64,
    pub deck_count: usize,
}

/// Mean composite score per archetype across competitive decks.
pub fn performance_by_type<F>(decks: &[DeckRecord], profile: F) -> Vec<TypePerformance>
where
    F: Fn(&DeckRecord) -> Option<PerformanceProfile>,
{
    let scored = score_competitive(decks, &profile);

    DeckType::ALL
        .iter()
        .map(|deck_type| {
            let scores: Vec<i64> = scored
                .iter()
                .filter(|r| r.deck.deck_type == Some(*deck_type))
                .map(|r| r.score)
                .collect();
            let average = if scores.is_empty() {
                EMPTY_TYPE_PERFORMANCE
            } else {
                round_half_up(scores.iter().sum::<i64>() as f64 / scores.len() as f64)
            };
            TypePerformance {
                deck_type: *deck_type,
                average,
                deck_count: scores.len(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaknessCount {
    pub name: String,
    pub count: usize,
}

/// Most frequently listed weaknesses across competitive decks.
///
/// Sorted by count descending, then name ascending; truncated to `limit`.
pub fn common_weaknesses<'a, I>(decks: I, limit: usize) -> Vec<WeaknessCount>
where
    I: IntoIterator<Item = &'a DeckRecord>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for deck in decks.into_iter().filter(|d| d.is_competitive()) {
        for weakness in &deck.weaknesses {
            *counts.entry(weakness.as_str()).or_default() += 1;
        }
    }

    let mut weaknesses: Vec<WeaknessCount> = counts
        .into_iter()
        .map(|(name, count)| WeaknessCount {
            name: name.to_string(),
            count,
        })
        .collect();
    // BTreeMap iteration is already name-ascending; a stable sort keeps it for ties
    weaknesses.sort_by(|a, b| b.count.cmp(&a.count));
    weaknesses.truncate(limit);
    weaknesses
}

use std::collections::BTreeSet;

use crate::deck::{DeckRecord, DeckType, Tier};
use crate::scoring::round_half_up;

/// Diversity points earned per distinct archetype
const DIVERSITY_STEP: usize = 25;

/// Deck counts per competitive tier. Rogue and Fun never appear here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierDistribution {
    counts: [usize; 3],
}

impl TierDistribution {
    fn index(tier: Tier) -> Option<usize> {
        Tier::COMPETITIVE.iter().position(|t| *t == tier)
    }

    pub fn count(&self, tier: Tier) -> usize {
        Self::index(tier).map(|i| self.counts[i]).unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// (tier, count) in fixed order Tier 1, Tier 2, Tier 3
    pub fn entries(&self) -> impl Iterator<Item = (Tier, usize)> + '_ {
        Tier::COMPETITIVE.iter().copied().zip(self.counts.iter().copied())
    }

    /// Rounded share of the competitive decks in `tier`; `None` when there are none at all
    pub fn percentage(&self, tier: Tier) -> Option<i64> {
        percentage(self.count(tier), self.total())
    }
}

/// `round(count / total * 100)`, or `None` for an empty population.
pub fn percentage(count: usize, total: usize) -> Option<i64> {
    if total == 0 {
        return None;
    }
    Some(round_half_up(count as f64 / total as f64 * 100.0))
}

/// Count competitive decks per tier.
pub fn tier_distribution<'a, I>(decks: I) -> TierDistribution
where
    I: IntoIterator<Item = &'a DeckRecord>,
{
    let mut distribution = TierDistribution::default();
    for tier in decks.into_iter().filter_map(|d| d.tier) {
        if let Some(i) = TierDistribution::index(tier) {
            distribution.counts[i] += 1;
        }
    }
    distribution
}

/// (tier, rounded share) for each competitive tier; shares are `None` when there are no decks.
pub fn tier_percentages(distribution: &TierDistribution) -> Vec<(Tier, Option<i64>)> {
    Tier::COMPETITIVE
        .iter()
        .map(|tier| (*tier, distribution.percentage(*tier)))
        .collect()
}

/// Tier with the most decks. Ties go to the first tier in Tier 1, Tier 2, Tier 3
/// order; an empty distribution has no dominant tier.
pub fn dominant_tier(distribution: &TierDistribution) -> Option<Tier> {
    let mut best: Option<(Tier, usize)> = None;
    for (tier, count) in distribution.entries() {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ if count == 0 => {}
            _ => best = Some((tier, count)),
        }
    }
    best.map(|(tier, _)| tier)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeShare {
    pub deck_type: DeckType,
    pub count: usize,
    pub percentage: Option<i64>,
}

/// Count competitive decks per archetype, in fixed order Combo, Control, Aggro, Mid-Range.
///
/// Decks with an unknown type count toward the total but not toward any archetype.
pub fn type_distribution<'a, I>(decks: I) -> Vec<TypeShare>
where
    I: IntoIterator<Item = &'a DeckRecord>,
{
    let competitive: Vec<&DeckRecord> = decks.into_iter().filter(|d| d.is_competitive()).collect();
    let total = competitive.len();

    DeckType::ALL
        .iter()
        .map(|deck_type| {
            let count = competitive
                .iter()
                .filter(|d| d.deck_type == Some(*deck_type))
                .count();
            TypeShare {
                deck_type: *deck_type,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect()
}

/// Coarse diversity metric: 25% per distinct archetype among competitive decks, capped at 100.
pub fn type_diversity<'a, I>(decks: I) -> u32
where
    I: IntoIterator<Item = &'a DeckRecord>,
{
    let distinct: BTreeSet<DeckType> = decks
        .into_iter()
        .filter(|d| d.is_competitive())
        .filter_map(|d| d.deck_type)
        .collect();
    (distinct.len() * DIVERSITY_STEP).min(100) as u32
}

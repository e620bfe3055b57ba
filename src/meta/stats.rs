use crate::deck::{DeckRecord, DeckType, PerformanceProfile, Tier};
use crate::scoring::MatchupVerdict;

use super::distribution::{
    dominant_tier, tier_distribution, type_distribution, type_diversity, TierDistribution,
    TypeShare,
};
use super::ranking::{
    common_weaknesses, key_matchups, performance_by_type, top_decks, RankedDeck,
    TypePerformance, WeaknessCount,
};

/// Mean difficulty of competitive decks that declare one; `None` when there are none.
pub fn average_difficulty<'a, I>(decks: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a DeckRecord>,
{
    let difficulties: Vec<i32> = decks
        .into_iter()
        .filter(|d| d.is_competitive())
        .filter_map(|d| d.difficulty)
        .collect();
    if difficulties.is_empty() {
        return None;
    }
    Some(difficulties.iter().sum::<i32>() as f64 / difficulties.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralStats {
    /// Averages over competitive decks that have a performance profile
    pub avg_going_first: Option<f64>,
    pub avg_going_second: Option<f64>,
    pub most_common_type: Option<DeckType>,
}

/// Going averages and the most common archetype among competitive decks.
///
/// Decks without a profile are left out of the going averages rather than
/// counted at the neutral rating. Type ties go to the first archetype in
/// Combo, Control, Aggro, Mid-Range order.
pub fn general_stats<F>(decks: &[DeckRecord], profile: F) -> GeneralStats
where
    F: Fn(&DeckRecord) -> Option<PerformanceProfile>,
{
    let competitive: Vec<&DeckRecord> = decks.iter().filter(|d| d.is_competitive()).collect();

    let profiles: Vec<PerformanceProfile> = competitive.iter().filter_map(|d| profile(*d)).collect();
    let (avg_going_first, avg_going_second) = if profiles.is_empty() {
        (None, None)
    } else {
        let n = profiles.len() as f64;
        let first: i32 = profiles.iter().map(|p| p.going_first).sum();
        let second: i32 = profiles.iter().map(|p| p.going_second).sum();
        (Some(first as f64 / n), Some(second as f64 / n))
    };

    let mut most_common_type: Option<(DeckType, usize)> = None;
    for deck_type in DeckType::ALL {
        let count = competitive
            .iter()
            .filter(|d| d.deck_type == Some(deck_type))
            .count();
        if count > most_common_type.map(|(_, c)| c).unwrap_or(0) {
            most_common_type = Some((deck_type, count));
        }
    }

    GeneralStats {
        avg_going_first,
        avg_going_second,
        most_common_type: most_common_type.map(|(t, _)| t),
    }
}

/// Rows of the competitive meta table.
///
/// `tier_filter` of Rogue or Fun yields no rows since those tiers are not part
/// of the meta. With `sort_by_tier` rows are ordered by tier, then name;
/// otherwise input order is kept.
pub fn meta_table(
    decks: &[DeckRecord],
    tier_filter: Option<Tier>,
    sort_by_tier: bool,
) -> Vec<&DeckRecord> {
    let mut rows: Vec<&DeckRecord> = decks
        .iter()
        .filter(|d| d.is_competitive())
        .filter(|d| tier_filter.is_none() || d.tier == tier_filter)
        .collect();

    if sort_by_tier {
        rows.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.name.cmp(&b.name)));
    }
    rows
}

/// Everything the meta analysis view shows, computed in one pass over the data.
#[derive(Debug, Clone)]
pub struct MetaSummary<'a> {
    pub total_decks: usize,
    pub type_diversity: u32,
    pub average_difficulty: Option<f64>,
    pub distribution: TierDistribution,
    pub dominant_tier: Option<Tier>,
    pub top_decks: Vec<RankedDeck<'a>>,
    pub key_matchups: Vec<MatchupVerdict>,
    pub type_distribution: Vec<TypeShare>,
    pub common_weaknesses: Vec<WeaknessCount>,
    pub performance_by_type: Vec<TypePerformance>,
    pub general: GeneralStats,
}

impl MetaSummary<'_> {
    pub fn is_empty(&self) -> bool {
        self.total_decks == 0
    }
}

/// Build the meta summary over the competitive subset of `decks`.
pub fn summarize<'a, F>(
    decks: &'a [DeckRecord],
    top_n: usize,
    weakness_limit: usize,
    profile: F,
) -> MetaSummary<'a>
where
    F: Fn(&DeckRecord) -> Option<PerformanceProfile>,
{
    let distribution = tier_distribution(decks);
    let top = top_decks(decks, top_n, &profile);
    let matchups = key_matchups(&top, &profile);

    MetaSummary {
        total_decks: decks.iter().filter(|d| d.is_competitive()).count(),
        type_diversity: type_diversity(decks),
        average_difficulty: average_difficulty(decks),
        dominant_tier: dominant_tier(&distribution),
        distribution,
        top_decks: top,
        key_matchups: matchups,
        type_distribution: type_distribution(decks),
        common_weaknesses: common_weaknesses(decks, weakness_limit),
        performance_by_type: performance_by_type(decks, &profile),
        general: general_stats(decks, &profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn deck(name: &str, tier: Tier, deck_type: DeckType, difficulty: i32) -> DeckRecord {
        DeckRecord {
            name: name.to_string(),
            tier: Some(tier),
            deck_type: Some(deck_type),
            difficulty: Some(difficulty),
            weaknesses: vec!["Nibiru".to_string()],
            image: None,
        }
    }

    fn sample_meta() -> Vec<DeckRecord> {
        vec![
            deck("Branded", Tier::Tier1, DeckType::Combo, 8),
            deck("Labrynth", Tier::Tier2, DeckType::Control, 6),
            deck("Snake-Eye", Tier::Tier1, DeckType::Combo, 6),
            deck("Tenpai", Tier::Tier3, DeckType::Aggro, 4),
            deck("Chimera", Tier::Rogue, DeckType::MidRange, 5),
            deck("Toons", Tier::Fun, DeckType::Aggro, 3),
        ]
    }

    #[test]
    fn test_average_difficulty() {
        let decks = sample_meta();
        // (8 + 6 + 6 + 4) / 4
        assert_eq!(average_difficulty(&decks), Some(6.0));
    }

    #[test]
    fn test_average_difficulty_no_data() {
        let decks = vec![deck("Toons", Tier::Fun, DeckType::Aggro, 3)];
        assert_eq!(average_difficulty(&decks), None);
    }

    #[test]
    fn test_general_stats_only_counts_decks_with_profiles() {
        let decks = sample_meta();
        let mut profiles = HashMap::new();
        profiles.insert("Branded".to_string(), PerformanceProfile::new(5, 2));
        profiles.insert("Tenpai".to_string(), PerformanceProfile::new(4, 3));
        profiles.insert("Toons".to_string(), PerformanceProfile::new(1, 1));

        let stats = general_stats(&decks, |d| profiles.get(&d.name).copied());
        assert_eq!(stats.avg_going_first, Some(4.5));
        assert_eq!(stats.avg_going_second, Some(2.5));
        assert_eq!(stats.most_common_type, Some(DeckType::Combo));
    }

    #[test]
    fn test_general_stats_empty() {
        let stats = general_stats(&[], |_| None);
        assert_eq!(stats.avg_going_first, None);
        assert_eq!(stats.avg_going_second, None);
        assert_eq!(stats.most_common_type, None);
    }

    #[test]
    fn test_most_common_type_tie_uses_fixed_order() {
        let decks = vec![
            deck("A", Tier::Tier1, DeckType::Aggro, 5),
            deck("B", Tier::Tier1, DeckType::Control, 5),
        ];
        let stats = general_stats(&decks, |_| None);
        assert_eq!(stats.most_common_type, Some(DeckType::Control));
    }

    #[test]
    fn test_meta_table_competitive_only() {
        let decks = sample_meta();
        let rows = meta_table(&decks, None, false);
        let names: Vec<&str> = rows.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Branded", "Labrynth", "Snake-Eye", "Tenpai"]);
    }

    #[test]
    fn test_meta_table_tier_filter() {
        let decks = sample_meta();
        let rows = meta_table(&decks, Some(Tier::Tier1), false);
        assert_eq!(rows.len(), 2);
        assert!(meta_table(&decks, Some(Tier::Rogue), false).is_empty());
        assert!(meta_table(&decks, Some(Tier::Fun), false).is_empty());
    }

    #[test]
    fn test_meta_table_sort_by_tier() {
        let decks = sample_meta();
        let rows = meta_table(&decks, None, true);
        let names: Vec<&str> = rows.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Branded", "Snake-Eye", "Labrynth", "Tenpai"]);
    }

    #[test]
    fn test_summarize() {
        let decks = sample_meta();
        let summary = summarize(&decks, 5, 5, |_| None);

        assert_eq!(summary.total_decks, 4);
        assert!(!summary.is_empty());
        assert_eq!(summary.type_diversity, 75);
        assert_eq!(summary.dominant_tier, Some(Tier::Tier1));
        assert_eq!(summary.distribution.count(Tier::Tier1), 2);
        assert_eq!(summary.top_decks.len(), 4);
        assert_eq!(summary.key_matchups.len(), 3);
        assert_eq!(summary.common_weaknesses[0].count, 4);
        assert_eq!(summary.performance_by_type.len(), 4);
    }

    #[test]
    fn test_summarize_empty_meta() {
        let decks = vec![deck("Toons", Tier::Fun, DeckType::Aggro, 3)];
        let summary = summarize(&decks, 5, 5, |_| None);
        assert!(summary.is_empty());
        assert_eq!(summary.type_diversity, 0);
        assert_eq!(summary.average_difficulty, None);
        assert_eq!(summary.dominant_tier, None);
        assert!(summary.top_decks.is_empty());
        assert!(summary.key_matchups.is_empty());
        assert!(summary.common_weaknesses.is_empty());
    }
}

pub mod distribution;
pub mod ranking;
pub mod stats;

pub use distribution::{
    dominant_tier, percentage, tier_distribution, tier_percentages, type_distribution,
    type_diversity, TierDistribution, TypeShare,
};
pub use ranking::{
    average_score, common_weaknesses, key_matchups, performance_by_type, top_decks,
    top_tier_count, RankedDeck,
    TypePerformance, WeaknessCount, DEFAULT_TOP_N,
};
pub use stats::{average_difficulty, general_stats, meta_table, summarize, GeneralStats, MetaSummary};

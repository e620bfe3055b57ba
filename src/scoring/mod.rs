pub mod engine;
pub mod matchup;
pub mod weights;

pub use engine::{composite_score, score_deck, ScoreBreakdown, ScoreResult, TermContribution};
pub use matchup::{
    favored_by_scores, matchup_tactics, matchup_tips, matchup_verdict, Favored, MatchupTactics,
    MatchupVerdict, FAVORED_THRESHOLD,
};
pub use weights::{difficulty_penalty, performance_score, round_half_up, tier_weight};

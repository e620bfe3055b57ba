use super::weights::{
    difficulty_penalty, performance_score, round_half_up, tier_weight, DIFFICULTY_STEP,
};
use crate::deck::{DeckRecord, PerformanceProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct TermContribution {
    pub label: String,       // e.g. "Tier", "Difficulty", "Performance"
    pub description: String, // e.g. "Tier 1 -> 85", "8/10 -> 100 - 56"
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub terms: Vec<TermContribution>,
    pub sum: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: i64,
    /// Set when the performance profile was defaulted rather than supplied
    pub incomplete: bool,
    pub breakdown: ScoreBreakdown,
}

/// Unrounded mean of the three terms.
fn raw_score(deck: &DeckRecord, performance: &PerformanceProfile) -> Option<(f64, ScoreBreakdown)> {
    let difficulty = deck.difficulty?;

    let tier = tier_weight(deck.tier) as f64;
    let penalty = difficulty_penalty(difficulty) as f64;
    let perf = performance_score(performance.going_first, performance.going_second);

    let terms = vec![
        TermContribution {
            label: "Tier".to_string(),
            description: format!("{} -> {}", deck.tier_label(), tier),
            value: tier,
        },
        TermContribution {
            label: "Difficulty".to_string(),
            description: format!(
                "{}/10 -> 100 - {}",
                difficulty,
                i64::from(difficulty) * i64::from(DIFFICULTY_STEP)
            ),
            value: penalty,
        },
        TermContribution {
            label: "Performance".to_string(),
            description: format!(
                "({} + {}) / 2 x 15",
                performance.going_first, performance.going_second
            ),
            value: perf,
        },
    ];
    let sum = tier + penalty + perf;

    Some((sum / 3.0, ScoreBreakdown { terms, sum }))
}

/// Canonical deck strength score: `round((tier + difficulty + performance) / 3)`.
///
/// Returns `None` when the deck has no difficulty, since the score is not
/// computable without it. The three terms are averaged unweighted.
pub fn composite_score(deck: &DeckRecord, performance: &PerformanceProfile) -> Option<i64> {
    raw_score(deck, performance).map(|(mean, _)| round_half_up(mean))
}

/// Composite score with its per-term breakdown.
///
/// `performance` is the deck's overlay if one exists; `None` falls back to the
/// neutral {3, 3} profile and marks the result incomplete.
pub fn score_deck(deck: &DeckRecord, performance: Option<&PerformanceProfile>) -> Option<ScoreResult> {
    let defaulted = PerformanceProfile::default();
    let profile = performance.unwrap_or(&defaulted);
    let (mean, breakdown) = raw_score(deck, profile)?;

    Some(ScoreResult {
        score: round_half_up(mean),
        incomplete: performance.is_none(),
        breakdown,
    })
}

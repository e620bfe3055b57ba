use crate::deck::Tier;

/// Weight used when a deck's tier is missing or unrecognised
pub const UNKNOWN_TIER_WEIGHT: i32 = 50;

/// Points lost per difficulty level
pub const DIFFICULTY_STEP: i32 = 7;

/// Scale applied to the averaged going ratings
pub const PERFORMANCE_SCALE: f64 = 15.0;

/// Competitive-strength weight of a tier.
///
/// Strictly descending: Tier 1 = 85, Tier 2 = 70, Tier 3 = 55, Rogue = 40, Fun = 25.
pub fn tier_weight(tier: Option<Tier>) -> i32 {
    match tier {
        Some(Tier::Tier1) => 85,
        Some(Tier::Tier2) => 70,
        Some(Tier::Tier3) => 55,
        Some(Tier::Rogue) => 40,
        Some(Tier::Fun) => 25,
        None => UNKNOWN_TIER_WEIGHT,
    }
}

/// `100 - difficulty * 7`.
///
/// Not clamped: a difficulty outside 1-10 yields a penalty outside [30, 93].
/// Range checks belong to the loader.
pub fn difficulty_penalty(difficulty: i32) -> i64 {
    100 - i64::from(difficulty) * i64::from(DIFFICULTY_STEP)
}

/// Average of the two going ratings scaled by 15; [15, 75] for ratings in 1-5.
pub fn performance_score(going_first: i32, going_second: i32) -> f64 {
    ((f64::from(going_first) + f64::from(going_second)) / 2.0) * PERFORMANCE_SCALE
}

/// Round half up, the way `Math.round` does (-2.5 rounds to -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

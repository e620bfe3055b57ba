use super::types::Tier;
use crate::scoring::tier_weight;

/// Which side of the coin flip a going rating describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Going {
    First,
    Second,
}

/// Human-readable difficulty band for a 1-10 difficulty
pub fn difficulty_label(difficulty: i32) -> &'static str {
    if difficulty <= 3 {
        "Easy - ideal for beginners"
    } else if difficulty <= 6 {
        "Moderate - needs practice"
    } else if difficulty <= 8 {
        "Hard - for experienced players"
    } else {
        "Very hard - experts only"
    }
}

/// Rating band for a composite score
pub fn score_rating(score: i64) -> &'static str {
    if score >= 80 {
        "Excellent"
    } else if score >= 60 {
        "Good"
    } else {
        "Regular"
    }
}

/// Star recommendation (1-5) from tier and average going rating.
///
/// An unknown tier only earns stars through its rating.
pub fn recommendation_stars(tier: Option<Tier>, avg_going: f64) -> u8 {
    match tier {
        Some(Tier::Tier1) if avg_going >= 4.0 => 5,
        Some(Tier::Tier1) => 4,
        Some(Tier::Tier2) if avg_going >= 3.5 => 4,
        Some(Tier::Tier2) | Some(Tier::Rogue) => 3,
        Some(Tier::Fun) => 2,
        _ if avg_going >= 3.0 => 2,
        _ => 1,
    }
}

/// One-line advice from tier, average going rating and difficulty.
///
/// Weighs tier / 25, 0.6 per going point and 0.1 per point of difficulty
/// below 10, then buckets at 4, 2.5 and 1.5.
pub fn simple_recommendation(tier: Option<Tier>, avg_going: f64, difficulty: i32) -> &'static str {
    let score = f64::from(tier_weight(tier)) / 25.0
        + avg_going * 0.6
        + (10.0 - f64::from(difficulty)) * 0.1;
    if score >= 4.0 {
        "Highly recommended for competitive players"
    } else if score >= 2.5 {
        "Solid deck, a good pick for intermediate players"
    } else if score >= 1.5 {
        "Viable for players who know the archetype"
    } else {
        "Casual deck, made for friendly games"
    }
}

/// High (7+), medium (4-6) or low description of a 1-10 stat.
///
/// Unknown stat names get a generic label.
pub fn stat_description(stat: &str, value: i32) -> &'static str {
    let [high, medium, low] = match stat {
        "attack" => ["High OTK potential", "Moderate damage", "Limited damage"],
        "control" => ["Full control of the field", "Moderate control", "Limited control"],
        "consistency" => ["Very consistent", "Average consistency", "Inconsistent"],
        "board_break" => [
            "Breaks boards easily",
            "Breaks boards moderately",
            "Struggles to break boards",
        ],
        "versatility" => ["Very versatile", "Average versatility", "Not very versatile"],
        "resilience" => ["Very resilient", "Average resilience", "Little resilience"],
        "recovery" => ["Excellent recovery", "Decent recovery", "Poor recovery"],
        _ => return "Standard performance",
    };
    if value >= 7 {
        high
    } else if value >= 4 {
        medium
    } else {
        low
    }
}

const GOING_FIRST: [&str; 5] = [
    "Passive play, waits for the opponent's turn",
    "Basic setup without much pressure",
    "Decent setup with some interaction",
    "Strong setup with significant interaction",
    "Near-unbreakable setup with multiple interruptions",
];

const GOING_SECOND: [&str; 5] = [
    "Struggles to break established boards",
    "Limited ability to respond",
    "Can break moderate setups",
    "Good board-breaking potential",
    "Excellent board breaking",
];

/// Description of a 1-5 going rating
pub fn going_label(going: Going, rating: i32) -> &'static str {
    let texts = match going {
        Going::First => &GOING_FIRST,
        Going::Second => &GOING_SECOND,
    };
    usize::try_from(rating - 1)
        .ok()
        .and_then(|i| texts.get(i))
        .copied()
        .unwrap_or("Standard performance")
}

/// Render a rating as filled and empty stars, e.g. "★★★☆☆"
pub fn stars(rating: u8, max: u8) -> String {
    let filled = rating.min(max) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(max as usize - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_bands() {
        assert!(difficulty_label(1).starts_with("Easy"));
        assert!(difficulty_label(3).starts_with("Easy"));
        assert!(difficulty_label(4).starts_with("Moderate"));
        assert!(difficulty_label(6).starts_with("Moderate"));
        assert!(difficulty_label(7).starts_with("Hard"));
        assert!(difficulty_label(8).starts_with("Hard"));
        assert!(difficulty_label(9).starts_with("Very hard"));
        assert!(difficulty_label(10).starts_with("Very hard"));
    }

    #[test]
    fn test_score_rating_bands() {
        assert_eq!(score_rating(86), "Excellent");
        assert_eq!(score_rating(80), "Excellent");
        assert_eq!(score_rating(79), "Good");
        assert_eq!(score_rating(60), "Good");
        assert_eq!(score_rating(59), "Regular");
    }

    #[test]
    fn test_recommendation_stars() {
        assert_eq!(recommendation_stars(Some(Tier::Tier1), 4.5), 5);
        assert_eq!(recommendation_stars(Some(Tier::Tier1), 3.0), 4);
        assert_eq!(recommendation_stars(Some(Tier::Tier2), 3.5), 4);
        assert_eq!(recommendation_stars(Some(Tier::Tier2), 3.0), 3);
        assert_eq!(recommendation_stars(Some(Tier::Rogue), 5.0), 3);
        assert_eq!(recommendation_stars(Some(Tier::Tier3), 3.0), 2);
        assert_eq!(recommendation_stars(Some(Tier::Tier3), 2.5), 1);
        assert_eq!(recommendation_stars(Some(Tier::Fun), 1.0), 2);
        assert_eq!(recommendation_stars(None, 1.0), 1);
    }

    #[test]
    fn test_simple_recommendation_buckets() {
        // 3.4 + 2.1 + 0.2 = 5.7
        assert_eq!(
            simple_recommendation(Some(Tier::Tier1), 3.5, 8),
            "Highly recommended for competitive players"
        );
        // 2.2 + 0.6 + 0.0 = 2.8
        assert_eq!(
            simple_recommendation(Some(Tier::Tier3), 1.0, 10),
            "Solid deck, a good pick for intermediate players"
        );
        // 1.0 + 0.6 + 0.0 = 1.6
        assert_eq!(
            simple_recommendation(Some(Tier::Fun), 1.0, 10),
            "Viable for players who know the archetype"
        );
        // 1.0 + 0.6 - 1.0 = 0.6
        assert_eq!(
            simple_recommendation(Some(Tier::Fun), 1.0, 20),
            "Casual deck, made for friendly games"
        );
    }

    #[test]
    fn test_simple_recommendation_extreme_difficulty() {
        assert_eq!(
            simple_recommendation(None, 3.0, i32::MAX),
            "Casual deck, made for friendly games"
        );
    }

    #[test]
    fn test_stat_description_bands() {
        assert_eq!(stat_description("consistency", 9), "Very consistent");
        assert_eq!(stat_description("consistency", 7), "Very consistent");
        assert_eq!(stat_description("consistency", 6), "Average consistency");
        assert_eq!(stat_description("consistency", 4), "Average consistency");
        assert_eq!(stat_description("consistency", 3), "Inconsistent");
        assert_eq!(stat_description("board_break", 1), "Struggles to break boards");
        assert_eq!(stat_description("speed", 9), "Standard performance");
    }

    #[test]
    fn test_going_label_in_range() {
        assert_eq!(going_label(Going::First, 5), GOING_FIRST[4]);
        assert_eq!(going_label(Going::Second, 1), GOING_SECOND[0]);
    }

    #[test]
    fn test_going_label_out_of_range() {
        assert_eq!(going_label(Going::First, 0), "Standard performance");
        assert_eq!(going_label(Going::Second, 6), "Standard performance");
        assert_eq!(going_label(Going::Second, -3), "Standard performance");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3, 5), "★★★☆☆");
        assert_eq!(stars(0, 5), "☆☆☆☆☆");
        assert_eq!(stars(7, 5), "★★★★★");
    }
}

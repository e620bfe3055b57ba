use super::engine::composite_score;
use crate::deck::{DeckRecord, PerformanceProfile, Tier};

/// Minimum score gap, exclusive, before one deck is declared favored
pub const FAVORED_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Favored {
    Deck1,
    Deck2,
    Even,
}

impl Favored {
    /// The same verdict seen from the other side of the table
    pub fn mirrored(self) -> Self {
        match self {
            Favored::Deck1 => Favored::Deck2,
            Favored::Deck2 => Favored::Deck1,
            Favored::Even => Favored::Even,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupVerdict {
    pub deck1: String,
    pub deck2: String,
    pub favored: Favored,
    pub score_deck1: i64,
    pub score_deck2: i64,
}

impl MatchupVerdict {
    /// Name of the favored deck, or "even"
    pub fn favored_name(&self) -> &str {
        match self.favored {
            Favored::Deck1 => &self.deck1,
            Favored::Deck2 => &self.deck2,
            Favored::Even => "even",
        }
    }

    pub fn score_gap(&self) -> i64 {
        (self.score_deck1 - self.score_deck2).abs()
    }
}

/// Decide which of two scores is favored. The dead zone is inclusive:
/// a gap of exactly 10 stays even.
pub fn favored_by_scores(score1: i64, score2: i64) -> Favored {
    if score1 > score2 + FAVORED_THRESHOLD {
        Favored::Deck1
    } else if score2 > score1 + FAVORED_THRESHOLD {
        Favored::Deck2
    } else {
        Favored::Even
    }
}

fn off_meta(tier: Option<Tier>) -> bool {
    matches!(tier, Some(Tier::Rogue) | Some(Tier::Fun))
}

/// Game plan for each side of a matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchupTactics {
    pub deck1_plan: &'static str,
    pub deck1_defense: &'static str,
    pub deck2_plan: &'static str,
    pub deck2_defense: &'static str,
}

/// Plans per side. A Rogue or Fun deck plays on surprise, and its opponent
/// is told to expect the unusual.
pub fn matchup_tactics(tier1: Option<Tier>, tier2: Option<Tier>) -> MatchupTactics {
    let mut tactics = MatchupTactics {
        deck1_plan: "Apply constant pressure",
        deck1_defense: "Keep resources for the long game",
        deck2_plan: "Look for an early advantage",
        deck2_defense: "Protect your key pieces",
    };
    if off_meta(tier1) {
        tactics.deck1_plan = "Use the surprise factor";
        tactics.deck1_defense = "Play around the known meta";
    }
    if off_meta(tier2) {
        tactics.deck2_plan = "Don't underestimate the opponent";
        tactics.deck2_defense = "Prepare for unusual strategies";
    }
    tactics
}

/// Advice lines for a verdict, written for the favored side when there is one
/// and for the underdog otherwise.
pub fn matchup_tips(
    verdict: &MatchupVerdict,
    tier1: Option<Tier>,
    tier2: Option<Tier>,
) -> Vec<String> {
    let (deck1, deck2) = (&verdict.deck1, &verdict.deck2);
    let mut tips = Vec::new();
    match verdict.favored {
        Favored::Even => {
            tips.push("The side deck will decide this matchup".to_string());
            tips.push("Favor consistency over raw power".to_string());
            tips.push("Study your opponent's play style".to_string());
            tips.push("Don't underestimate tech cards".to_string());
        }
        Favored::Deck1 => {
            tips.push(format!("As {}, keep the pressure on", deck1));
            tips.push("Avoid overextending into board breakers".to_string());
            tips.push(format!("Side specifically against {}", deck2));
            if off_meta(tier2) {
                tips.push(format!("Expect unusual lines from {}", deck2));
            }
        }
        Favored::Deck2 => {
            tips.push(format!("As {}, look to break the opening setup", deck2));
            tips.push("Play conservatively until you are ahead on cards".to_string());
            tips.push("Find and attack their weak points".to_string());
            if off_meta(tier1) {
                tips.push(format!("Don't underestimate the surprise factor of {}", deck1));
            }
        }
    }
    tips
}

/// Head-to-head verdict from the two composite scores.
///
/// `None` if either deck's score is not computable.
pub fn matchup_verdict(
    deck1: &DeckRecord,
    perf1: &PerformanceProfile,
    deck2: &DeckRecord,
    perf2: &PerformanceProfile,
) -> Option<MatchupVerdict> {
    let score_deck1 = composite_score(deck1, perf1)?;
    let score_deck2 = composite_score(deck2, perf2)?;

    Some(MatchupVerdict {
        deck1: deck1.name.clone(),
        deck2: deck2.name.clone(),
        favored: favored_by_scores(score_deck1, score_deck2),
        score_deck1,
        score_deck2,
    })
}

use std::collections::BTreeMap;

use crate::deck::{DeckExtra, DeckRecord, DeckType, PerformanceProfile, Tier};
use crate::reference::{Handtrap, SideDeckCard};
use crate::scoring::{score_deck, ScoreResult};

/// Where the loaded reference data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Files,
    Fallback,
}

/// Reference data loaded once and passed explicitly to whoever needs it.
#[derive(Debug, Clone)]
pub struct MetaData {
    decks: Vec<DeckRecord>,
    extras: BTreeMap<String, DeckExtra>,
    side_in: BTreeMap<String, Vec<String>>,
    side_cards: Vec<SideDeckCard>,
    handtraps: Vec<Handtrap>,
    source: DataSource,
    warnings: Vec<String>,
}

impl MetaData {
    /// Assemble a repository. Decks are kept in name-ascending order.
    pub fn new(
        mut decks: Vec<DeckRecord>,
        extras: BTreeMap<String, DeckExtra>,
        side_in: BTreeMap<String, Vec<String>>,
        side_cards: Vec<SideDeckCard>,
        handtraps: Vec<Handtrap>,
        source: DataSource,
    ) -> Self {
        decks.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            decks,
            extras,
            side_in,
            side_cards,
            handtraps,
            source,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    /// Validation warnings collected while loading
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn decks(&self) -> &[DeckRecord] {
        &self.decks
    }

    pub fn side_cards(&self) -> &[SideDeckCard] {
        &self.side_cards
    }

    pub fn handtraps(&self) -> &[Handtrap] {
        &self.handtraps
    }

    /// Exact name lookup
    pub fn deck(&self, name: &str) -> Option<&DeckRecord> {
        self.decks.iter().find(|d| d.name == name)
    }

    pub fn extra(&self, name: &str) -> Option<&DeckExtra> {
        self.extras.get(name)
    }

    /// The deck's declared performance profile, if it has one
    pub fn profile_of(&self, deck: &DeckRecord) -> Option<PerformanceProfile> {
        self.extras.get(&deck.name).and_then(|e| e.going)
    }

    /// Performance profile used for scoring, and whether it was defaulted
    pub fn performance(&self, name: &str) -> (PerformanceProfile, bool) {
        match self.extras.get(name).and_then(|e| e.going) {
            Some(profile) => (profile, false),
            None => (PerformanceProfile::default(), true),
        }
    }

    /// Cards to side in for this deck's matchups
    pub fn side_in(&self, name: &str) -> &[String] {
        self.side_in.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Composite score with breakdown; `None` if the deck is unknown or cannot be scored
    pub fn score(&self, name: &str) -> Option<ScoreResult> {
        let deck = self.deck(name)?;
        score_deck(deck, self.profile_of(deck).as_ref())
    }

    /// First deck (in name order) whose name contains `query`, ignoring case.
    ///
    /// An exact case-insensitive match wins over a substring match.
    pub fn find_deck(&self, query: &str) -> Option<&DeckRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.decks
            .iter()
            .find(|d| d.name.to_lowercase() == needle)
            .or_else(|| self.decks.iter().find(|d| d.name.to_lowercase().contains(&needle)))
    }

    /// Up to `limit` deck names containing `query`, ignoring case
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.decks
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&needle))
            .map(|d| d.name.as_str())
            .take(limit)
            .collect()
    }

    /// Browse filter over every deck, Rogue and Fun included
    pub fn filter(&self, tier: Option<Tier>, deck_type: Option<DeckType>) -> Vec<&DeckRecord> {
        self.decks
            .iter()
            .filter(|d| tier.is_none() || d.tier == tier)
            .filter(|d| deck_type.is_none() || d.deck_type == deck_type)
            .collect()
    }

    /// Decks counted in meta statistics
    pub fn competitive(&self) -> Vec<&DeckRecord> {
        self.decks.iter().filter(|d| d.is_competitive()).collect()
    }
}

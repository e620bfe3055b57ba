pub mod labels;
pub mod types;

pub use labels::{
    difficulty_label, going_label, recommendation_stars, score_rating, simple_recommendation, stars,
    stat_description, Going,
};
pub use types::{DeckExtra, DeckRecord, DeckType, PerformanceProfile, Tier};

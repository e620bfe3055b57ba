pub mod compare;
pub mod config;
pub mod data;
pub mod deck;
pub mod meta;
pub mod output;
pub mod prefs;
pub mod reference;
pub mod scoring;

use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::fallback::fallback_data;
use super::repository::{DataSource, MetaData};
use super::validation::{validate_deck, validate_extra, RawDeck, RawExtra, RawMatchup};
use crate::reference::{Handtrap, SideDeckCard};

pub const DECKS_FILE: &str = "decks.json";
pub const ADDITIONAL_FILE: &str = "additional.json";
pub const MATCHUPS_FILE: &str = "matchups.json";
pub const SIDEDECK_FILE: &str = "sidedeck-cards.json";
pub const HANDTRAPS_FILE: &str = "handtraps.json";

/// Read and parse a JSON document. `Ok(None)` if the file does not exist.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}: invalid JSON", path.display()))?;
    Ok(Some(value))
}

/// Read an optional document, treating absence or a parse failure as empty.
fn read_optional<T: DeserializeOwned + Default>(path: &Path, warnings: &mut Vec<String>) -> T {
    match read_json(path) {
        Ok(Some(value)) => {
            debug!("Loaded {}", path.display());
            value
        }
        Ok(None) => {
            debug!("{} not found, using empty data", path.display());
            T::default()
        }
        Err(e) => {
            warnings.push(format!("{:#}", e));
            T::default()
        }
    }
}

/// Build a repository from raw documents, validating every deck and overlay.
///
/// A deck entry that is not an object is still listed, with every field
/// missing. An overlay that is not an object is skipped. Both are reported as
/// warnings instead of failing the whole document.
pub fn build_meta_data(
    raw_decks: BTreeMap<String, serde_json::Value>,
    raw_extras: BTreeMap<String, serde_json::Value>,
    raw_matchups: BTreeMap<String, RawMatchup>,
    side_cards: Vec<SideDeckCard>,
    handtraps: Vec<Handtrap>,
    source: DataSource,
) -> MetaData {
    let mut warnings = Vec::new();

    let mut decks = Vec::with_capacity(raw_decks.len());
    for (name, value) in raw_decks {
        let raw = match serde_json::from_value::<RawDeck>(value) {
            Ok(raw) => raw,
            Err(e) => {
                warnings.push(format!("decks.{}: {}, all fields treated as missing", name, e));
                RawDeck::default()
            }
        };
        let (deck, deck_warnings) = validate_deck(&name, raw);
        warnings.extend(deck_warnings);
        decks.push(deck);
    }

    let mut extras = BTreeMap::new();
    for (name, value) in raw_extras {
        match serde_json::from_value::<RawExtra>(value) {
            Ok(raw) => {
                let (extra, extra_warnings) = validate_extra(&name, raw);
                warnings.extend(extra_warnings);
                extras.insert(name, extra);
            }
            Err(e) => warnings.push(format!("additional.{}: skipped, {}", name, e)),
        }
    }

    let side_in = raw_matchups
        .into_iter()
        .map(|(name, m)| (name, m.side_in))
        .collect();

    MetaData::new(decks, extras, side_in, side_cards, handtraps, source).with_warnings(warnings)
}

/// Load all documents from `dir`, failing if `decks.json` is missing or unreadable.
///
/// The other documents are optional and default to empty.
pub fn try_load_data(dir: &Path) -> Result<MetaData> {
    let decks_path = dir.join(DECKS_FILE);
    let raw_decks: BTreeMap<String, serde_json::Value> = read_json(&decks_path)?
        .with_context(|| format!("Deck data not found at {}", decks_path.display()))?;

    let mut load_warnings = Vec::new();
    let raw_extras = read_optional(&dir.join(ADDITIONAL_FILE), &mut load_warnings);
    let raw_matchups = read_optional(&dir.join(MATCHUPS_FILE), &mut load_warnings);
    let side_cards = read_optional(&dir.join(SIDEDECK_FILE), &mut load_warnings);
    let handtraps = read_optional(&dir.join(HANDTRAPS_FILE), &mut load_warnings);

    let data = build_meta_data(
        raw_decks,
        raw_extras,
        raw_matchups,
        side_cards,
        handtraps,
        DataSource::Files,
    );
    load_warnings.extend(data.warnings().iter().cloned());
    Ok(data.with_warnings(load_warnings))
}

/// Load all documents from `dir`, falling back to built-in example data when
/// the deck list cannot be loaded. Validation warnings are logged.
pub fn load_data(dir: &Path) -> MetaData {
    let data = match try_load_data(dir) {
        Ok(data) => data,
        Err(e) => {
            error!("Error loading data: {:#}", e);
            warn!("Using built-in example data");
            fallback_data()
        }
    };
    log_load_report(&data);
    data
}

/// Log validation warnings and a one-line summary of what was loaded
pub fn log_load_report(data: &MetaData) {
    for warning in data.warnings() {
        warn!("{}", warning);
    }
    info!(
        "Loaded {} decks, {} side-deck cards, {} handtraps ({:?})",
        data.decks().len(),
        data.side_cards().len(),
        data.handtraps().len(),
        data.source()
    );
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::meta::DEFAULT_TOP_N;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_WEAKNESS_LIMIT: usize = 5;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Top-level configuration.
///
/// Example YAML:
/// ```yaml
/// data_dir: "./data"
/// meta:
///   top_n: 5
///   weakness_limit: 5
/// search:
///   suggestion_limit: 10
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the JSON documents (default: ./data)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub meta: Option<MetaConfig>,

    #[serde(default)]
    pub search: Option<SearchConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MetaConfig {
    /// Size of the top-decks ranking (default: 5)
    #[serde(default)]
    pub top_n: Option<usize>,

    /// Size of the common-weakness list (default: 5)
    #[serde(default)]
    pub weakness_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum number of name suggestions (default: 10)
    #[serde(default)]
    pub suggestion_limit: Option<usize>,
}

impl Config {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub fn top_n(&self) -> usize {
        self.meta
            .as_ref()
            .and_then(|m| m.top_n)
            .unwrap_or(DEFAULT_TOP_N)
    }

    pub fn weakness_limit(&self) -> usize {
        self.meta
            .as_ref()
            .and_then(|m| m.weakness_limit)
            .unwrap_or(DEFAULT_WEAKNESS_LIMIT)
    }

    pub fn suggestion_limit(&self) -> usize {
        self.search
            .as_ref()
            .and_then(|s| s.suggestion_limit)
            .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
    }
}

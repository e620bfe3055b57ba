use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, warn};
use std::path::PathBuf;

use deck_meta::compare::compare_decks;
use deck_meta::config::{load_config, validate_config};
use deck_meta::data::{load_data, log_load_report, try_load_data, MetaData};
use deck_meta::deck::{DeckRecord, DeckType, Tier};
use deck_meta::meta::{meta_table, summarize, top_decks};
use deck_meta::output::{
    detect_mode, format_analysis, format_comparison, format_deck_detail, format_deck_list,
    format_handtrap_list, format_meta_table, format_ranked_table, format_side_cards,
    format_suggestions, format_tsv, should_use_colors, Style,
};
use deck_meta::prefs::{get_prefs_path, load_prefs, save_prefs, ThemeMode};
use deck_meta::reference::{filter_side_cards, handtrap_tier_list};

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_LOOKUP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse all decks with their scores (default if no subcommand)
    List {
        /// Tier filter: 1, 2, 3, rogue or fun
        #[arg(long)]
        tier: Option<String>,
        /// Archetype filter: combo, control, aggro or mid-range
        #[arg(long = "type")]
        deck_type: Option<String>,
    },
    /// Show one deck in detail
    Show {
        /// Deck name or part of it (case-insensitive)
        query: String,
    },
    /// Suggest deck names matching a partial query
    Search {
        query: String,
        /// Maximum number of suggestions (defaults to search.suggestion_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Competitive meta table (Tier 1-3 only)
    Meta {
        /// Tier filter: 1, 2 or 3
        #[arg(long)]
        tier: Option<String>,
        /// Sort rows by tier, then name
        #[arg(long)]
        sort_tier: bool,
    },
    /// Meta analysis: distribution, top decks, key matchups, weaknesses
    Analysis,
    /// Top decks by composite score
    Top {
        /// Number of decks to show (defaults to meta.top_n)
        #[arg(short, long)]
        n: Option<usize>,
        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Compare two decks category by category
    Compare { deck1: String, deck2: String },
    /// Side-deck reference cards
    Side {
        /// Role filter: handtrap, board-breaker, floodgate or removal
        #[arg(long)]
        role: Option<String>,
    },
    /// Handtrap tier list
    Handtraps {
        /// Format filter, e.g. master-duel, tcg or ocg
        #[arg(long)]
        format: Option<String>,
    },
    /// Show or change the color theme
    Theme {
        #[arg(long, value_enum)]
        mode: Option<ThemeMode>,
        #[arg(long)]
        palette: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "deck-meta")]
#[command(about = "Card-game meta deck scoring and matchup CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/deck-meta/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory holding the JSON data files (overrides data_dir from config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value = "auto")]
    color: ColorChoice,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Resolve a deck query or exit with a lookup error
fn find_or_exit<'a>(data: &'a MetaData, query: &str, suggestion_limit: usize) -> &'a DeckRecord {
    match data.find_deck(query) {
        Some(deck) => deck,
        None => {
            eprintln!("Deck '{}' not found", query);
            let words: Vec<&str> = query.split_whitespace().collect();
            let mut suggestions: Vec<&str> = Vec::new();
            for word in words {
                for name in data.suggest(word, suggestion_limit) {
                    if !suggestions.contains(&name) && suggestions.len() < suggestion_limit {
                        suggestions.push(name);
                    }
                }
            }
            if !suggestions.is_empty() {
                eprintln!("Did you mean: {}", suggestions.join(", "));
            }
            std::process::exit(EXIT_LOOKUP);
        }
    }
}

fn parse_tier_filter(value: Option<&str>) -> Option<Tier> {
    let value = value?;
    match Tier::from_filter(value) {
        Some(tier) => Some(tier),
        None => {
            eprintln!("Unknown tier '{}' (expected 1, 2, 3, rogue or fun)", value);
            std::process::exit(EXIT_LOOKUP);
        }
    }
}

fn parse_type_filter(value: Option<&str>) -> Option<DeckType> {
    let value = value?;
    match DeckType::from_filter(value) {
        Some(deck_type) => Some(deck_type),
        None => {
            eprintln!(
                "Unknown type '{}' (expected combo, control, aggro or mid-range)",
                value
            );
            std::process::exit(EXIT_LOOKUP);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose && std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "debug");
    }
    sensible_env_logger::init!();

    let command = cli.command.unwrap_or(Commands::List {
        tier: None,
        deck_type: None,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Theme preferences
    let prefs_path = get_prefs_path();
    let prefs_exist = prefs_path.exists();
    let mut prefs = match load_prefs(&prefs_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Preferences error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Commands::Theme { mode, ref palette } = command {
        if mode.is_none() && palette.is_none() {
            println!("mode: {}\npalette: {}", prefs.mode, prefs.palette);
            std::process::exit(EXIT_SUCCESS);
        }
        if prefs.update(mode, palette.clone()) {
            if let Err(e) = save_prefs(&prefs_path, &prefs) {
                eprintln!("Failed to save preferences: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            debug!("Saved preferences to {}", prefs_path.display());
        }
        println!("mode: {}\npalette: {}", prefs.mode, prefs.palette);
        std::process::exit(EXIT_SUCCESS);
    }

    let use_colors = match cli.color {
        ColorChoice::Auto => should_use_colors(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    // Without a saved preference, follow the terminal background
    let mode = if prefs_exist || !use_colors {
        prefs.mode
    } else {
        detect_mode().unwrap_or(prefs.mode)
    };
    let style = Style::new(use_colors, mode);

    // Load data. An explicit --data-dir must load; the configured one may fall back.
    let data = match cli.data_dir {
        Some(dir) => match try_load_data(&dir) {
            Ok(data) => {
                log_load_report(&data);
                data
            }
            Err(e) => {
                eprintln!("Data error: {:#}", e);
                std::process::exit(EXIT_DATA);
            }
        },
        None => load_data(&config.data_dir()),
    };
    if data.decks().is_empty() {
        warn!("No decks loaded");
    }

    let profile = |d: &DeckRecord| data.profile_of(d);
    let suggestion_limit = config.suggestion_limit();

    let output = match command {
        Commands::List { tier, deck_type } => {
            let tier = parse_tier_filter(tier.as_deref());
            let deck_type = parse_type_filter(deck_type.as_deref());
            format_deck_list(&data, &data.filter(tier, deck_type), &style)
        }
        Commands::Show { query } => {
            let deck = find_or_exit(&data, &query, suggestion_limit);
            format_deck_detail(&data, deck, &style)
        }
        Commands::Search { query, limit } => {
            let names = data.suggest(&query, limit.unwrap_or(suggestion_limit));
            format_suggestions(&query, &names)
        }
        Commands::Meta { tier, sort_tier } => {
            let tier = parse_tier_filter(tier.as_deref());
            format_meta_table(&meta_table(data.decks(), tier, sort_tier), &style)
        }
        Commands::Analysis => {
            let summary = summarize(
                data.decks(),
                config.top_n(),
                config.weakness_limit(),
                profile,
            );
            format_analysis(&summary, &style)
        }
        Commands::Top { n, tsv } => {
            let ranked = top_decks(data.decks(), n.unwrap_or(config.top_n()), profile);
            if tsv {
                format_tsv(&ranked)
            } else {
                format_ranked_table(&ranked, &style)
            }
        }
        Commands::Compare { deck1, deck2 } => {
            let a = find_or_exit(&data, &deck1, suggestion_limit);
            let b = find_or_exit(&data, &deck2, suggestion_limit);
            let comparison = compare_decks(a, data.extra(&a.name), b, data.extra(&b.name));
            format_comparison(&comparison, &style)
        }
        Commands::Side { role } => {
            let cards = filter_side_cards(data.side_cards(), role.as_deref());
            format_side_cards(&cards, &style)
        }
        Commands::Handtraps { format } => {
            let list = handtrap_tier_list(data.handtraps(), format.as_deref());
            format_handtrap_list(&list, &style)
        }
        // Handled before data loading
        Commands::Theme { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    std::process::exit(EXIT_SUCCESS);
}

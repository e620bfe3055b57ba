pub mod formatter;
pub mod reference;
pub mod style;

pub use formatter::{
    format_analysis, format_comparison, format_deck_detail, format_deck_list, format_meta_table,
    format_ranked_table, format_score, format_suggestions, format_tsv, format_verdict,
};
pub use reference::{format_handtrap_list, format_side_cards};
pub use style::{detect_mode, get_terminal_width, should_use_colors, truncate, Style};

use owo_colors::{AnsiColors, OwoColorize};
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::deck::Tier;
use crate::prefs::ThemeMode;
use crate::reference::HandtrapTier;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
pub fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Guess light or dark from the terminal background; `None` if the terminal won't say
pub fn detect_mode() -> Option<ThemeMode> {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => Some(ThemeMode::Light),
        Ok(_) => Some(ThemeMode::Dark),
        Err(_) => None,
    }
}

/// Truncate text to fit available width, accounting for Unicode
pub fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Rendering options shared by every formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub use_colors: bool,
    pub mode: ThemeMode,
}

impl Style {
    pub fn new(use_colors: bool, mode: ThemeMode) -> Self {
        Self { use_colors, mode }
    }

    /// No colors, light palette
    pub fn plain() -> Self {
        Self::new(false, ThemeMode::Light)
    }

    fn tier_color(&self, tier: Option<Tier>) -> AnsiColors {
        match (self.mode, tier) {
            (ThemeMode::Light, Some(Tier::Tier1)) => AnsiColors::Red,
            (ThemeMode::Light, Some(Tier::Tier2)) => AnsiColors::Magenta,
            (ThemeMode::Light, Some(Tier::Tier3)) => AnsiColors::Blue,
            (ThemeMode::Light, Some(Tier::Rogue)) => AnsiColors::Green,
            (ThemeMode::Light, Some(Tier::Fun)) => AnsiColors::Cyan,
            (ThemeMode::Dark, Some(Tier::Tier1)) => AnsiColors::BrightRed,
            (ThemeMode::Dark, Some(Tier::Tier2)) => AnsiColors::BrightYellow,
            (ThemeMode::Dark, Some(Tier::Tier3)) => AnsiColors::BrightCyan,
            (ThemeMode::Dark, Some(Tier::Rogue)) => AnsiColors::BrightGreen,
            (ThemeMode::Dark, Some(Tier::Fun)) => AnsiColors::BrightMagenta,
            (_, None) => AnsiColors::Default,
        }
    }

    fn handtrap_color(&self, tier: HandtrapTier) -> AnsiColors {
        match (self.mode, tier) {
            (ThemeMode::Light, HandtrapTier::S) => AnsiColors::Red,
            (ThemeMode::Light, HandtrapTier::A) => AnsiColors::Magenta,
            (ThemeMode::Light, HandtrapTier::B) => AnsiColors::Blue,
            (ThemeMode::Dark, HandtrapTier::S) => AnsiColors::BrightRed,
            (ThemeMode::Dark, HandtrapTier::A) => AnsiColors::BrightYellow,
            (ThemeMode::Dark, HandtrapTier::B) => AnsiColors::BrightCyan,
            (_, HandtrapTier::C) => AnsiColors::Default,
        }
    }

    /// `text` in the colour of `tier`
    pub fn tier(&self, tier: Option<Tier>, text: &str) -> String {
        if self.use_colors {
            text.color(self.tier_color(tier)).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn handtrap_tier(&self, tier: HandtrapTier, text: &str) -> String {
        if self.use_colors {
            text.color(self.handtrap_color(tier)).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dimmed(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Section heading
    pub fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn good(&self, text: &str) -> String {
        if self.use_colors {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bad(&self, text: &str) -> String {
        if self.use_colors {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

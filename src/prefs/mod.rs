pub mod storage;
pub mod types;

pub use storage::{get_prefs_path, load_prefs, save_prefs};
pub use types::{ThemeMode, ThemePrefs, DEFAULT_PALETTE, PREFS_VERSION};

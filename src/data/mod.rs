pub mod fallback;
pub mod loader;
pub mod repository;
pub mod validation;

pub use fallback::fallback_data;
pub use loader::{build_meta_data, load_data, log_load_report, try_load_data};
pub use repository::{DataSource, MetaData};
pub use validation::{validate_deck, validate_extra};

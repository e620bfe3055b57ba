use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref dir) = config.data_dir {
        if dir.as_os_str().is_empty() {
            errors.push("data_dir: must not be empty".to_string());
        }
    }

    if let Some(ref meta) = config.meta {
        if meta.top_n == Some(0) {
            errors.push("meta.top_n: must be at least 1".to_string());
        }
        if meta.weakness_limit == Some(0) {
            errors.push("meta.weakness_limit: must be at least 1".to_string());
        }
    }

    if let Some(ref search) = config.search {
        if search.suggestion_limit == Some(0) {
            errors.push("search.suggestion_limit: must be at least 1".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

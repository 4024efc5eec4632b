use std::env;
use std::path::PathBuf;

pub const DEFAULT_CATALOG: &str = "recipes.json";
pub const DEFAULT_SESSION_DB: &str = "sqlite::memory:";
pub const DEFAULT_LOG_FILE: &str = "mealprep.log";

/// Runtime settings, read from `MEALPREP_*` environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub session_url: String,
    pub log_file: PathBuf,
    pub normalize_fractions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            session_url: DEFAULT_SESSION_DB.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            normalize_fractions: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            catalog_path: lookup("MEALPREP_CATALOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            session_url: lookup("MEALPREP_SESSION_DB").unwrap_or(defaults.session_url),
            log_file: lookup("MEALPREP_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            normalize_fractions: lookup("MEALPREP_NORMALIZE_FRACTIONS")
                .and_then(|raw| parse_bool(&raw))
                .unwrap_or(defaults.normalize_fractions),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

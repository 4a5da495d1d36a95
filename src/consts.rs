//! Project-wide constants.

use std::path::PathBuf;

/// Default Anthropic model when none is specified.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Environment variable holding the Anthropic API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Catalog path used when `--catalog` is absent.
pub const DEFAULT_CATALOG_PATH: &str = "data/internships.json";

/// Default record store path: `~/.disha/users.json`.
pub fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .expect("cannot determine home directory")
        .join(".disha")
        .join("users.json")
}

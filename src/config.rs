//! Session configuration, resolved once at process start.
//!
//! CLI flags override the defaults; the API credential comes from the
//! environment. Everything downstream receives this as an explicit object
//! rather than reading globals.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::consts::{API_KEY_ENV, DEFAULT_CATALOG_PATH, DEFAULT_MODEL, default_store_path};

/// Everything the session needs, known before the first prompt.
#[derive(Debug)]
pub struct Config {
    pub store_path: PathBuf,
    pub catalog_path: PathBuf,
    pub model: String,
    pub api_key: String,
}

impl Config {
    /// Resolve the configuration from CLI overrides and the environment.
    /// A missing or empty API key is fatal here, before the user has typed
    /// anything.
    pub fn resolve(
        users: Option<PathBuf>,
        catalog: Option<PathBuf>,
        model: Option<String>,
    ) -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Self::with_api_key(users, catalog, model, api_key)
    }

    fn with_api_key(
        users: Option<PathBuf>,
        catalog: Option<PathBuf>,
        model: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self> {
        let Some(api_key) = api_key else {
            bail!("{API_KEY_ENV} is not set; the narrator cannot run without it");
        };

        Ok(Self {
            store_path: users.unwrap_or_else(default_store_path),
            catalog_path: catalog.unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        })
    }
}

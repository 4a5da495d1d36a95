//! The static internship catalog.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single internship opportunity. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills: Vec<String>,
    pub link: String,
}

/// Read-only collection of listings, loaded once at startup.
#[derive(Debug)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Load the catalog from a JSON array. Unlike the record store, a
    /// missing or malformed catalog is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let listings = serde_json::from_str(&raw)
            .with_context(|| format!("catalog {} is not a valid listing array", path.display()))?;
        Ok(Self { listings })
    }

    /// Build a catalog directly from listings, for tests and embedding.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// All listings in file order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

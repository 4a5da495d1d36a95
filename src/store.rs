//! The on-disk user record store.
//!
//! A flat JSON array of profiles, unique by phone number, rewritten
//! wholesale on every save. The store owns the records; the session works
//! on a transient copy and folds it back in with [`UserStore::commit`].

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A user's submitted identity and preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub location: String,
}

impl UserProfile {
    /// A fresh profile with no skills or location yet.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            skills: Vec::new(),
            location: String::new(),
        }
    }
}

/// All known users, keyed by phone number.
pub struct UserStore {
    path: PathBuf,
    users: Vec<UserProfile>,
}

impl UserStore {
    /// Load the store from disk. A missing file is an expected first run
    /// and loads empty; a file that exists but does not parse also loads
    /// empty, with a warning on stderr. Any other read error propagates.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let users = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(users) => users,
                Err(e) => {
                    eprintln!(
                        "warning: {} is not a valid record store ({e}); starting empty",
                        path.display()
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        Ok(Self { path, users })
    }

    /// Write the whole collection back to disk, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.users)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    /// Look up a profile by phone number.
    pub fn find(&self, phone: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.phone == phone)
    }

    /// Resolve the session's working profile. A known phone number reuses
    /// the stored record and the freshly typed name is discarded; an
    /// unknown one appends a new record under the typed name. Returns the
    /// working copy and whether this is a returning user.
    pub fn resolve_or_create(&mut self, phone: &str, typed_name: &str) -> (UserProfile, bool) {
        match self.find(phone) {
            Some(existing) => (existing.clone(), true),
            None => {
                let profile = UserProfile::new(typed_name, phone);
                self.users.push(profile.clone());
                (profile, false)
            }
        }
    }

    /// Fold a working copy back into the collection and save. The record
    /// is matched by phone and only skills and location move, so a
    /// returning user's stored name stays put.
    pub fn commit(&mut self, profile: &UserProfile) -> Result<()> {
        match self.users.iter_mut().find(|u| u.phone == profile.phone) {
            Some(existing) => {
                existing.skills = profile.skills.clone();
                existing.location = profile.location.clone();
            }
            None => self.users.push(profile.clone()),
        }
        self.save()
    }

    /// All stored profiles, in insertion order.
    pub fn profiles(&self) -> &[UserProfile] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

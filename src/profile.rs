// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::UserProfile;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Small JSON slot for the user profile, kept outside the database.
#[derive(Debug, Clone)]
pub struct ProfileSlot {
    path: PathBuf,
}

impl ProfileSlot {
    pub fn new(path: PathBuf) -> Self {
        ProfileSlot { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// `None` until the first-run setup has been saved.
    pub fn load(&self) -> Result<Option<UserProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Read profile at {}", self.path.display()))?;
        let profile = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid profile at {}", self.path.display()))?;
        Ok(Some(profile))
    }

    pub fn save(&self, name: &str, pin: &str) -> Result<UserProfile> {
        let profile = UserProfile {
            name: name.trim().to_string(),
            pin: pin.to_string(),
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context("Failed to create profile dir")?;
        }
        fs::write(&self.path, serde_json::to_string(&profile)?)
            .with_context(|| format!("Write profile at {}", self.path.display()))?;
        Ok(profile)
    }
}

pub fn greeting(profile: &UserProfile) -> String {
    format!("Hola, {}", profile.name)
}

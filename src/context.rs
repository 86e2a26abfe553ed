// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::offline::CacheStorage;
use crate::profile::ProfileSlot;
use crate::store::{Location, Store};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AppContext {
    pub store: Store,
    pub profile: ProfileSlot,
    cache_path: Option<PathBuf>,
}

impl AppContext {
    /// Opens the database (fatal on failure). With `db_override` the profile
    /// and cache files live next to the given database file.
    pub fn open(db_override: Option<PathBuf>) -> Result<Self> {
        let (db_file, profile_file, cache_file) = match db_override {
            Some(p) => {
                let dir = p.parent().map(|d| d.to_path_buf()).unwrap_or_default();
                (
                    p.clone(),
                    dir.join("profile.json"),
                    dir.join("offline-cache.sqlite"),
                )
            }
            None => (db::db_path()?, db::profile_path()?, db::cache_db_path()?),
        };
        let ctx = AppContext {
            store: Store::new(Location::File(db_file.clone())),
            profile: ProfileSlot::new(profile_file),
            cache_path: Some(cache_file),
        };
        ctx.store
            .init()
            .with_context(|| format!("Open DB at {}", db_file.display()))?;
        Ok(ctx)
    }

    pub fn in_memory(profile_file: PathBuf) -> Self {
        AppContext {
            store: Store::in_memory(),
            profile: ProfileSlot::new(profile_file),
            cache_path: None,
        }
    }

    pub fn cache_storage(&self) -> Result<CacheStorage> {
        let storage = match &self.cache_path {
            Some(p) => CacheStorage::open(p)
                .with_context(|| format!("Open offline cache at {}", p.display()))?,
            None => CacheStorage::in_memory()?,
        };
        Ok(storage)
    }
}

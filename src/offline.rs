// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::http_client;
use chrono::Utc;
use reqwest::Url;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

pub const ASSET_CACHE_NAME: &str = "misaldo-pwa-v2";
pub const OFFLINE_CACHE_NAME: &str = "misaldo-v1";
pub const OFFLINE_URL: &str = "/offline";

pub const DEFAULT_MANIFEST: [&str; 14] = [
    "./",
    "./index.html",
    "./static/manifest.json",
    "./static/js/app.js",
    "./static/js/db.js",
    "./static/js/auth.js",
    "./static/js/router.js",
    "./static/img/logo2.png",
    "./static/img/icon-192.png",
    "./static/img/icon-512.png",
    "https://cdn.tailwindcss.com",
    "https://unpkg.com/lucide@latest",
    "https://cdn.jsdelivr.net/npm/chart.js",
    "https://fonts.googleapis.com/css2?family=Outfit:wght@300;400;600;700&display=swap",
];

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache storage failed: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("network request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("could not cache {url}: status {status}")]
    BadStatus { url: String, status: u16 },
    #[error("invalid url '{0}'")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestMode {
    Navigate,
    SameOrigin,
    Cors,
    NoCors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub mode: RequestMode,
}

impl Request {
    pub fn new(url: &str, mode: RequestMode) -> Self {
        Request {
            url: url.to_string(),
            mode,
        }
    }

    pub fn navigate(url: &str) -> Self {
        Self::new(url, RequestMode::Navigate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Basic,
    Cors,
    Opaque,
}

impl ResponseType {
    fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Basic => "basic",
            ResponseType::Cors => "cors",
            ResponseType::Opaque => "opaque",
        }
    }

    fn from_stored(s: &str) -> Self {
        match s {
            "basic" => ResponseType::Basic,
            "cors" => ResponseType::Cors,
            _ => ResponseType::Opaque,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub kind: ResponseType,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn cacheable(&self) -> bool {
        self.status == 200 && matches!(self.kind, ResponseType::Basic | ResponseType::Cors)
    }
}

pub trait Fetcher {
    fn fetch(&self, req: &Request) -> Result<Response, CacheError>;

    fn resolve(&self, url: &str) -> Result<String, CacheError> {
        Ok(url.to_string())
    }
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    origin: Url,
}

impl HttpFetcher {
    pub fn new(origin: &str) -> anyhow::Result<Self> {
        let origin = Url::parse(origin)
            .map_err(|_| anyhow::anyhow!("Invalid origin '{}'", origin))?;
        Ok(HttpFetcher {
            client: http_client()?,
            origin,
        })
    }

    fn absolute(&self, url: &str) -> Result<Url, CacheError> {
        self.origin
            .join(url)
            .map_err(|_| CacheError::InvalidUrl(url.to_string()))
    }

    pub fn response_type(&self, url: &str, mode: RequestMode) -> Result<ResponseType, CacheError> {
        let url = self.absolute(url)?;
        Ok(if url.origin() == self.origin.origin() {
            ResponseType::Basic
        } else if mode == RequestMode::NoCors {
            ResponseType::Opaque
        } else {
            ResponseType::Cors
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, req: &Request) -> Result<Response, CacheError> {
        let url = self.absolute(&req.url)?;
        let network = |e: reqwest::Error| CacheError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };
        let resp = self.client.get(url.clone()).send().map_err(network)?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let kind = self.response_type(url.as_str(), req.mode)?;
        let body = resp.bytes().map_err(network)?.to_vec();
        Ok(Response {
            status,
            kind,
            content_type,
            body,
        })
    }

    fn resolve(&self, url: &str) -> Result<String, CacheError> {
        Ok(self.absolute(url)?.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    pub cache: String,
    pub url: String,
    pub status: u16,
    pub bytes: usize,
    pub stored_at: String,
}

pub struct CacheStorage {
    conn: Connection,
}

impl CacheStorage {
    pub fn open(path: &Path) -> Result<Self, CacheError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self, CacheError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, CacheError> {
        conn.execute_batch(
            r#"
        PRAGMA foreign_keys = ON;
        CREATE TABLE IF NOT EXISTS caches(
            name TEXT PRIMARY KEY,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS cache_entries(
            cache_name TEXT NOT NULL,
            url TEXT NOT NULL,
            status INTEGER NOT NULL,
            kind TEXT NOT NULL,
            content_type TEXT,
            body BLOB NOT NULL,
            stored_at TEXT NOT NULL,
            PRIMARY KEY(cache_name, url),
            FOREIGN KEY(cache_name) REFERENCES caches(name) ON DELETE CASCADE
        );
        "#,
        )?;
        Ok(CacheStorage { conn })
    }

    pub fn open_cache(&self, name: &str) -> Result<(), CacheError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO caches(name, created_at) VALUES (?1, ?2)",
            params![name, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn put(&self, cache: &str, url: &str, resp: &Response) -> Result<(), CacheError> {
        self.open_cache(cache)?;
        self.conn.execute(
            "INSERT INTO cache_entries(cache_name, url, status, kind, content_type, body, stored_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(cache_name, url) DO UPDATE SET
                status=excluded.status, kind=excluded.kind, content_type=excluded.content_type,
                body=excluded.body, stored_at=excluded.stored_at",
            params![
                cache,
                url,
                resp.status,
                resp.kind.as_str(),
                resp.content_type,
                resp.body,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok(())
    }

    /// Stores several responses at once; either all land or none do.
    pub fn put_all(&self, cache: &str, items: &[(String, Response)]) -> Result<(), CacheError> {
        let tx = self.conn.unchecked_transaction()?;
        for (url, resp) in items {
            self.put(cache, url, resp)?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn match_url(&self, url: &str) -> Result<Option<Response>, CacheError> {
        let r = self
            .conn
            .query_row(
                "SELECT e.status, e.kind, e.content_type, e.body
                 FROM cache_entries e JOIN caches c ON e.cache_name=c.name
                 WHERE e.url=?1 ORDER BY c.created_at, c.rowid LIMIT 1",
                params![url],
                |r| {
                    let kind: String = r.get(1)?;
                    Ok(Response {
                        status: r.get(0)?,
                        kind: ResponseType::from_stored(&kind),
                        content_type: r.get(2)?,
                        body: r.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(r)
    }

    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM caches ORDER BY created_at, rowid")?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn delete(&self, name: &str) -> Result<bool, CacheError> {
        let n = self
            .conn
            .execute("DELETE FROM caches WHERE name=?1", params![name])?;
        Ok(n > 0)
    }

    pub fn entries(&self) -> Result<Vec<EntryInfo>, CacheError> {
        let mut stmt = self.conn.prepare(
            "SELECT cache_name, url, status, length(body), stored_at
             FROM cache_entries ORDER BY cache_name, url",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok(EntryInfo {
                cache: r.get(0)?,
                url: r.get(1)?,
                status: r.get(2)?,
                bytes: r.get::<_, i64>(3)? as usize,
                stored_at: r.get(4)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

pub fn evict_others(storage: &CacheStorage, keep: &str) -> Result<Vec<String>, CacheError> {
    let mut removed = Vec::new();
    for key in storage.keys()? {
        if key != keep {
            log::info!("removing old cache {}", key);
            storage.delete(&key)?;
            removed.push(key);
        }
    }
    Ok(removed)
}

pub struct AssetWorker<'a, F: Fetcher> {
    storage: &'a CacheStorage,
    fetcher: F,
    cache_name: String,
    manifest: Vec<String>,
}

impl<'a, F: Fetcher> AssetWorker<'a, F> {
    pub fn new(storage: &'a CacheStorage, fetcher: F, cache_name: &str, manifest: &[&str]) -> Self {
        AssetWorker {
            storage,
            fetcher,
            cache_name: cache_name.to_string(),
            manifest: manifest.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// Caches the whole manifest. Any failed asset aborts the install and
    /// nothing is written.
    pub fn install(&self) -> Result<usize, CacheError> {
        log::info!("installing {} ({} assets)", self.cache_name, self.manifest.len());
        self.storage.open_cache(&self.cache_name)?;
        let mut fetched = Vec::with_capacity(self.manifest.len());
        for url in &self.manifest {
            let key = self.fetcher.resolve(url)?;
            let mode = if url.starts_with("http://") || url.starts_with("https://") {
                RequestMode::Cors
            } else {
                RequestMode::SameOrigin
            };
            let resp = self.fetcher.fetch(&Request::new(url, mode))?;
            if !resp.ok() {
                return Err(CacheError::BadStatus {
                    url: url.clone(),
                    status: resp.status,
                });
            }
            fetched.push((key, resp));
        }
        self.storage.put_all(&self.cache_name, &fetched)?;
        Ok(fetched.len())
    }

    pub fn activate(&self) -> Result<Vec<String>, CacheError> {
        evict_others(self.storage, &self.cache_name)
    }

    pub fn fetch(&self, req: &Request) -> Result<Response, CacheError> {
        let key = self.fetcher.resolve(&req.url)?;
        if let Some(hit) = self.storage.match_url(&key)? {
            log::debug!("cache hit {}", key);
            return Ok(hit);
        }
        let resp = self.fetcher.fetch(req)?;
        if resp.cacheable() {
            self.storage.put(&self.cache_name, &key, &resp)?;
        }
        Ok(resp)
    }
}

pub struct OfflineFallbackWorker<'a, F: Fetcher> {
    storage: &'a CacheStorage,
    fetcher: F,
    cache_name: String,
    offline_url: String,
}

impl<'a, F: Fetcher> OfflineFallbackWorker<'a, F> {
    pub fn new(storage: &'a CacheStorage, fetcher: F) -> Self {
        OfflineFallbackWorker {
            storage,
            fetcher,
            cache_name: OFFLINE_CACHE_NAME.to_string(),
            offline_url: OFFLINE_URL.to_string(),
        }
    }

    pub fn install(&self) -> Result<(), CacheError> {
        let key = self.fetcher.resolve(&self.offline_url)?;
        let resp = self.fetcher.fetch(&Request::navigate(&self.offline_url))?;
        if !resp.ok() {
            return Err(CacheError::BadStatus {
                url: self.offline_url.clone(),
                status: resp.status,
            });
        }
        self.storage.put(&self.cache_name, &key, &resp)?;
        Ok(())
    }

    pub fn activate(&self) -> Result<Vec<String>, CacheError> {
        evict_others(self.storage, &self.cache_name)
    }

    /// `Ok(None)` for anything that is not a navigation. Navigations go to
    /// the network; if it is unreachable the cached offline page is served.
    pub fn fetch(&self, req: &Request) -> Result<Option<Response>, CacheError> {
        if req.mode != RequestMode::Navigate {
            return Ok(None);
        }
        match self.fetcher.fetch(req) {
            Ok(resp) => Ok(Some(resp)),
            Err(err @ CacheError::Network { .. }) => {
                let key = self.fetcher.resolve(&self.offline_url)?;
                match self.storage.match_url(&key)? {
                    Some(page) => {
                        log::info!("network unreachable, serving {}", self.offline_url);
                        Ok(Some(page))
                    }
                    None => Err(err),
                }
            }
            Err(other) => Err(other),
        }
    }
}

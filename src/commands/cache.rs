// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::offline::{
    ASSET_CACHE_NAME, AssetWorker, CacheStorage, DEFAULT_MANIFEST, HttpFetcher,
    OFFLINE_CACHE_NAME, OfflineFallbackWorker, Request, RequestMode, evict_others,
};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    let storage = ctx.cache_storage()?;
    match m.subcommand() {
        Some(("install", sub)) => {
            let fetcher = HttpFetcher::new(sub.get_one::<String>("origin").unwrap())?;
            if sub.get_flag("offline-page") {
                OfflineFallbackWorker::new(&storage, fetcher).install()?;
                println!("Offline page cached");
            } else {
                let n = assets(&storage, fetcher).install()?;
                println!("Cached {} assets in {}", n, ASSET_CACHE_NAME);
            }
        }
        Some(("activate", sub)) => {
            let keep = if sub.get_flag("offline-page") {
                OFFLINE_CACHE_NAME
            } else {
                ASSET_CACHE_NAME
            };
            let removed = evict_others(&storage, keep)?;
            if removed.is_empty() {
                println!("No stale caches");
            }
            for name in removed {
                println!("Removed cache {}", name);
            }
        }
        Some(("fetch", sub)) => {
            let fetcher = HttpFetcher::new(sub.get_one::<String>("origin").unwrap())?;
            let url = sub.get_one::<String>("url").unwrap();
            if sub.get_flag("navigate") {
                let worker = OfflineFallbackWorker::new(&storage, fetcher);
                match worker.fetch(&Request::navigate(url))? {
                    Some(resp) => println!("{} ({} bytes)", resp.status, resp.body.len()),
                    None => println!("Not handled"),
                }
            } else {
                let resp = assets(&storage, fetcher).fetch(&Request::new(url, RequestMode::NoCors))?;
                println!("{} ({} bytes)", resp.status, resp.body.len());
            }
        }
        Some(("ls", sub)) => {
            let entries = storage.entries()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &entries)? {
                let rows = entries
                    .into_iter()
                    .map(|e| {
                        vec![
                            e.cache,
                            e.url,
                            e.status.to_string(),
                            e.bytes.to_string(),
                            e.stored_at,
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Cache", "URL", "Status", "Bytes", "Stored"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

fn assets(storage: &CacheStorage, fetcher: HttpFetcher) -> AssetWorker<'_, HttpFetcher> {
    AssetWorker::new(storage, fetcher, ASSET_CACHE_NAME, &DEFAULT_MANIFEST)
}

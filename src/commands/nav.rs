// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::router::{Router, Visibility};
use crate::utils::pretty_table;
use anyhow::Result;
use std::time::Instant;

/// Walks the fragments in order and reports where the router ends up.
pub fn run(fragments: &[String], back: bool) -> Router {
    let now = Instant::now();
    let mut iter = fragments.iter();
    let first = iter.next().map(|s| s.as_str()).unwrap_or("");
    let mut router = Router::new(first, now);
    for f in iter {
        router.navigate(f, now);
    }
    if back {
        router.back(now);
    }
    router
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let fragments: Vec<String> = sub
        .get_many::<String>("fragments")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let router = run(&fragments, sub.get_flag("back"));
    let res = router.current();

    let rows = router
        .panels()
        .iter()
        .map(|p| {
            let state = match p.visibility {
                Visibility::Active => "active",
                Visibility::FadingOut { .. } => "fading",
                Visibility::Hidden => "hidden",
            };
            vec![p.view.element_id().to_string(), state.to_string()]
        })
        .collect();
    println!("Fragment: {}", router.fragment());
    println!("{}", pretty_table(&["View", "State"], rows));
    if res.tx_mode.is_some() {
        println!("Form: {} ({})", router.form().title, router.form().kind);
    }
    if let Some(nav) = router.active_nav() {
        println!("Nav: {}", nav);
    }
    Ok(())
}

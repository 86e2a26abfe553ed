// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::models::{Currency, Kind, Transaction};
use crate::utils::{fmt_amount, parse_amount, parse_date};
use crate::views::{console::ConsolePresenter, dashboard};
use anyhow::Result;
use chrono::Local;

pub fn handle(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let tx = add(ctx, sub)?;
            println!(
                "Recorded {} {} {} on {} ({})",
                tx.kind,
                fmt_amount(tx.amount),
                tx.currency,
                tx.date,
                tx.category
            );
        }
        Some(("list", sub)) => {
            let mut presenter = ConsolePresenter::from_matches(sub);
            dashboard::render(&ctx.store, &mut presenter)?;
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            ctx.store.delete_transaction(id.trim())?;
            println!("Removed transaction {}", id.trim());
        }
        _ => {}
    }
    Ok(())
}

/// Builds a transaction from form-style arguments and stores it.
pub fn add(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<Transaction> {
    let kind: Kind = sub.get_one::<String>("kind").unwrap().parse()?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let currency: Currency = sub.get_one::<String>("currency").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let tx = Transaction::new(
        kind,
        amount,
        currency,
        &category,
        &date.format("%Y-%m-%d").to_string(),
        description,
    );
    ctx.store.add_transaction(&tx)?;
    Ok(tx)
}

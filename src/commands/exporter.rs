// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use anyhow::Result;

pub fn handle(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // oldest first, the way a ledger reads
    let mut txs = ctx.store.get_transactions()?;
    txs.reverse();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "kind",
                "amount",
                "currency",
                "category",
                "description",
                "created_at",
            ])?;
            for tx in &txs {
                wtr.write_record([
                    tx.id.clone(),
                    tx.date.clone(),
                    tx.kind.to_string(),
                    format!("{:.2}", tx.amount),
                    tx.currency.to_string(),
                    tx.category.clone(),
                    tx.description.clone().unwrap_or_default(),
                    tx.created_at.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
        }
        _ => {
            return Err(anyhow::anyhow!("Unknown format: {} (use csv|json)", fmt));
        }
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}

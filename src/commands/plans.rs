// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::YearMonth;
use crate::context::AppContext;
use crate::models::{Currency, Plan};
use crate::utils::{fmt_amount, parse_amount};
use crate::views::{console::ConsolePresenter, planning};
use anyhow::Result;
use chrono::Local;

pub fn handle(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let plan = add(ctx, sub)?;
            println!(
                "Planned '{}' {} {} for {:02}/{}",
                plan.description,
                fmt_amount(plan.estimated_amount),
                plan.currency,
                plan.month,
                plan.year
            );
        }
        Some(("list", sub)) => {
            let mut presenter = ConsolePresenter::from_matches(sub);
            planning::render(&ctx.store, period(sub)?, &mut presenter)?;
        }
        Some(("toggle", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            let mut presenter = ConsolePresenter::default();
            let found = match sub.get_one::<bool>("done") {
                Some(done) => {
                    planning::set_completed(&ctx.store, period(sub)?, id, *done, &mut presenter)?
                }
                None => planning::toggle(&ctx.store, period(sub)?, id, &mut presenter)?,
            };
            if !found {
                println!("Plan {} not found", id);
            }
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            ctx.store.delete_plan(id)?;
            println!("Removed plan {}", id);
        }
        _ => {}
    }
    Ok(())
}

/// `--month/--year` when given, otherwise the current calendar month.
pub fn period(sub: &clap::ArgMatches) -> Result<YearMonth> {
    match (sub.get_one::<u32>("month"), sub.get_one::<i32>("year")) {
        (Some(m), Some(y)) => YearMonth::new(*y, *m),
        _ => Ok(YearMonth::from_date(Local::now().date_naive())),
    }
}

pub fn add(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<Plan> {
    let at = period(sub)?;
    let description = sub.get_one::<String>("description").unwrap().trim();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let currency: Currency = sub.get_one::<String>("currency").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap().trim();
    let plan = Plan::new(at.month, at.year, description, amount, currency, category);
    ctx.store.add_plan(&plan)?;
    Ok(plan)
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{MonthReport, YearMonth};
use crate::context::AppContext;
use crate::views::console::ConsolePresenter;
use crate::views::reports::ReportsController;
use anyhow::Result;
use chrono::Local;

pub fn handle(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let mut presenter = ConsolePresenter::from_matches(sub);
    let mut controller = ReportsController::new(start_month(sub)?);
    match sub.get_one::<i32>("step") {
        Some(delta) => controller.change_month(*delta, &ctx.store, &mut presenter)?,
        None => controller.render(&ctx.store, &mut presenter)?,
    };
    Ok(())
}

fn start_month(sub: &clap::ArgMatches) -> Result<YearMonth> {
    match sub.get_one::<String>("month") {
        Some(m) => YearMonth::parse(m),
        None => Ok(YearMonth::from_date(Local::now().date_naive())),
    }
}

/// Report for the cursor month after applying `--step`, without printing.
pub fn compute(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<MonthReport> {
    let mut controller = ReportsController::new(start_month(sub)?);
    if let Some(delta) = sub.get_one::<i32>("step") {
        controller.step(*delta)?;
    }
    let frame = ReportsController::compute(&ctx.store, controller.begin())?;
    Ok(frame.report)
}

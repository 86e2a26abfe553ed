// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use misaldo::{cli, commands, context::AppContext};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // routing needs no storage
    if let Some(("nav", sub)) = matches.subcommand() {
        return commands::nav::handle(sub);
    }
    if let Some(("categories", _)) = matches.subcommand() {
        return commands::categories::handle();
    }

    let ctx = AppContext::open(matches.get_one::<PathBuf>("db").cloned())?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", ctx.store.location().describe());
        }
        Some(("profile", sub)) => commands::profile::handle(&ctx, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&ctx, sub)?,
        Some(("plan", sub)) => commands::plans::handle(&ctx, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ctx, sub)?,
        Some(("license", sub)) => commands::license::handle(&ctx, sub)?,
        Some(("cache", sub)) => commands::cache::handle(&ctx, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ctx, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

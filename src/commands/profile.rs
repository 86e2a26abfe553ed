// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::profile::greeting;
use anyhow::Result;

pub fn handle(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("setup", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let pin = sub.get_one::<String>("pin").unwrap();
            let profile = ctx.profile.save(name, pin)?;
            println!("{}", greeting(&profile));
        }
        Some(("show", _)) => match ctx.profile.load()? {
            Some(profile) => {
                let initial = profile.avatar_initial().unwrap_or('?');
                println!("[{}] {}", initial, greeting(&profile));
            }
            None => println!("No profile yet; run `misaldo profile setup --name .. --pin ..`"),
        },
        _ => {}
    }
    Ok(())
}

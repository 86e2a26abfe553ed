// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::license::{activate_license, check_license};
use anyhow::Result;

pub fn handle(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("activate", sub)) => {
            let key = sub.get_one::<String>("key").unwrap();
            if activate_license(&ctx.store, key)? {
                println!("Licencia activada correctamente.");
            } else {
                eprintln!("Código inválido.");
            }
        }
        Some(("status", _)) => {
            if check_license(&ctx.store) {
                println!("PRO Activado");
            } else {
                println!("Modo Prueba");
            }
        }
        _ => {}
    }
    Ok(())
}

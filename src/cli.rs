// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub const DEFAULT_ORIGIN: &str = "http://localhost:8000/";

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON document per line"),
    )
}

fn required(name: &'static str) -> Arg {
    Arg::new(name).long(name).required(true)
}

fn period_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("month")
            .long("month")
            .value_parser(value_parser!(u32).range(1..=12))
            .requires("year"),
    )
    .arg(
        Arg::new("year")
            .long("year")
            .value_parser(value_parser!(i32))
            .requires("month"),
    )
}

pub fn build_cli() -> Command {
    Command::new("misaldo")
        .about("Local-only expense/income ledger with monthly plans and reports")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_parser(value_parser!(std::path::PathBuf))
                .help("Database file (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("profile")
                .about("First-run user profile")
                .subcommand(
                    Command::new("setup")
                        .arg(required("name"))
                        .arg(required("pin")),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("tx")
                .about("Income and expense transactions")
                .subcommand(
                    Command::new("add")
                        .arg(required("kind").value_parser(["income", "expense"]))
                        .arg(required("amount"))
                        .arg(required("currency"))
                        .arg(required("category"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("Dashboard: balances and movements").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize)),
                    ),
                ))
                .subcommand(Command::new("rm").arg(required("id"))),
        )
        .subcommand(
            Command::new("plan")
                .about("Monthly budget plans")
                .subcommand(period_args(
                    Command::new("add")
                        .arg(required("description"))
                        .arg(required("amount"))
                        .arg(required("currency"))
                        .arg(required("category")),
                ))
                .subcommand(json_flags(period_args(Command::new("list"))))
                .subcommand(period_args(
                    Command::new("toggle").arg(required("id")).arg(
                        Arg::new("done")
                            .long("done")
                            .value_parser(value_parser!(bool))
                            .help("Target state; flips the current one when omitted"),
                    ),
                ))
                .subcommand(Command::new("rm").arg(required("id"))),
        )
        .subcommand(json_flags(
            Command::new("report")
                .about("Monthly income/expense report")
                .arg(Arg::new("month").long("month").help("YYYY-MM, default current month"))
                .arg(
                    Arg::new("step")
                        .long("step")
                        .value_parser(value_parser!(i32))
                        .allow_negative_numbers(true)
                        .help("Move the month cursor by N months"),
                ),
        ))
        .subcommand(
            Command::new("license")
                .about("Pro license (unverified placeholder)")
                .subcommand(Command::new("activate").arg(required("key")))
                .subcommand(Command::new("status")),
        )
        .subcommand(
            Command::new("nav")
                .about("Resolve fragments through the view router")
                .arg(
                    Arg::new("fragments")
                        .num_args(1..)
                        .required(true)
                        .help("Fragments in navigation order, e.g. / /planning #/reports"),
                )
                .arg(
                    Arg::new("back")
                        .long("back")
                        .action(ArgAction::SetTrue)
                        .help("Go back once after the last fragment"),
                ),
        )
        .subcommand(
            Command::new("cache")
                .about("Offline asset cache")
                .subcommand(
                    Command::new("install")
                        .arg(Arg::new("origin").long("origin").default_value(DEFAULT_ORIGIN))
                        .arg(
                            Arg::new("offline-page")
                                .long("offline-page")
                                .action(ArgAction::SetTrue)
                                .help("Install the offline fallback page instead of the asset manifest"),
                        ),
                )
                .subcommand(
                    Command::new("activate").arg(
                        Arg::new("offline-page")
                            .long("offline-page")
                            .action(ArgAction::SetTrue),
                    ),
                )
                .subcommand(
                    Command::new("fetch")
                        .arg(Arg::new("url").required(true))
                        .arg(Arg::new("origin").long("origin").default_value(DEFAULT_ORIGIN))
                        .arg(
                            Arg::new("navigate")
                                .long("navigate")
                                .action(ArgAction::SetTrue)
                                .help("Treat as a page navigation served by the offline fallback worker"),
                        ),
                )
                .subcommand(json_flags(Command::new("ls"))),
        )
        .subcommand(Command::new("categories").about("Suggested categories"))
        .subcommand(
            Command::new("export")
                .about("Export all transactions")
                .arg(required("format"))
                .arg(required("out")),
        )
}

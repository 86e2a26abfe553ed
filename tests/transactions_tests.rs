// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use misaldo::models::{Currency, Kind};
use misaldo::{cli, commands, context::AppContext};
use tempfile::{TempDir, tempdir};

fn setup() -> (TempDir, AppContext) {
    let dir = tempdir().unwrap();
    let ctx = AppContext::in_memory(dir.path().join("profile.json"));
    (dir, ctx)
}

fn sub_of<'a>(m: &'a clap::ArgMatches, path: &[&str]) -> &'a clap::ArgMatches {
    let mut cur = m;
    for name in path {
        match cur.subcommand() {
            Some((n, sub)) if n == *name => cur = sub,
            _ => panic!("no {} subcommand", name),
        }
    }
    cur
}

#[test]
fn tx_add_stores_positive_amount_with_kind() {
    let (_dir, ctx) = setup();
    let matches = cli::build_cli().get_matches_from([
        "misaldo",
        "tx",
        "add",
        "--kind",
        "expense",
        "--amount",
        " 10.00 ",
        "--currency",
        "usd",
        "--category",
        " Comida ",
        "--date",
        "2024-03-01",
        "--description",
        "arepas",
    ]);
    let tx = commands::transactions::add(&ctx, sub_of(&matches, &["tx", "add"])).unwrap();
    assert_eq!(tx.kind, Kind::Expense);
    assert_eq!(tx.amount, 10.0);
    assert_eq!(tx.currency, Currency::Usd);
    assert_eq!(tx.category, "Comida");

    let stored = ctx.store.get_transactions().unwrap();
    assert_eq!(stored, vec![tx]);
}

#[test]
fn tx_add_rejects_negative_amounts() {
    let (_dir, ctx) = setup();
    let matches = cli::build_cli().get_matches_from([
        "misaldo",
        "tx",
        "add",
        "--kind",
        "income",
        "--amount=-5",
        "--currency",
        "USD",
        "--category",
        "Ventas",
    ]);
    let err = commands::transactions::add(&ctx, sub_of(&matches, &["tx", "add"])).unwrap_err();
    assert!(err.to_string().contains("non-negative"));
    assert!(ctx.store.get_transactions().unwrap().is_empty());
}

#[test]
fn tx_add_defaults_date_to_today() {
    let (_dir, ctx) = setup();
    let matches = cli::build_cli().get_matches_from([
        "misaldo",
        "tx",
        "add",
        "--kind",
        "income",
        "--amount",
        "3",
        "--currency",
        "VES",
        "--category",
        "Ventas",
    ]);
    let tx = commands::transactions::add(&ctx, sub_of(&matches, &["tx", "add"])).unwrap();
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(tx.date, today);
    assert_eq!(tx.description, None);
}

#[test]
fn tx_rm_deletes_and_tolerates_unknown_ids() {
    let (_dir, ctx) = setup();
    let add = cli::build_cli().get_matches_from([
        "misaldo", "tx", "add", "--kind", "expense", "--amount", "1", "--currency", "USD",
        "--category", "Otros", "--date", "2024-01-01",
    ]);
    let tx = commands::transactions::add(&ctx, sub_of(&add, &["tx", "add"])).unwrap();

    for id in [tx.id.as_str(), "unknown"] {
        let rm = cli::build_cli().get_matches_from(["misaldo", "tx", "rm", "--id", id]);
        commands::transactions::handle(&ctx, sub_of(&rm, &["tx"])).unwrap();
    }
    assert!(ctx.store.get_transactions().unwrap().is_empty());
}

#[test]
fn plan_add_uses_explicit_period() {
    let (_dir, ctx) = setup();
    let matches = cli::build_cli().get_matches_from([
        "misaldo",
        "plan",
        "add",
        "--description",
        "Internet",
        "--amount",
        "25",
        "--currency",
        "USD",
        "--category",
        "Servicios",
        "--month",
        "3",
        "--year",
        "2024",
    ]);
    let plan = commands::plans::add(&ctx, sub_of(&matches, &["plan", "add"])).unwrap();
    assert_eq!((plan.month, plan.year), (3, 2024));
    assert!(!plan.is_completed);
    assert_eq!(ctx.store.get_plans(3, 2024).unwrap(), vec![plan.clone()]);

    let toggle = cli::build_cli().get_matches_from([
        "misaldo", "plan", "toggle", "--id", plan.id.as_str(), "--done", "true", "--month", "3",
        "--year", "2024",
    ]);
    commands::plans::handle(&ctx, sub_of(&toggle, &["plan"])).unwrap();
    assert!(ctx.store.get_plans(3, 2024).unwrap()[0].is_completed);
}

#[test]
fn report_step_moves_cursor_back() {
    let (_dir, ctx) = setup();
    for (date, amount) in [("2024-02-10", 7.0), ("2024-03-10", 11.0)] {
        let amount = amount.to_string();
        let m = cli::build_cli().get_matches_from([
            "misaldo", "tx", "add", "--kind", "expense", "--amount", amount.as_str(), "--currency",
            "USD", "--category", "Comida", "--date", date,
        ]);
        commands::transactions::add(&ctx, sub_of(&m, &["tx", "add"])).unwrap();
    }
    let m = cli::build_cli().get_matches_from([
        "misaldo", "report", "--month", "2024-03", "--step", "-1",
    ]);
    let report = commands::reports::compute(&ctx, sub_of(&m, &["report"])).unwrap();
    assert_eq!(report.period.to_string(), "2024-02");
    assert_eq!(report.expense.usd, 7.0);
}

#[test]
fn report_step_out_of_range_is_an_error() {
    let (_dir, ctx) = setup();
    let m = cli::build_cli().get_matches_from([
        "misaldo", "report", "--month", "2024-03", "--step", "2147483647",
    ]);
    let err = commands::reports::compute(&ctx, sub_of(&m, &["report"])).unwrap_err();
    assert!(err.to_string().contains("Invalid month step"));
}

#[test]
fn open_with_db_override_uses_that_file() {
    let dir = tempdir().unwrap();
    let db_file = dir.path().join("ledger.sqlite");
    let ctx = AppContext::open(Some(db_file.clone())).unwrap();
    assert!(ctx.store.is_open());
    assert_eq!(ctx.store.location().describe(), db_file.display().to_string());
    assert!(db_file.exists());
}

#[test]
fn license_key_is_checked_untrimmed() {
    let (_dir, ctx) = setup();
    let m = cli::build_cli().get_matches_from(["misaldo", "license", "activate", "--key", "abcde "]);
    commands::license::handle(&ctx, sub_of(&m, &["license"])).unwrap();
    assert_eq!(
        ctx.store.get_setting(misaldo::license::LICENSE_KEY),
        Some(serde_json::json!("abcde "))
    );
    assert!(misaldo::license::check_license(&ctx.store));
}

#[test]
fn license_and_profile_commands() {
    let (_dir, ctx) = setup();
    let m = cli::build_cli().get_matches_from(["misaldo", "license", "activate", "--key", "ABCDEF"]);
    commands::license::handle(&ctx, sub_of(&m, &["license"])).unwrap();
    assert!(misaldo::license::check_license(&ctx.store));

    assert!(ctx.profile.load().unwrap().is_none());
    let m = cli::build_cli().get_matches_from([
        "misaldo", "profile", "setup", "--name", "ana", "--pin", "1234",
    ]);
    commands::profile::handle(&ctx, sub_of(&m, &["profile"])).unwrap();
    let profile = ctx.profile.load().unwrap().unwrap();
    assert_eq!(profile.name, "ana");
    assert_eq!(profile.avatar_initial(), Some('A'));
}

#[test]
fn nav_walks_fragments_and_back() {
    let m = cli::build_cli().get_matches_from([
        "misaldo", "nav", "/", "/add-income", "/reports", "--back",
    ]);
    let sub = sub_of(&m, &["nav"]);
    let fragments: Vec<String> = sub.get_many::<String>("fragments").unwrap().cloned().collect();
    let router = commands::nav::run(&fragments, sub.get_flag("back"));
    assert_eq!(router.fragment(), "/add-income");
    assert_eq!(router.form().kind, Kind::Income);
}

#[test]
fn export_csv_writes_all_rows() {
    let (dir, ctx) = setup();
    for date in ["2024-03-02", "2024-03-01"] {
        let m = cli::build_cli().get_matches_from([
            "misaldo", "tx", "add", "--kind", "income", "--amount", "2.5", "--currency", "USD",
            "--category", "Ventas", "--date", date,
        ]);
        commands::transactions::add(&ctx, sub_of(&m, &["tx", "add"])).unwrap();
    }
    let out = dir.path().join("export.csv");
    let out_str = out.to_string_lossy().to_string();
    let m = cli::build_cli().get_matches_from([
        "misaldo", "export", "--format", "csv", "--out", out_str.as_str(),
    ]);
    commands::exporter::handle(&ctx, sub_of(&m, &["export"])).unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "2024-03-01");
    assert_eq!(&rows[0][3], "2.50");
}

#[test]
fn export_rejects_unknown_format() {
    let (dir, ctx) = setup();
    let out = dir.path().join("x.txt").to_string_lossy().to_string();
    let m = cli::build_cli().get_matches_from(["misaldo", "export", "--format", "xml", "--out", out.as_str()]);
    assert!(commands::exporter::handle(&ctx, sub_of(&m, &["export"])).is_err());
}

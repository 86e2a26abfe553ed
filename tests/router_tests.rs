// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use misaldo::models::Kind;
use misaldo::router::{Accent, FADE_OUT, Router, View, Visibility, normalize_fragment, resolve};
use std::time::{Duration, Instant};

#[test]
fn route_table() {
    assert_eq!(resolve("/").view, View::Dashboard);
    assert_eq!(resolve("/planning").view, View::Planning);
    assert_eq!(resolve("/reports").view, View::Reports);
    assert_eq!(resolve("/transactions").view, View::Dashboard);

    let income = resolve("/add-income");
    assert_eq!(income.view, View::AddTransaction);
    assert_eq!(income.tx_mode, Some(Kind::Income));
    let expense = resolve("/add-expense");
    assert_eq!(expense.view, View::AddTransaction);
    assert_eq!(expense.tx_mode, Some(Kind::Expense));

    for unknown in ["/nope", "planning", "/Planning", "/reports/2024"] {
        let r = resolve(unknown);
        assert_eq!(r.view, View::Dashboard, "{unknown}");
        assert_eq!(r.tx_mode, None);
    }
}

#[test]
fn fragments_are_normalized() {
    assert_eq!(normalize_fragment(""), "/");
    assert_eq!(normalize_fragment("#"), "/");
    assert_eq!(normalize_fragment("#/reports"), "/reports");
    assert_eq!(normalize_fragment("/reports"), "/reports");
}

#[test]
fn initial_load_defaults_to_dashboard() {
    let now = Instant::now();
    let r = Router::new("", now);
    assert_eq!(r.fragment(), "/");
    assert_eq!(r.visibility(View::Dashboard), Visibility::Active);
    for v in [View::Planning, View::Reports, View::AddTransaction] {
        assert_eq!(r.visibility(v), Visibility::Hidden);
    }
    assert_eq!(r.active_nav(), Some("/"));
}

#[test]
fn exactly_one_panel_active_and_others_fade_then_hide() {
    let now = Instant::now();
    let mut r = Router::new("#/", now);
    r.navigate("/planning", now);

    let active: Vec<View> = r
        .panels()
        .iter()
        .filter(|p| p.visibility == Visibility::Active)
        .map(|p| p.view)
        .collect();
    assert_eq!(active, vec![View::Planning]);
    assert!(matches!(
        r.visibility(View::Dashboard),
        Visibility::FadingOut { .. }
    ));
    assert!(r.visibility(View::Dashboard).is_displayed());

    r.tick(now + FADE_OUT - Duration::from_millis(1));
    assert!(matches!(
        r.visibility(View::Dashboard),
        Visibility::FadingOut { .. }
    ));

    r.tick(now + FADE_OUT);
    assert_eq!(r.visibility(View::Dashboard), Visibility::Hidden);
    assert_eq!(r.visibility(View::Planning), Visibility::Active);
}

#[test]
fn returning_during_fade_keeps_panel_visible() {
    let now = Instant::now();
    let mut r = Router::new("/", now);
    r.navigate("/reports", now);
    r.navigate("/", now + Duration::from_millis(100));
    r.tick(now + Duration::from_secs(1));
    assert_eq!(r.visibility(View::Dashboard), Visibility::Active);
    assert_eq!(r.visibility(View::Reports), Visibility::Hidden);
}

#[test]
fn add_routes_preset_the_form() {
    let now = Instant::now();
    let mut r = Router::new("/add-income", now);
    assert_eq!(r.current().view, View::AddTransaction);
    assert_eq!(r.form().kind, Kind::Income);
    assert_eq!(r.form().title, "Nuevo Ingreso");
    assert_eq!(r.form().accent, Accent::Income);

    r.navigate("/add-expense", now);
    assert_eq!(r.form().kind, Kind::Expense);
    assert_eq!(r.form().title, "Nuevo Gasto");
    assert_eq!(r.visibility(View::AddTransaction), Visibility::Active);
    // neither add route is a nav item
    assert_eq!(r.active_nav(), None);
}

#[test]
fn back_restores_previous_fragment() {
    let now = Instant::now();
    let mut r = Router::new("/", now);
    r.navigate("/planning", now);
    r.navigate("/reports", now);

    let res = r.back(now).unwrap();
    assert_eq!(res.view, View::Planning);
    assert_eq!(r.fragment(), "/planning");
    assert!(r.is_nav_active("/planning"));

    r.back(now).unwrap();
    assert_eq!(r.fragment(), "/");
    assert!(r.back(now).is_none());
}

#[test]
fn unknown_fragment_shows_dashboard_but_keeps_fragment() {
    let now = Instant::now();
    let mut r = Router::new("/planning", now);
    let res = r.navigate("/does-not-exist", now);
    assert_eq!(res.view, View::Dashboard);
    assert_eq!(r.fragment(), "/does-not-exist");
    assert_eq!(r.active_nav(), None);
}

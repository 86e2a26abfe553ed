// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Kind;
use serde::Serialize;
use std::time::{Duration, Instant};

pub const FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Planning,
    Reports,
    AddTransaction,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Dashboard,
        View::Planning,
        View::Reports,
        View::AddTransaction,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            View::Dashboard => "view-dashboard",
            View::Planning => "view-planning",
            View::Reports => "view-reports",
            View::AddTransaction => "view-add-transaction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub view: View,
    pub tx_mode: Option<Kind>,
}

pub fn resolve(path: &str) -> Resolution {
    let (view, tx_mode) = match path {
        "/" => (View::Dashboard, None),
        "/planning" => (View::Planning, None),
        "/reports" => (View::Reports, None),
        "/transactions" => (View::Dashboard, None),
        "/add-income" => (View::AddTransaction, Some(Kind::Income)),
        "/add-expense" => (View::AddTransaction, Some(Kind::Expense)),
        _ => (View::Dashboard, None),
    };
    Resolution { view, tx_mode }
}

/// `#/planning` and `/planning` both become `/planning`; empty becomes `/`.
pub fn normalize_fragment(fragment: &str) -> String {
    let f = fragment.strip_prefix('#').unwrap_or(fragment);
    if f.is_empty() {
        "/".to_string()
    } else {
        f.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxForm {
    pub kind: Kind,
    pub title: &'static str,
    pub accent: Accent,
}

impl TxForm {
    pub fn for_kind(kind: Kind) -> Self {
        match kind {
            Kind::Income => TxForm {
                kind,
                title: "Nuevo Ingreso",
                accent: Accent::Income,
            },
            Kind::Expense => TxForm {
                kind,
                title: "Nuevo Gasto",
                accent: Accent::Expense,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Active,
    FadingOut { hide_at: Instant },
    Hidden,
}

impl Visibility {
    pub fn is_displayed(&self) -> bool {
        !matches!(self, Visibility::Hidden)
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub view: View,
    pub visibility: Visibility,
}

pub const NAV_TARGETS: [&str; 4] = ["/", "/planning", "/reports", "/transactions"];

#[derive(Debug, Clone)]
pub struct Router {
    fragment: String,
    history: Vec<String>,
    panels: Vec<Panel>,
    form: TxForm,
}

impl Router {
    pub fn new(initial: &str, now: Instant) -> Self {
        let mut r = Router {
            fragment: normalize_fragment(initial),
            history: Vec::new(),
            panels: View::ALL
                .iter()
                .map(|v| Panel {
                    view: *v,
                    visibility: Visibility::Hidden,
                })
                .collect(),
            form: TxForm::for_kind(Kind::Expense),
        };
        r.handle_route(now);
        r
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn current(&self) -> Resolution {
        resolve(&self.fragment)
    }

    pub fn form(&self) -> &TxForm {
        &self.form
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn visibility(&self, view: View) -> Visibility {
        self.panels
            .iter()
            .find(|p| p.view == view)
            .map(|p| p.visibility)
            .unwrap_or(Visibility::Hidden)
    }

    pub fn navigate(&mut self, path: &str, now: Instant) -> Resolution {
        let next = normalize_fragment(path);
        let prev = std::mem::replace(&mut self.fragment, next);
        self.history.push(prev);
        self.handle_route(now)
    }

    pub fn back(&mut self, now: Instant) -> Option<Resolution> {
        let prev = self.history.pop()?;
        self.fragment = prev;
        Some(self.handle_route(now))
    }

    pub fn handle_route(&mut self, now: Instant) -> Resolution {
        let res = resolve(&self.fragment);
        if let Some(kind) = res.tx_mode {
            self.form = TxForm::for_kind(kind);
        }
        self.show(res.view, now);
        res
    }

    fn show(&mut self, active: View, now: Instant) {
        for p in self.panels.iter_mut() {
            p.visibility = if p.view == active {
                Visibility::Active
            } else {
                match p.visibility {
                    Visibility::Active => Visibility::FadingOut {
                        hide_at: now + FADE_OUT,
                    },
                    other => other,
                }
            };
        }
    }

    pub fn tick(&mut self, now: Instant) {
        for p in self.panels.iter_mut() {
            if let Visibility::FadingOut { hide_at } = p.visibility {
                if now >= hide_at {
                    p.visibility = Visibility::Hidden;
                }
            }
        }
    }

    pub fn is_nav_active(&self, target: &str) -> bool {
        self.fragment == target
    }

    pub fn active_nav(&self) -> Option<&'static str> {
        NAV_TARGETS.iter().copied().find(|t| self.is_nav_active(t))
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{DashboardView, Presenter};
use crate::aggregate::dashboard_balances;
use crate::store::Store;
use anyhow::{Context, Result};

pub fn load(store: &Store) -> Result<DashboardView> {
    let transactions = store
        .get_transactions()
        .context("Loading transactions for the dashboard")?;
    let balances = dashboard_balances(&transactions);
    Ok(DashboardView {
        balances,
        transactions,
    })
}

pub fn render(store: &Store, presenter: &mut dyn Presenter) -> Result<DashboardView> {
    let view = load(store)?;
    presenter.dashboard(&view)?;
    Ok(view)
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{PlanningView, Presenter};
use crate::aggregate::{YearMonth, plan_totals};
use crate::store::Store;
use anyhow::{Context, Result};

pub fn load(store: &Store, period: YearMonth) -> Result<PlanningView> {
    let plans = store
        .get_plans(period.month, period.year)
        .with_context(|| format!("Loading plans for {}", period))?;
    let totals = plan_totals(&plans);
    Ok(PlanningView {
        period,
        totals,
        plans,
    })
}

pub fn render(
    store: &Store,
    period: YearMonth,
    presenter: &mut dyn Presenter,
) -> Result<PlanningView> {
    let view = load(store, period)?;
    presenter.planning(&view)?;
    Ok(view)
}

/// Sets the completion flag and re-renders. `Ok(false)` if the id is unknown.
pub fn set_completed(
    store: &Store,
    period: YearMonth,
    id: &str,
    completed: bool,
    presenter: &mut dyn Presenter,
) -> Result<bool> {
    let found = store.update_plan_status(id, completed)?;
    if found {
        render(store, period, presenter)?;
    }
    Ok(found)
}

/// Flips whatever the stored flag is now.
pub fn toggle(
    store: &Store,
    period: YearMonth,
    id: &str,
    presenter: &mut dyn Presenter,
) -> Result<bool> {
    let current = load(store, period)?
        .plans
        .into_iter()
        .find(|p| p.id == id)
        .map(|p| p.is_completed);
    match current {
        Some(done) => set_completed(store, period, id, !done, presenter),
        None => Ok(false),
    }
}

pub fn delete(
    store: &Store,
    period: YearMonth,
    id: &str,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    store.delete_plan(id)?;
    render(store, period, presenter)?;
    Ok(())
}

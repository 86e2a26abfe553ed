// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{CurrencyTotals, MonthReport, YearMonth};
use crate::models::{Plan, Transaction};
use anyhow::Result;
use serde::Serialize;

pub mod console;
pub mod dashboard;
pub mod planning;
pub mod reports;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub balances: CurrencyTotals,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanningView {
    pub period: YearMonth,
    pub totals: CurrencyTotals,
    pub plans: Vec<Plan>,
}

pub trait Presenter {
    fn dashboard(&mut self, view: &DashboardView) -> Result<()>;
    fn planning(&mut self, view: &PlanningView) -> Result<()>;
    fn report(&mut self, report: &MonthReport) -> Result<()>;
}

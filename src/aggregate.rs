// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Currency, Kind, Plan, Transaction};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CurrencyTotals {
    pub usd: f64,
    pub ves: f64,
}

impl CurrencyTotals {
    pub fn add(&mut self, currency: Currency, amount: f64) {
        match currency {
            Currency::Usd => self.usd += amount,
            Currency::Ves => self.ves += amount,
        }
    }

    pub fn get(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.usd,
            Currency::Ves => self.ves,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32, // 1-12
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(anyhow::anyhow!("Invalid month number {}", month));
        }
        Ok(YearMonth { year, month })
    }

    pub fn from_date(d: NaiveDate) -> Self {
        YearMonth {
            year: d.year(),
            month: d.month(),
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
        Ok(Self::from_date(d))
    }

    pub fn shifted(&self, delta: i32) -> Result<Self> {
        let idx = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let month = (idx.rem_euclid(12) + 1) as u32;
        i32::try_from(idx.div_euclid(12))
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
            .map(Self::from_date)
            .ok_or_else(|| anyhow::anyhow!("Invalid month step {} from {}", delta, self))
    }

    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

pub fn dashboard_balances(txs: &[Transaction]) -> CurrencyTotals {
    let mut bal = CurrencyTotals::default();
    for tx in txs {
        bal.add(tx.currency, tx.signed_amount());
    }
    bal
}

pub fn plan_totals(plans: &[Plan]) -> CurrencyTotals {
    let mut totals = CurrencyTotals::default();
    for p in plans {
        totals.add(p.currency, p.estimated_amount);
    }
    totals
}

static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("static pattern"));

fn leading_int(s: &str) -> Option<i64> {
    LEADING_INT
        .captures(s)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Year and month from a `Y-M-D` string. Needs at least three dash-separated
/// parts; each of the first two only has to start with an integer.
pub fn date_year_month(date: &str) -> Option<(i64, i64)> {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() < 3 {
        return None;
    }
    Some((leading_int(parts[0])?, leading_int(parts[1])?))
}

pub fn in_month(tx: &Transaction, ym: YearMonth) -> bool {
    matches!(
        date_year_month(&tx.date),
        Some((y, m)) if y == ym.year as i64 && m == ym.month as i64
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthReport {
    pub period: YearMonth,
    pub transactions: usize,
    pub income: CurrencyTotals,
    pub expense: CurrencyTotals,
    pub expense_by_category_usd: BTreeMap<String, f64>,
    pub expense_by_category_ves: BTreeMap<String, f64>,
}

impl MonthReport {
    pub fn breakdown(&self, currency: Currency) -> &BTreeMap<String, f64> {
        match currency {
            Currency::Usd => &self.expense_by_category_usd,
            Currency::Ves => &self.expense_by_category_ves,
        }
    }
}

pub fn month_report(txs: &[Transaction], period: YearMonth) -> MonthReport {
    let mut report = MonthReport {
        period,
        transactions: 0,
        income: CurrencyTotals::default(),
        expense: CurrencyTotals::default(),
        expense_by_category_usd: BTreeMap::new(),
        expense_by_category_ves: BTreeMap::new(),
    };
    for tx in txs.iter().filter(|tx| in_month(tx, period)) {
        report.transactions += 1;
        match tx.kind {
            Kind::Income => report.income.add(tx.currency, tx.amount),
            Kind::Expense => {
                report.expense.add(tx.currency, tx.amount);
                let by_cat = match tx.currency {
                    Currency::Usd => &mut report.expense_by_category_usd,
                    Currency::Ves => &mut report.expense_by_category_ves,
                };
                *by_cat.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
            }
        }
    }
    report
}

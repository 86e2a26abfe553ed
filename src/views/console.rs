// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{DashboardView, PlanningView, Presenter};
use crate::aggregate::MonthReport;
use crate::models::{Currency, Kind};
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};
use anyhow::Result;

/// Terminal output: tables by default, JSON when asked.
#[derive(Debug, Default, Clone)]
pub struct ConsolePresenter {
    pub json: bool,
    pub jsonl: bool,
    pub limit: Option<usize>,
}

impl ConsolePresenter {
    pub fn from_matches(sub: &clap::ArgMatches) -> Self {
        let flag = |name: &str| {
            sub.try_get_one::<bool>(name)
                .ok()
                .flatten()
                .copied()
                .unwrap_or(false)
        };
        ConsolePresenter {
            json: flag("json"),
            jsonl: flag("jsonl"),
            limit: sub.try_get_one::<usize>("limit").ok().flatten().copied(),
        }
    }
}

fn totals_table(label: &str, usd: f64, ves: f64) -> comfy_table::Table {
    pretty_table(
        &[label, "USD", "VES"],
        vec![vec![label.to_string(), fmt_amount(usd), fmt_amount(ves)]],
    )
}

impl Presenter for ConsolePresenter {
    fn dashboard(&mut self, view: &DashboardView) -> Result<()> {
        let shown = view.transactions.len().min(self.limit.unwrap_or(usize::MAX));
        if self.jsonl {
            // one transaction per line
            maybe_print_json(false, true, &view.transactions[..shown].to_vec())?;
            return Ok(());
        }
        if self.json {
            let trimmed = DashboardView {
                balances: view.balances,
                transactions: view.transactions[..shown].to_vec(),
            };
            maybe_print_json(true, false, &trimmed)?;
            return Ok(());
        }
        println!(
            "{}",
            totals_table("Balance", view.balances.usd, view.balances.ves)
        );
        if view.transactions.is_empty() {
            println!("Sin movimientos aún");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = view.transactions[..shown]
            .iter()
            .map(|tx| {
                let sign = match tx.kind {
                    Kind::Expense => "- ",
                    Kind::Income => "+ ",
                };
                vec![
                    tx.date.clone(),
                    tx.category.clone(),
                    tx.description.clone().unwrap_or_default(),
                    format!("{}{}", sign, fmt_amount(tx.amount)),
                    tx.currency.to_string(),
                    tx.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Category", "Description", "Amount", "CCY", "Id"],
                rows
            )
        );
        Ok(())
    }

    fn planning(&mut self, view: &PlanningView) -> Result<()> {
        if maybe_print_json(self.json, self.jsonl, view)? {
            return Ok(());
        }
        println!("{}", view.period.label());
        if view.plans.is_empty() {
            println!("No hay planes para este mes.");
        } else {
            let rows: Vec<Vec<String>> = view
                .plans
                .iter()
                .map(|p| {
                    vec![
                        if p.is_completed { "[x]" } else { "[ ]" }.to_string(),
                        p.description.clone(),
                        p.category.clone(),
                        fmt_amount(p.estimated_amount),
                        p.currency.to_string(),
                        p.id.clone(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(
                    &["Done", "Description", "Category", "Estimated", "CCY", "Id"],
                    rows
                )
            );
        }
        println!(
            "{}",
            totals_table("Planned", view.totals.usd, view.totals.ves)
        );
        Ok(())
    }

    fn report(&mut self, report: &MonthReport) -> Result<()> {
        if maybe_print_json(self.json, self.jsonl, report)? {
            return Ok(());
        }
        println!("{}", report.period.label());
        println!(
            "{}",
            pretty_table(
                &["", "USD", "VES"],
                vec![
                    vec![
                        "Income".into(),
                        fmt_amount(report.income.usd),
                        fmt_amount(report.income.ves),
                    ],
                    vec![
                        "Expense".into(),
                        fmt_amount(report.expense.usd),
                        fmt_amount(report.expense.ves),
                    ],
                ],
            )
        );
        for ccy in [Currency::Usd, Currency::Ves] {
            let rows: Vec<Vec<String>> = report
                .breakdown(ccy)
                .iter()
                .map(|(cat, amt)| vec![cat.clone(), fmt_amount(*amt)])
                .collect();
            if rows.is_empty() {
                continue;
            }
            let hdr = format!("Spent ({})", ccy);
            println!("{}", pretty_table(&["Category", &hdr], rows));
        }
        Ok(())
    }
}

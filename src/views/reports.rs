// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Presenter;
use crate::aggregate::{MonthReport, YearMonth, month_report};
use crate::store::Store;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RenderSeq {
    current: AtomicU64,
}

impl RenderSeq {
    pub fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::SeqCst) == generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket {
    pub generation: u64,
    pub period: YearMonth,
}

#[derive(Debug, Clone)]
pub struct ReportFrame {
    pub generation: u64,
    pub report: MonthReport,
}

pub struct ReportsController {
    cursor: YearMonth,
    seq: Arc<RenderSeq>,
}

impl ReportsController {
    pub fn new(cursor: YearMonth) -> Self {
        ReportsController {
            cursor,
            seq: Arc::new(RenderSeq::default()),
        }
    }

    pub fn cursor(&self) -> YearMonth {
        self.cursor
    }

    pub fn sequencer(&self) -> Arc<RenderSeq> {
        Arc::clone(&self.seq)
    }

    pub fn step(&mut self, delta: i32) -> Result<YearMonth> {
        self.cursor = self.cursor.shifted(delta)?;
        Ok(self.cursor)
    }

    pub fn begin(&self) -> RenderTicket {
        RenderTicket {
            generation: self.seq.advance(),
            period: self.cursor,
        }
    }

    pub fn compute(store: &Store, ticket: RenderTicket) -> Result<ReportFrame> {
        let all = store
            .get_transactions()
            .with_context(|| format!("Loading transactions for report {}", ticket.period))?;
        Ok(ReportFrame {
            generation: ticket.generation,
            report: month_report(&all, ticket.period),
        })
    }

    /// Presents the frame unless a newer render has begun. Returns whether
    /// it was presented.
    pub fn commit(&self, frame: &ReportFrame, presenter: &mut dyn Presenter) -> Result<bool> {
        if !self.seq.is_current(frame.generation) {
            log::debug!(
                "discarding stale report frame for {} (generation {})",
                frame.report.period,
                frame.generation
            );
            return Ok(false);
        }
        presenter.report(&frame.report)?;
        Ok(true)
    }

    pub fn render(&self, store: &Store, presenter: &mut dyn Presenter) -> Result<MonthReport> {
        let ticket = self.begin();
        let frame = Self::compute(store, ticket)?;
        self.commit(&frame, presenter)?;
        Ok(frame.report)
    }

    pub fn change_month(
        &mut self,
        delta: i32,
        store: &Store,
        presenter: &mut dyn Presenter,
    ) -> Result<MonthReport> {
        self.step(delta)?;
        self.render(store, presenter)
    }
}

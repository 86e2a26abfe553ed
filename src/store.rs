// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::init_schema;
use crate::models::{Currency, Kind, Plan, Transaction};
use once_cell::unsync::OnceCell;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open database at {location}: {source}")]
    Unavailable {
        location: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("storage request failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("invalid setting value: {0}")]
    Codec(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub enum Location {
    File(PathBuf),
    Memory,
}

impl Location {
    pub fn describe(&self) -> String {
        match self {
            Location::File(p) => p.display().to_string(),
            Location::Memory => ":memory:".to_string(),
        }
    }
}

pub struct Store {
    location: Location,
    conn: OnceCell<Connection>,
}

impl Store {
    pub fn new(location: Location) -> Self {
        Store {
            location,
            conn: OnceCell::new(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Location::Memory)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn init(&self) -> Result<&Connection, StoreError> {
        self.conn.get_or_try_init(|| {
            let unavailable = |source: rusqlite::Error| StoreError::Unavailable {
                location: self.location.describe(),
                source,
            };
            let conn = match &self.location {
                Location::File(p) => Connection::open(p),
                Location::Memory => Connection::open_in_memory(),
            }
            .map_err(unavailable)?;
            init_schema(&conn).map_err(unavailable)?;
            log::info!("database initialized at {}", self.location.describe());
            Ok(conn)
        })
    }

    pub fn is_open(&self) -> bool {
        self.conn.get().is_some()
    }

    // --- transactions ---

    pub fn add_transaction(&self, tx: &Transaction) -> Result<String, StoreError> {
        let conn = self.init()?;
        conn.execute(
            "INSERT INTO transactions(id, kind, amount, currency, category, date, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                kind=excluded.kind, amount=excluded.amount, currency=excluded.currency,
                category=excluded.category, date=excluded.date,
                description=excluded.description, created_at=excluded.created_at",
            params![
                tx.id,
                tx.kind.as_str(),
                tx.amount,
                tx.currency.as_str(),
                tx.category,
                tx.date,
                tx.description,
                tx.created_at
            ],
        )?;
        Ok(tx.id.clone())
    }

    pub fn get_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let conn = self.init()?;
        let mut stmt = conn.prepare(
            "SELECT id, kind, amount, currency, category, date, description, created_at
             FROM transactions ORDER BY date DESC",
        )?;
        let rows = stmt.query_map([], transaction_from_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn delete_transaction(&self, id: &str) -> Result<(), StoreError> {
        let conn = self.init()?;
        conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(())
    }

    // --- plans ---

    pub fn add_plan(&self, plan: &Plan) -> Result<String, StoreError> {
        let conn = self.init()?;
        conn.execute(
            "INSERT INTO plans(id, month, year, description, estimated_amount, currency, category, is_completed, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(id) DO UPDATE SET
                month=excluded.month, year=excluded.year, description=excluded.description,
                estimated_amount=excluded.estimated_amount, currency=excluded.currency,
                category=excluded.category, is_completed=excluded.is_completed,
                created_at=excluded.created_at",
            params![
                plan.id,
                plan.month,
                plan.year,
                plan.description,
                plan.estimated_amount,
                plan.currency.as_str(),
                plan.category,
                plan.is_completed,
                plan.created_at
            ],
        )?;
        Ok(plan.id.clone())
    }

    pub fn get_plans(&self, month: u32, year: i32) -> Result<Vec<Plan>, StoreError> {
        let conn = self.init()?;
        let mut stmt = conn.prepare(
            "SELECT id, month, year, description, estimated_amount, currency, category, is_completed, created_at
             FROM plans WHERE month=?1 AND year=?2",
        )?;
        let rows = stmt.query_map(params![month, year], plan_from_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn update_plan_status(&self, id: &str, completed: bool) -> Result<bool, StoreError> {
        let conn = self.init()?;
        let tx = conn.unchecked_transaction()?;
        let found: Option<String> = tx
            .query_row("SELECT id FROM plans WHERE id=?1", params![id], |r| r.get(0))
            .optional()?;
        if found.is_none() {
            return Ok(false);
        }
        tx.execute(
            "UPDATE plans SET is_completed=?1 WHERE id=?2",
            params![completed, id],
        )?;
        tx.commit()?;
        Ok(true)
    }

    pub fn delete_plan(&self, id: &str) -> Result<(), StoreError> {
        let conn = self.init()?;
        conn.execute("DELETE FROM plans WHERE id=?1", params![id])?;
        Ok(())
    }

    // --- settings ---

    /// Missing keys and failed reads both come back as `None`.
    pub fn get_setting(&self, key: &str) -> Option<serde_json::Value> {
        match self.read_setting(key) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("reading setting '{}' failed: {}", key, e);
                None
            }
        }
    }

    fn read_setting(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let conn = self.init()?;
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM settings WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        match raw {
            Some(s) => Ok(Some(serde_json::from_str(&s)?)),
            None => Ok(None),
        }
    }

    pub fn set_setting(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        let conn = self.init()?;
        let encoded = serde_json::to_string(value)?;
        conn.execute(
            "INSERT INTO settings(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, encoded],
        )?;
        Ok(())
    }
}

fn transaction_from_row(r: &Row<'_>) -> rusqlite::Result<Transaction> {
    let kind: String = r.get(1)?;
    let currency: String = r.get(3)?;
    Ok(Transaction {
        id: r.get(0)?,
        kind: if kind == "income" {
            Kind::Income
        } else {
            Kind::Expense
        },
        amount: r.get(2)?,
        currency: Currency::from_stored(&currency),
        category: r.get(4)?,
        date: r.get(5)?,
        description: r.get(6)?,
        created_at: r.get(7)?,
    })
}

fn plan_from_row(r: &Row<'_>) -> rusqlite::Result<Plan> {
    let currency: String = r.get(5)?;
    Ok(Plan {
        id: r.get(0)?,
        month: r.get(1)?,
        year: r.get(2)?,
        description: r.get(3)?,
        estimated_amount: r.get(4)?,
        currency: Currency::from_stored(&currency),
        category: r.get(6)?,
        is_completed: r.get(7)?,
        created_at: r.get(8)?,
    })
}

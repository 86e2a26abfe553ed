// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }

    /// Sign applied to a stored (always positive) amount.
    pub fn sign(&self) -> f64 {
        match self {
            Kind::Income => 1.0,
            Kind::Expense => -1.0,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Kind::Income),
            "expense" => Ok(Kind::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid kind '{}', expected income|expense",
                other
            )),
        }
    }
}

/// The two ledgers kept side by side: US dollars and the local currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "VES")]
    Ves,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ves => "VES",
        }
    }

    /// Stored codes other than USD land in the local-currency bucket.
    pub fn from_stored(code: &str) -> Self {
        if code == "USD" {
            Currency::Usd
        } else {
            Currency::Ves
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "VES" | "BS" => Ok(Currency::Ves),
            other => Err(anyhow::anyhow!(
                "Invalid currency '{}', expected USD|VES",
                other
            )),
        }
    }
}

pub const SUGGESTED_CATEGORIES: [&str; 9] = [
    "Comida",
    "Transporte",
    "Servicios",
    "Salud",
    "Entretenimiento",
    "Ropa",
    "Sueldo",
    "Ventas",
    "Otros",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: Kind,
    pub amount: f64,
    pub currency: Currency,
    pub category: String,
    pub date: String, // YYYY-MM-DD, not validated
    pub description: Option<String>,
    pub created_at: String,
}

impl Transaction {
    pub fn new(
        kind: Kind,
        amount: f64,
        currency: Currency,
        category: &str,
        date: &str,
        description: Option<String>,
    ) -> Self {
        Transaction {
            id: new_id(),
            kind,
            amount,
            currency,
            category: category.to_string(),
            date: date.to_string(),
            description,
            created_at: now_stamp(),
        }
    }

    pub fn signed_amount(&self) -> f64 {
        self.kind.sign() * self.amount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub month: u32, // 1-12
    pub year: i32,
    pub description: String,
    pub estimated_amount: f64,
    pub currency: Currency,
    pub category: String,
    pub is_completed: bool,
    pub created_at: String,
}

impl Plan {
    pub fn new(
        month: u32,
        year: i32,
        description: &str,
        estimated_amount: f64,
        currency: Currency,
        category: &str,
    ) -> Self {
        Plan {
            id: new_id(),
            month,
            year,
            description: description.to_string(),
            estimated_amount,
            currency,
            category: category.to_string(),
            is_completed: false,
            created_at: now_stamp(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub pin: String,
}

impl UserProfile {
    pub fn avatar_initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_uppercase().next())
    }
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

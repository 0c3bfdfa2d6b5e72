// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

pub const DEFAULT_CATEGORY: &str = "other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[serde(alias = "receita")]
    Income,
    #[serde(alias = "despesa")]
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }

    /// Sign shown in front of the amount when listing.
    pub fn sign(&self) -> char {
        match self {
            Kind::Income => '+',
            Kind::Expense => '-',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" => Ok(Kind::Income),
            "expense" | "despesa" => Ok(Kind::Expense),
            other => Err(LedgerError::Validation(format!(
                "unknown kind '{}' (use income|expense)",
                other
            ))),
        }
    }
}

/// One recorded income or expense. Field aliases accept data written by the
/// browser version of the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(alias = "tipo")]
    pub kind: Kind,
    #[serde(alias = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(alias = "descricao")]
    pub description: String,
    #[serde(alias = "categoria", default = "default_category")]
    pub category: String,
    #[serde(alias = "data", default)]
    pub date_display: String,
    #[serde(alias = "timestamp", default)]
    pub created_at: i64,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub balance: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn kind_parses_both_vocabularies() {
        assert_eq!("income".parse::<Kind>().unwrap(), Kind::Income);
        assert_eq!(" Despesa ".parse::<Kind>().unwrap(), Kind::Expense);
        assert!("transfer".parse::<Kind>().is_err());
    }

    #[test]
    fn legacy_record_deserializes() {
        let raw = r#"{"id":1704067200000,"tipo":"receita","valor":1000.5,"descricao":"Salário","categoria":"salario","data":"01/01/2024","timestamp":1704067200000}"#;
        let t: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(t.kind, Kind::Income);
        assert_eq!(t.amount, dec("1000.5"));
        assert_eq!(t.description, "Salário");
        assert_eq!(t.date_display, "01/01/2024");
        assert_eq!(t.created_at, 1704067200000);
    }

    #[test]
    fn serializes_amount_as_number() {
        let t = Transaction {
            id: 1,
            kind: Kind::Expense,
            amount: dec("12.5"),
            description: "Pão".into(),
            category: "mercado".into(),
            date_display: "02/01/2024".into(),
            created_at: 5,
        };
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["kind"], "expense");
        assert_eq!(v["amount"], 12.5);
        assert_eq!(v["dateDisplay"], "02/01/2024");
        assert_eq!(v["createdAt"], 5);
    }
}

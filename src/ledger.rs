// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The transaction ledger and its persistence.
//!
//! The whole ledger lives under a single key as a JSON array, newest first.
//! It is read once when the store is opened and rewritten in full after every
//! mutation.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::db::KvStore;
use crate::error::LedgerError;
use crate::models::{Kind, Transaction, DEFAULT_CATEGORY};
use crate::utils::date_display;

pub const LEDGER_KEY: &str = "finassist.transactions";

/// Largest amount a single transaction may carry. Keeps every ledger sum far
/// below the `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

pub struct LedgerStore<S> {
    store: S,
    transactions: Vec<Transaction>,
}

impl<S: KvStore> LedgerStore<S> {
    /// Loads the persisted ledger. Missing or unreadable JSON yields an empty
    /// ledger; only a failing backend is an error.
    pub fn load(store: S) -> Result<Self> {
        let transactions = match store.get(LEDGER_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Transaction>>(&raw) {
                Ok(mut list) => {
                    let before = list.len();
                    list.retain(|t| t.amount > Decimal::ZERO && t.amount <= MAX_AMOUNT);
                    if list.len() != before {
                        warn!(
                            dropped = before - list.len(),
                            "stored transactions with out-of-range amounts ignored"
                        );
                    }
                    list
                }
                Err(err) => {
                    warn!(error = %err, "stored ledger is not valid JSON, starting empty");
                    Vec::new()
                }
            },
        };
        debug!(count = transactions.len(), "ledger loaded");
        Ok(Self {
            store,
            transactions,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Records a transaction from raw form values, stamped with the current time.
    pub fn add(
        &mut self,
        kind: Kind,
        amount: &str,
        description: &str,
        category: Option<&str>,
    ) -> Result<&Transaction> {
        self.add_at(kind, amount, description, category, Local::now())
    }

    pub fn add_at(
        &mut self,
        kind: Kind,
        amount: &str,
        description: &str,
        category: Option<&str>,
        now: DateTime<Local>,
    ) -> Result<&Transaction> {
        let amount = parse_amount(amount)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::Validation("description must not be empty".into()).into());
        }
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);

        let tx = Transaction {
            id: self.next_id(),
            kind,
            amount,
            description: description.to_string(),
            category: category.to_string(),
            date_display: date_display(now.date_naive()),
            created_at: now.timestamp_millis(),
        };
        self.transactions.insert(0, tx);
        if let Err(err) = self.persist() {
            self.transactions.remove(0);
            return Err(err);
        }
        let tx = &self.transactions[0];
        info!(id = tx.id, kind = %tx.kind, amount = %tx.amount, "transaction added");
        Ok(tx)
    }

    /// Drops every transaction. Asking the user is the caller's job.
    pub fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.transactions);
        if let Err(err) = self.persist() {
            self.transactions = previous;
            return Err(err);
        }
        info!(removed = previous.len(), "ledger cleared");
        Ok(())
    }

    pub fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.transactions).context("Serialize ledger")?;
        self.store.set(LEDGER_KEY, &raw)?;
        debug!(count = self.transactions.len(), bytes = raw.len(), "ledger persisted");
        Ok(())
    }

    fn next_id(&self) -> i64 {
        self.transactions
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(1, |m| m + 1)
    }
}

/// Accepts a positive decimal up to [`MAX_AMOUNT`]; anything else is a
/// validation error.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LedgerError::Validation("amount is required".into()));
    }
    let amount = raw
        .parse::<Decimal>()
        .map_err(|_| LedgerError::Validation(format!("invalid amount '{}'", raw)))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::Validation(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "amount must not exceed {}, got {}",
            MAX_AMOUNT, amount
        )));
    }
    Ok(amount)
}

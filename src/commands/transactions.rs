// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::required;
use crate::db::KvStore;
use crate::ledger::LedgerStore;
use crate::models::Kind;
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, pretty_table};
use anyhow::{anyhow, Result};
use serde::Serialize;

pub fn handle<S: KvStore>(ledger: &mut LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: KvStore>(ledger: &mut LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let kind = *sub
        .get_one::<Kind>("kind")
        .ok_or_else(|| anyhow!("missing required argument 'kind'"))?;
    let amount = required(sub, "amount")?;
    let description = required(sub, "description")?;
    let category = sub.get_one::<String>("category").map(String::as_str);

    let symbol = get_currency_symbol(ledger.store())?;
    let tx = ledger.add(kind, amount, description, category)?;
    println!(
        "✅ Recorded {} {} '{}' in {} on {}",
        tx.kind,
        fmt_money(&tx.amount, &symbol),
        tx.description,
        tx.category,
        tx.date_display
    );
    Ok(())
}

fn list<S: KvStore>(ledger: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No transactions recorded");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub kind: String,
    pub amount: String,
}

/// Newest first, cut at `--limit`. Amounts carry their sign and currency.
pub fn query_rows<S: KvStore>(
    ledger: &LedgerStore<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    let symbol = get_currency_symbol(ledger.store())?;
    let data = ledger
        .transactions()
        .iter()
        .take(limit)
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date_display.clone(),
            description: t.description.clone(),
            category: t.category.clone(),
            kind: t.kind.to_string(),
            amount: format!("{} {}", t.kind.sign(), fmt_money(&t.amount, &symbol)),
        })
        .collect();
    Ok(data)
}

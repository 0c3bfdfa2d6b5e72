// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{category_breakdown, compute_totals, largest_category};
use crate::db::KvStore;
use crate::ledger::LedgerStore;
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle<S: KvStore>(ledger: &LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("totals", sub)) => totals(ledger, sub)?,
        Some(("categories", sub)) => categories(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn totals<S: KvStore>(ledger: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let totals = compute_totals(ledger.transactions());
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        println!(
            "{}",
            pretty_table(
                &["Balance", "Income", "Expense", "Transactions"],
                vec![totals_row(ledger)?]
            )
        );
    }
    Ok(())
}

/// Balance, income, expense and transaction count, formatted for display.
pub fn totals_row<S: KvStore>(ledger: &LedgerStore<S>) -> Result<Vec<String>> {
    let totals = compute_totals(ledger.transactions());
    let symbol = get_currency_symbol(ledger.store())?;
    Ok(vec![
        fmt_money(&totals.balance, &symbol),
        fmt_money(&totals.total_income, &symbol),
        fmt_money(&totals.total_expense, &symbol),
        ledger.len().to_string(),
    ])
}

fn categories<S: KvStore>(ledger: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let breakdown = category_breakdown(ledger.transactions());
    if maybe_print_json(json_flag, jsonl_flag, &breakdown)? {
        return Ok(());
    }
    let Some(top) = largest_category(&breakdown) else {
        println!("No expenses recorded");
        return Ok(());
    };
    let symbol = get_currency_symbol(ledger.store())?;
    println!("{}", pretty_table(&["Category", "Spent"], category_rows(ledger)?));
    println!("Largest: {} ({})", top.category, fmt_money(&top.total, &symbol));
    Ok(())
}

/// One `[category, spent]` row per expense category, first-seen order.
pub fn category_rows<S: KvStore>(ledger: &LedgerStore<S>) -> Result<Vec<Vec<String>>> {
    let symbol = get_currency_symbol(ledger.store())?;
    Ok(category_breakdown(ledger.transactions())
        .iter()
        .map(|c| vec![c.category.clone(), fmt_money(&c.total, &symbol)])
        .collect())
}

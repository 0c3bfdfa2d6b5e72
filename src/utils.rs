// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::db::KvStore;
use crate::error::LedgerError;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";
const CURRENCY_KEY: &str = "currency_symbol";

/// Calendar date as shown to the user (dd/mm/yyyy).
pub fn date_display(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{} {:.2}", symbol, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn get_currency_symbol<S: KvStore>(store: &S) -> Result<String> {
    Ok(store
        .get(CURRENCY_KEY)?
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()))
}

pub fn set_currency_symbol<S: KvStore>(store: &mut S, symbol: &str) -> Result<()> {
    store.set(CURRENCY_KEY, symbol.trim())
}

/// Line printed on stderr when a command fails. Domain errors read as
/// warnings; anything else carries its full context chain.
pub fn failure_message(e: &anyhow::Error) -> String {
    match e.downcast_ref::<LedgerError>() {
        Some(warning) => format!("⚠️ {}", warning),
        None => format!("Error: {:#}", e),
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::error::LedgerError;
use crate::models::Transaction;

pub const HEADER: &str = "Data,Descrição,Categoria,Tipo,Valor";
pub const CONTENT_TYPE: &str = "text/csv";

/// Renders the ledger as CSV, one line per transaction in ledger order.
/// Text fields are always quoted; the amount never is.
pub fn to_delimited_text(transactions: &[Transaction]) -> Result<String, LedgerError> {
    if transactions.is_empty() {
        return Err(LedgerError::EmptyLedger);
    }
    let mut lines = Vec::with_capacity(transactions.len() + 1);
    lines.push(HEADER.to_string());
    for t in transactions {
        lines.push(format!(
            "{},{},{},{},{:.2}",
            quote(&t.date_display),
            quote(&t.description),
            quote(&t.category),
            quote(t.kind.as_str()),
            t.amount.round_dp(2),
        ));
    }
    Ok(lines.join("\n"))
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("financas-{}.csv", date.format("%d-%m-%Y"))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KvStore;
use crate::export::{export_file_name, to_delimited_text, CONTENT_TYPE};
use crate::ledger::LedgerStore;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub fn handle<S: KvStore>(ledger: &LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    let text = to_delimited_text(ledger.transactions())?;
    if m.get_flag("stdout") {
        println!("{}", text);
        return Ok(());
    }
    let out = m
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(export_file_name(chrono::Local::now().date_naive())));
    std::fs::write(&out, &text).with_context(|| format!("Write {}", out.display()))?;
    info!(path = %out.display(), content_type = CONTENT_TYPE, count = ledger.len(), "ledger exported");
    println!("Exported {} transactions to {}", ledger.len(), out.display());
    Ok(())
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KvStore;
use crate::ledger::LedgerStore;
use anyhow::Result;
use dialoguer::Confirm;

pub fn handle<S: KvStore>(ledger: &mut LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    let confirmed = m.get_flag("yes")
        || Confirm::new()
            .with_prompt("Tem certeza que deseja limpar todos os dados? Esta ação não pode ser desfeita.")
            .default(false)
            .interact()?;
    if !confirmed {
        println!("Nothing cleared");
        return Ok(());
    }
    let removed = ledger.len();
    ledger.clear()?;
    println!("Cleared {} transactions", removed);
    Ok(())
}

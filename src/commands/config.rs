// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KvStore;
use crate::utils::{get_currency_symbol, set_currency_symbol};
use anyhow::{bail, Result};

pub fn handle<S: KvStore>(store: &mut S, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("currency", sub)) = m.subcommand() {
        match sub.get_one::<String>("symbol") {
            Some(symbol) => {
                if symbol.trim().is_empty() {
                    bail!("Currency symbol must not be empty");
                }
                set_currency_symbol(store, symbol)?;
                println!("Currency symbol set to {}", symbol.trim());
            }
            None => println!("{}", get_currency_symbol(store)?),
        }
    }
    Ok(())
}

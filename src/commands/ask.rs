// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::assistant::{AnswerSlot, Assistant, AssistantContext};
use crate::db::KvStore;
use crate::ledger::LedgerStore;
use crate::utils::get_currency_symbol;
use anyhow::{anyhow, Context, Result};
use std::time::Duration;

pub fn handle<S: KvStore>(ledger: &LedgerStore<S>, m: &clap::ArgMatches) -> Result<()> {
    let question = m
        .get_many::<String>("question")
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    let delay = Duration::from_millis(m.get_one::<u64>("delay_ms").copied().unwrap_or(0));
    if !delay.is_zero() && !question.trim().is_empty() {
        eprintln!("🤔 Pensando...");
    }
    println!("{}", respond(ledger, &question, delay)?);
    Ok(())
}

/// Answers `question` from the current ledger after `delay`.
pub fn respond<S: KvStore>(
    ledger: &LedgerStore<S>,
    question: &str,
    delay: Duration,
) -> Result<String> {
    let assistant = Assistant::new(get_currency_symbol(ledger.store())?);
    let ctx = AssistantContext::from_transactions(ledger.transactions());
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Start assistant runtime")?;
    rt.block_on(async {
        let mut slot = AnswerSlot::new(assistant, delay);
        let pending = slot.ask(question, &ctx)?;
        pending
            .wait()
            .await
            .ok_or_else(|| anyhow!("answer was superseded"))
    })
}

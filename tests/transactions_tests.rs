// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finassist::db::SqliteStore;
use finassist::{cli, commands::transactions, LedgerError, LedgerStore};

fn setup() -> LedgerStore<SqliteStore> {
    LedgerStore::load(SqliteStore::open_in_memory().unwrap()).unwrap()
}

fn run_tx(ledger: &mut LedgerStore<SqliteStore>, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["finassist", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(ledger, tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn add_puts_newest_first() {
    let mut ledger = setup();
    run_tx(
        &mut ledger,
        &["add", "--kind", "income", "--amount", "1000", "-d", "Salário", "-c", "salario"],
    )
    .unwrap();
    run_tx(
        &mut ledger,
        &["add", "--kind", "expense", "--amount", "35.90", "-d", "Pizza"],
    )
    .unwrap();

    assert_eq!(ledger.len(), 2);
    let newest = &ledger.transactions()[0];
    assert_eq!(newest.description, "Pizza");
    assert_eq!(newest.category, "other");
    assert_eq!(ledger.transactions()[1].category, "salario");
}

#[test]
fn zero_amount_is_rejected_without_mutation() {
    let mut ledger = setup();
    let err = run_tx(
        &mut ledger,
        &["add", "--kind", "expense", "--amount", "0", "-d", "Nada"],
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::Validation(_))
    ));
    assert!(ledger.is_empty());
}

#[test]
fn list_limit_respected() {
    let mut ledger = setup();
    for i in 1..=3 {
        let amount = format!("{}", i * 10);
        let desc = format!("Compra {}", i);
        run_tx(
            &mut ledger,
            &["add", "--kind", "expense", "--amount", amount.as_str(), "-d", desc.as_str()],
        )
        .unwrap();
    }

    let matches = cli::build_cli().get_matches_from(["finassist", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&ledger, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].description, "Compra 3");
            assert_eq!(rows[0].amount, "- R$ 30.00");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

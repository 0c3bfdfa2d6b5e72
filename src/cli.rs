// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

use crate::models::Kind;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("finassist")
        .about("Personal finance tracker with a rule-based assistant")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("FINASSIST_DB")
                .value_parser(value_parser!(std::path::PathBuf))
                .help("SQLite database file (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .help("Log level when RUST_LOG is not set"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .value_parser(|s: &str| s.parse::<Kind>())
                                .help("income|expense (receita|despesa also accepted)"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .required(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .help("Defaults to 'other'"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List newest transactions").arg(
                        Arg::new("limit")
                            .long("limit")
                            .default_value("10")
                            .value_parser(value_parser!(usize)),
                    ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Totals and category breakdown")
                .subcommand(json_flags(Command::new("totals")))
                .subcommand(json_flags(Command::new("categories"))),
        )
        .subcommand(
            Command::new("ask")
                .about("Ask the assistant about your finances")
                .arg(Arg::new("question").required(true).num_args(1..))
                .arg(
                    Arg::new("delay_ms")
                        .long("delay-ms")
                        .default_value("1500")
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export all transactions as CSV")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .conflicts_with("stdout")
                        .help("Output file (defaults to financas-<date>.csv)"),
                )
                .arg(Arg::new("stdout").long("stdout").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete every transaction")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .action(ArgAction::SetTrue)
                        .help("Skip the confirmation prompt"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(
                    Command::new("currency")
                        .about("Currency symbol used in answers and reports")
                        .arg(Arg::new("symbol")),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn kind_accepts_portuguese_alias() {
        let m = build_cli().get_matches_from([
            "finassist", "tx", "add", "--kind", "despesa", "--amount", "3", "-d", "Pão",
        ]);
        let (_, tx) = m.subcommand().unwrap();
        let (_, add) = tx.subcommand().unwrap();
        assert_eq!(add.get_one::<Kind>("kind"), Some(&Kind::Expense));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let res = build_cli().try_get_matches_from([
            "finassist", "tx", "add", "--kind", "loan", "--amount", "3", "-d", "x",
        ]);
        assert!(res.is_err());
    }
}

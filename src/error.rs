// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures the user is told about directly. Nothing is mutated when one of
/// these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Nothing to export: the ledger has no transactions")]
    EmptyLedger,
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod ask;
pub mod clear;
pub mod config;
pub mod exporter;
pub mod reports;
pub mod transactions;

use anyhow::{anyhow, Result};

pub(crate) fn required<'a>(m: &'a clap::ArgMatches, id: &str) -> Result<&'a String> {
    m.get_one::<String>(id)
        .ok_or_else(|| anyhow!("missing required argument '{}'", id))
}

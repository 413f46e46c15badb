// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::chart;
use crate::ledger::Ledger;
use crate::models::RecordRow;
use crate::utils::{arg, maybe_print_json, record_table};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

pub fn table(ledger: &Ledger, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let rows: Vec<RecordRow> = ledger.records().iter().map(RecordRow::from).collect();
    if maybe_print_json(out, sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    if ledger.is_empty() {
        writeln!(out, "No transactions yet.")?;
    } else {
        writeln!(out, "{}", record_table(ledger.records()))?;
    }
    Ok(())
}

pub fn chart(ledger: &Ledger, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    if ledger.is_empty() {
        writeln!(out, "No transactions to chart yet.")?;
        return Ok(());
    }
    let path: PathBuf = arg(sub, "out")?;
    let size = (arg::<u32>(sub, "width")?, arg::<u32>(sub, "height")?);
    chart::write_svg(ledger.records(), &path, size, sub.get_flag("income-bars"))?;
    writeln!(out, "Chart written to {}", path.display())?;
    Ok(())
}

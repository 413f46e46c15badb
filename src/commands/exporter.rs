// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::RecordRow;
use crate::store::write_records;
use crate::utils::arg;
use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let fmt = arg::<String>(sub, "format")?.trim().to_lowercase();
    let path: String = arg(sub, "out")?;
    export(ledger, &fmt, Path::new(path.trim()))?;
    writeln!(out, "Exported {} records to {}", ledger.len(), path.trim())?;
    Ok(())
}

pub fn export(ledger: &Ledger, fmt: &str, out: &Path) -> Result<()> {
    match fmt {
        "csv" => write_records(out, ledger.records())?,
        "json" => {
            let rows: Vec<RecordRow> = ledger.records().iter().map(RecordRow::from).collect();
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Write {}", out.display()))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    Ok(())
}

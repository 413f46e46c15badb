// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;
use std::sync::Once;

use crate::models::TransactionRecord;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let default = if verbose {
            "dailyledger=debug"
        } else {
            "dailyledger=warn"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Format an integer amount as rupiah with thousands separators, e.g. `Rp60,000`.
pub fn fmt_rp(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-Rp{}", grouped)
    } else {
        format!("Rp{}", grouped)
    }
}

/// [`fmt_rp`] for unsigned amounts.
pub fn fmt_rp_u(amount: u64) -> String {
    match i64::try_from(amount) {
        Ok(v) => fmt_rp(v),
        Err(_) => format!("Rp{}", amount),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn record_table(records: &[TransactionRecord]) -> Table {
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.day.to_string(),
                fmt_rp(r.daily_budget),
                fmt_rp_u(r.expense),
                fmt_rp_u(r.income),
                r.note.clone().unwrap_or_default(),
            ]
        })
        .collect();
    pretty_table(&["Day", "Daily budget", "Expense", "Income", "Note"], rows)
}

pub fn maybe_print_json<T: serde::Serialize>(
    out: &mut dyn Write,
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        writeln!(out, "{}", serde_json::to_string_pretty(v)?)?;
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                writeln!(out, "{}", serde_json::to_string(item)?)?;
            }
        } else {
            writeln!(out, "{}", serde_json::to_string(&val)?)?;
        }
        return Ok(true);
    }
    Ok(false)
}

/// Fetch a typed argument that clap guarantees through `required` or a default.
pub fn arg<T: Clone + Send + Sync + 'static>(m: &clap::ArgMatches, name: &str) -> Result<T> {
    m.get_one::<T>(name)
        .cloned()
        .with_context(|| format!("Missing argument '{}'", name))
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::BUDGET_OPTIONS;
use crate::session::Session;
use crate::utils::{arg, fmt_rp, maybe_print_json};
use anyhow::{Result, bail};
use serde::Serialize;
use std::io::Write;
use tracing::info;

pub fn set(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let amount: u64 = arg(sub, "amount")?;
    if !BUDGET_OPTIONS.contains(&amount) {
        let options: Vec<String> = BUDGET_OPTIONS.iter().map(|o| o.to_string()).collect();
        bail!(
            "Invalid daily budget {}; choose one of {}",
            amount,
            options.join(", ")
        );
    }
    let carried = session.ledger().remaining_budget();
    let current = session.ledger_mut().set_initial_budget(amount)?;
    session.commit()?;
    info!(amount, carried, current, "daily budget set");
    writeln!(out, "Daily budget set to {}", fmt_rp(current))?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Status {
    pub current_budget: i64,
    pub remaining_budget: i64,
    pub records: usize,
    pub location: String,
}

pub fn current_status(session: &Session) -> Status {
    let ledger = session.ledger();
    Status {
        current_budget: ledger.current_budget(),
        remaining_budget: ledger.remaining_budget(),
        records: ledger.len(),
        location: session.location(),
    }
}

pub fn status(session: &Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let s = current_status(session);
    if !maybe_print_json(out, sub.get_flag("json"), false, &s)? {
        writeln!(out, "Current budget:   {}", fmt_rp(s.current_budget))?;
        writeln!(out, "Remaining budget: {}", fmt_rp(s.remaining_budget))?;
        writeln!(out, "Days recorded:    {}", s.records)?;
    }
    Ok(())
}

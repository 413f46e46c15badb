// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::session::Session;
use crate::utils::{arg, fmt_rp, fmt_rp_u};
use anyhow::{Result, bail};
use std::io::Write;
use tracing::{info, warn};

pub const NOTHING_TO_LOG: &str = "Nothing to log: enter an income or an expense.";

pub fn handle(
    session: &mut Session,
    name: &str,
    sub: &clap::ArgMatches,
    out: &mut dyn Write,
) -> Result<()> {
    match name {
        "income" => income(session, sub, out),
        "expense" => expense(session, sub, out),
        "log" => log(session, sub, out),
        _ => bail!("Unknown command '{}'", name),
    }
}

fn income(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let amount: u64 = arg(sub, "amount")?;
    let current = session.ledger_mut().log_income(amount)?;
    session.commit()?;
    info!(amount, current, "income recorded");
    writeln!(out, "Income {} recorded.", fmt_rp_u(amount))?;
    writeln!(out, "Current budget: {}", fmt_rp(current))?;
    Ok(())
}

fn expense(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let amount: u64 = arg(sub, "amount")?;
    let stamped: u64 = arg(sub, "income")?;
    let day = session.ledger_mut().log_expense(amount, stamped)?.day;
    session.commit()?;
    let remaining = session.ledger().remaining_budget();
    info!(day, amount, remaining, "expense recorded");
    writeln!(out, "Expense {} recorded for day {}.", fmt_rp_u(amount), day)?;
    writeln!(out, "Remaining budget today: {}", fmt_rp(remaining))?;
    Ok(())
}

fn log(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let income: u64 = arg(sub, "income")?;
    let expense: u64 = arg(sub, "expense")?;
    let note = sub.get_one::<String>("note").cloned();
    let day = match session.ledger_mut().log_transaction(income, expense, note) {
        Ok(r) => r.day,
        Err(LedgerError::NothingToLog) => {
            warn!("log called with zero income and expense");
            writeln!(out, "{}", NOTHING_TO_LOG)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    session.commit()?;
    let current = session.ledger().current_budget();
    info!(day, income, expense, current, "transaction recorded");
    writeln!(out, "Day {} recorded.", day)?;
    writeln!(out, "Current budget: {}", fmt_rp(current))?;
    Ok(())
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::ledger::RecordEdit;
use crate::session::Session;
use crate::utils::arg;
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// Fields not given on the command line keep their stored value.
pub fn handle(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let day: u32 = arg(sub, "day")?;
    let current = session
        .ledger()
        .record(day)
        .cloned()
        .ok_or(LedgerError::UnknownDay(day))?;

    let daily_budget = match sub.get_one::<u64>("budget") {
        Some(&b) => i64::try_from(b).map_err(|_| LedgerError::Overflow)?,
        None => current.daily_budget,
    };
    let edit = RecordEdit {
        daily_budget,
        expense: sub.get_one::<u64>("expense").copied().unwrap_or(current.expense),
        income: sub.get_one::<u64>("income").copied().unwrap_or(current.income),
        note: sub.get_one::<String>("note").cloned().or(current.note),
    };
    session.ledger_mut().edit_record(day, edit)?;
    session.commit()?;
    info!(day, "record updated");
    writeln!(out, "Day {} updated.", day)?;
    Ok(())
}

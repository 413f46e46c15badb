// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use std::io::Write;

use crate::session::Session;

pub mod budgets;
pub mod edit;
pub mod exporter;
pub mod reports;
pub mod shell;
pub mod transactions;

/// Run one parsed subcommand against the session, writing user-facing output to `out`.
pub fn dispatch(
    session: &mut Session,
    name: &str,
    sub: &clap::ArgMatches,
    out: &mut dyn Write,
) -> Result<()> {
    match name {
        "budget" => budgets::set(session, sub, out)?,
        "status" => budgets::status(session, sub, out)?,
        "income" | "expense" | "log" => transactions::handle(session, name, sub, out)?,
        "edit" => edit::handle(session, sub, out)?,
        "table" => reports::table(session.ledger(), sub, out)?,
        "chart" => reports::chart(session.ledger(), sub, out)?,
        "export" => exporter::handle(session.ledger(), sub, out)?,
        "path" => writeln!(out, "{}", session.location())?,
        _ => bail!("Unknown command '{}'", name),
    }
    Ok(())
}

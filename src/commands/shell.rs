// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::build_shell_cli;
use crate::session::Session;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

const PROMPT: &str = "dailyledger> ";

/// Line-edited session on a terminal, plain line reading otherwise.
pub fn start(session: &mut Session) -> Result<()> {
    if io::stdin().is_terminal() {
        run_interactive(session)
    } else {
        let stdin = io::stdin();
        run(session, stdin.lock(), &mut io::stdout())
    }
}

fn run_interactive(session: &mut Session) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "Ledger: {}. Type `help` for commands, `quit` to leave.",
        session.location()
    )?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if !run_line(session, trimmed, &mut stdout)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(stdout, "Interrupted; type `quit` to leave.")?;
            }
            Err(ReadlineError::Eof) => {
                writeln!(stdout, "Exiting shell.")?;
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Read commands line by line until `quit` or end of input. A failing command
/// is reported and the session carries on.
pub fn run<R: BufRead>(session: &mut Session, input: R, out: &mut dyn Write) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if !run_line(session, line.trim(), out)? {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

/// Returns `false` once the user asked to leave.
fn run_line(session: &mut Session, line: &str, out: &mut dyn Write) -> Result<bool> {
    if line.is_empty() {
        return Ok(true);
    }
    let words = match shell_words::split(line) {
        Ok(w) => w,
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(true);
        }
    };
    let matches = match build_shell_cli().try_get_matches_from(words) {
        Ok(m) => m,
        Err(e) => {
            write!(out, "{}", e.render())?;
            return Ok(true);
        }
    };
    match matches.subcommand() {
        Some(("quit", _)) => return Ok(false),
        Some((name, sub)) => {
            debug!(command = name, "shell command");
            if let Err(e) = super::dispatch(session, name, sub, out) {
                writeln!(out, "Error: {:#}", e)?;
            }
        }
        None => {}
    }
    Ok(true)
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::io;
use std::path::PathBuf;

use dailyledger::store::{CsvStore, LedgerStore, MemoryStore};
use dailyledger::{cli, commands, session::Session, utils};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    utils::init_tracing(matches.get_flag("verbose"));

    let store: Box<dyn LedgerStore> = if matches.get_flag("memory") {
        Box::new(MemoryStore::new())
    } else {
        let dir = matches.get_one::<PathBuf>("data-dir");
        Box::new(CsvStore::open(dir.map(PathBuf::as_path))?)
    };
    let mut session = Session::open(store)?;

    match matches.subcommand() {
        Some(("shell", _)) => commands::shell::start(&mut session)?,
        Some((name, sub)) => commands::dispatch(&mut session, name, sub, &mut io::stdout())?,
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

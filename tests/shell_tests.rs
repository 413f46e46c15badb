// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use dailyledger::commands::shell;
use dailyledger::session::Session;
use dailyledger::store::MemoryStore;
use std::io::Cursor;

#[test]
fn shell_runs_until_quit() {
    let mut s = Session::open(Box::new(MemoryStore::new())).unwrap();
    let script = "budget 60000\n\
                  log --expense 15000 --note \"makan siang\"\n\
                  bogus\n\
                  edit --day 9 --expense 1\n\
                  \n\
                  quit\n\
                  log --expense 1\n";
    let mut out = Vec::new();
    shell::run(&mut s, Cursor::new(script), &mut out).unwrap();

    assert_eq!(s.ledger().len(), 1);
    assert_eq!(s.ledger().current_budget(), 45_000);
    assert_eq!(
        s.ledger().record(1).unwrap().note.as_deref(),
        Some("makan siang")
    );

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Daily budget set to Rp60,000"));
    assert!(text.contains("Day 1 recorded."));
    assert!(text.contains("bogus"));
    assert!(text.contains("Error: Day 9 not found"));
}

#[test]
fn shell_reports_unbalanced_quotes() {
    let mut s = Session::open(Box::new(MemoryStore::new())).unwrap();
    let mut out = Vec::new();
    shell::run(&mut s, Cursor::new("log --note \"oops\n"), &mut out).unwrap();
    assert!(s.ledger().is_empty());
    assert!(String::from_utf8(out).unwrap().contains("Error:"));
}

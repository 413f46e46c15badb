// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;
use dailyledger::commands::{self, budgets, transactions};
use dailyledger::session::Session;
use dailyledger::store::{CsvStore, MemoryStore};
use dailyledger::{cli, store::LedgerStore};
use tempfile::tempdir;

fn run(session: &mut Session, args: &[&str]) -> Result<String> {
    let mut argv = vec!["dailyledger"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let mut out = Vec::new();
    match matches.subcommand() {
        Some((name, sub)) => commands::dispatch(session, name, sub, &mut out)?,
        None => panic!("no subcommand parsed"),
    }
    Ok(String::from_utf8(out).unwrap())
}

fn memory_session() -> Session {
    Session::open(Box::new(MemoryStore::new())).unwrap()
}

#[test]
fn worked_example_persists_across_sessions() {
    let dir = tempdir().unwrap();
    {
        let mut s = Session::open(Box::new(CsvStore::new(dir.path()))).unwrap();
        run(&mut s, &["budget", "60000"]).unwrap();
        run(&mut s, &["log", "--expense", "15000"]).unwrap();
        run(&mut s, &["log", "--income", "10000", "--expense", "5000"]).unwrap();
    }

    let mut s = Session::open(Box::new(CsvStore::new(dir.path()))).unwrap();
    assert_eq!(s.ledger().current_budget(), 50_000);
    assert_eq!(s.ledger().len(), 2);

    run(
        &mut s,
        &["edit", "--day", "1", "--budget", "40000", "--expense", "20000", "--income", "0"],
    )
    .unwrap();

    let reloaded = CsvStore::new(dir.path()).load().unwrap();
    let r1 = reloaded.record(1).unwrap();
    assert_eq!((r1.daily_budget, r1.expense, r1.income), (40_000, 20_000, 0));
    assert_eq!(reloaded.current_budget(), 50_000);
    assert_eq!(reloaded.record(2).unwrap().daily_budget, 50_000);
}

#[test]
fn budget_outside_options_is_rejected() {
    let mut s = memory_session();
    let err = run(&mut s, &["budget", "12345"]).unwrap_err();
    assert!(err.to_string().contains("Invalid daily budget"));
    assert_eq!(s.ledger().current_budget(), 0);
}

#[test]
fn zero_log_is_a_warning_not_an_error() {
    let mut s = memory_session();
    run(&mut s, &["budget", "50000"]).unwrap();
    let shown = run(&mut s, &["log"]).unwrap();
    assert_eq!(shown.trim_end(), transactions::NOTHING_TO_LOG);
    let shown = run(&mut s, &["log", "--income", "0", "--expense", "0", "--note", "x"]).unwrap();
    assert!(shown.contains("Nothing to log"));
    assert!(s.ledger().is_empty());
    assert_eq!(s.ledger().current_budget(), 50_000);
}

#[test]
fn edit_keeps_omitted_fields() {
    let mut s = memory_session();
    run(&mut s, &["budget", "60000"]).unwrap();
    run(&mut s, &["log", "--expense", "15000", "--note", "nasi goreng"]).unwrap();
    run(&mut s, &["edit", "--day", "1", "--expense", "20000"]).unwrap();

    let r = s.ledger().record(1).unwrap();
    assert_eq!(r.daily_budget, 45_000);
    assert_eq!(r.expense, 20_000);
    assert_eq!(r.income, 0);
    assert_eq!(r.note.as_deref(), Some("nasi goreng"));

    run(&mut s, &["edit", "--day", "1", "--note", ""]).unwrap();
    assert_eq!(s.ledger().record(1).unwrap().note, None);
}

#[test]
fn edit_unknown_day_errors() {
    let mut s = memory_session();
    let err = run(&mut s, &["edit", "--day", "3", "--expense", "1"]).unwrap_err();
    assert!(err.to_string().contains("Day 3 not found"));
}

#[test]
fn split_flow_stamps_income_without_reapplying() {
    let mut s = memory_session();
    run(&mut s, &["budget", "50000"]).unwrap();
    let shown = run(&mut s, &["income", "10000"]).unwrap();
    assert!(shown.contains("Current budget: Rp60,000"));
    assert_eq!(s.ledger().current_budget(), 60_000);
    assert!(s.ledger().is_empty());

    run(&mut s, &["expense", "15000", "--income", "10000"]).unwrap();
    let r = s.ledger().record(1).unwrap();
    assert_eq!((r.daily_budget, r.expense, r.income), (45_000, 15_000, 10_000));
    assert_eq!(s.ledger().remaining_budget(), 45_000);

    run(&mut s, &["budget", "55000"]).unwrap();
    assert_eq!(s.ledger().current_budget(), 100_000);
    assert_eq!(s.ledger().remaining_budget(), 0);
}

#[test]
fn status_reflects_ledger() {
    let mut s = memory_session();
    run(&mut s, &["budget", "70000"]).unwrap();
    run(&mut s, &["log", "--expense", "1000"]).unwrap();
    let st = budgets::current_status(&s);
    assert_eq!(st.current_budget, 69_000);
    assert_eq!(st.remaining_budget, 69_000);
    assert_eq!(st.records, 1);
    assert_eq!(st.location, "(in-memory)");

    let json: serde_json::Value =
        serde_json::from_str(&run(&mut s, &["status", "--json"]).unwrap()).unwrap();
    assert_eq!(json["current_budget"], 69_000);
    assert_eq!(json["records"], 1);

    let lines = run(&mut s, &["table", "--jsonl"]).unwrap();
    assert_eq!(lines.lines().count(), 1);
    assert!(lines.contains("\"expense\":1000"));

    let shown = run(&mut s, &["path"]).unwrap();
    assert_eq!(shown.trim_end(), "(in-memory)");
}

#[test]
fn chart_writes_svg_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("daily.svg");
    let out_str = out.to_string_lossy().to_string();

    let mut s = memory_session();
    let shown = run(&mut s, &["chart", "--out", &out_str]).unwrap();
    assert!(shown.contains("No transactions to chart yet."));
    assert!(!out.exists());

    run(&mut s, &["budget", "60000"]).unwrap();
    run(&mut s, &["log", "--income", "5000", "--expense", "15000"]).unwrap();
    let shown = run(&mut s, &["chart", "--out", &out_str, "--income-bars"]).unwrap();
    assert!(shown.contains("Chart written to"));
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn unknown_command_names_are_errors() {
    let mut s = memory_session();
    let mut out = Vec::new();
    let err = commands::dispatch(&mut s, "bogus", &ArgMatches::default(), &mut out).unwrap_err();
    assert!(err.to_string().contains("Unknown command 'bogus'"));
    let err = transactions::handle(&mut s, "refund", &ArgMatches::default(), &mut out).unwrap_err();
    assert!(err.to_string().contains("Unknown command 'refund'"));
    assert!(out.is_empty());
}

#[test]
fn global_flags_parse() {
    let m = cli::build_cli().get_matches_from(["dailyledger", "--memory", "-v", "status"]);
    assert!(m.get_flag("memory"));
    assert!(m.get_flag("verbose"));

    let m = cli::build_cli().get_matches_from([
        "dailyledger",
        "--data-dir",
        "/tmp/ledger-here",
        "table",
    ]);
    assert_eq!(
        m.get_one::<std::path::PathBuf>("data-dir").unwrap(),
        &std::path::PathBuf::from("/tmp/ledger-here")
    );
}

#[test]
fn negative_amounts_are_refused_by_the_parser() {
    let res = cli::build_cli().try_get_matches_from(["dailyledger", "log", "--expense", "-5"]);
    assert!(res.is_err());
}

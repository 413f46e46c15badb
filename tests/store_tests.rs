// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use dailyledger::ledger::Ledger;
use dailyledger::store::{CsvStore, LedgerStore, MemoryStore};
use std::fs;
use tempfile::tempdir;

fn sample() -> Ledger {
    let mut l = Ledger::new();
    l.set_initial_budget(60_000).unwrap();
    l.log_transaction(0, 15_000, Some("makan, \"warung\" padang".into()))
        .unwrap();
    l.log_transaction(10_000, 5_000, None).unwrap();
    l.log_expense(80_000, 0).unwrap();
    l
}

#[test]
fn missing_files_load_as_empty() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path());
    let l = store.load().unwrap();
    assert!(l.is_empty());
    assert_eq!(l.current_budget(), 0);
    assert_eq!(l.remaining_budget(), 0);
}

#[test]
fn csv_round_trip_preserves_records_and_figures() {
    let dir = tempdir().unwrap();
    let original = sample();
    let mut store = CsvStore::new(dir.path());
    store.save(&original).unwrap();

    let reloaded = CsvStore::new(dir.path()).load().unwrap();
    assert_eq!(reloaded.records(), original.records());
    assert_eq!(reloaded.current_budget(), -30_000);
    assert_eq!(reloaded.remaining_budget(), original.remaining_budget());

    let text = fs::read_to_string(store.ledger_path()).unwrap();
    assert_eq!(
        text.lines().next().unwrap(),
        "Hari,Budget Harian,Pengeluaran,Pemasukan,Catatan"
    );
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn empty_ledger_still_writes_header() {
    let dir = tempdir().unwrap();
    let mut store = CsvStore::new(dir.path());
    store.save(&Ledger::new()).unwrap();
    let text = fs::read_to_string(store.ledger_path()).unwrap();
    assert_eq!(text.trim_end(), "Hari,Budget Harian,Pengeluaran,Pemasukan,Catatan");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn table_without_note_column_loads() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path());
    fs::write(
        store.ledger_path(),
        "Hari,Budget Harian,Pengeluaran,Pemasukan\n1,60000,15000,0\n2,45000,0,5000\n",
    )
    .unwrap();
    let l = store.load().unwrap();
    assert_eq!(l.len(), 2);
    assert_eq!(l.record(2).unwrap().income, 5_000);
    assert!(l.records().iter().all(|r| r.note.is_none()));
}

#[test]
fn gap_in_days_is_rejected() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path());
    fs::write(
        store.ledger_path(),
        "Hari,Budget Harian,Pengeluaran,Pemasukan,Catatan\n1,100,0,0,\n3,50,50,0,\n",
    )
    .unwrap();
    let err = store.load().unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Invalid ledger table"));
    assert!(msg.contains("expected 2, found 3"));
}

#[test]
fn malformed_row_reports_path() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path());
    fs::write(
        store.ledger_path(),
        "Hari,Budget Harian,Pengeluaran,Pemasukan,Catatan\n1,abc,0,0,\n",
    )
    .unwrap();
    let msg = format!("{:#}", store.load().unwrap_err());
    assert!(msg.contains("bad row 1"));
}

#[test]
fn memory_store_discards_saves() {
    let mut store = MemoryStore::new();
    assert!(store.load().unwrap().is_empty());
    store.save(&sample()).unwrap();
    assert!(store.load().unwrap().is_empty());
    assert_eq!(store.describe(), "(in-memory)");
}

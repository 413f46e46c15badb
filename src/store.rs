// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use csv::{ReaderBuilder, WriterBuilder};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::ledger::Ledger;
use crate::models::{SessionState, TransactionRecord};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Dailyledger", "dailyledger"));

pub const LEDGER_FILE: &str = "ledger.csv";
pub const SESSION_FILE: &str = "session.json";
pub const CSV_HEADER: [&str; 5] = ["Hari", "Budget Harian", "Pengeluaran", "Pemasukan", "Catatan"];

/// Where a session's ledger lives between mutations.
pub trait LedgerStore {
    fn load(&self) -> Result<Ledger>;
    fn save(&mut self, ledger: &Ledger) -> Result<()>;
    fn describe(&self) -> String;
}

/// Resolve (and create) the data directory, honouring an explicit override.
pub fn data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => {
            let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
                .context("Could not determine platform-specific data dir")?;
            proj.data_dir().to_path_buf()
        }
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
    Ok(dir)
}

/// Whole-table CSV persistence plus a small JSON file for the running figures.
#[derive(Debug, Clone)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn open(override_dir: Option<&Path>) -> Result<Self> {
        Ok(Self::new(data_dir(override_dir)?))
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.join(LEDGER_FILE)
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }
}

impl LedgerStore for CsvStore {
    fn load(&self) -> Result<Ledger> {
        let records = read_records(&self.ledger_path())?;
        let state = read_session(&self.session_path())?.unwrap_or_default();
        let ledger = Ledger::from_parts(state.current_budget, state.remaining_budget, records)
            .with_context(|| format!("Invalid ledger table {}", self.ledger_path().display()))?;
        info!(records = ledger.len(), path = %self.ledger_path().display(), "ledger loaded");
        Ok(ledger)
    }

    fn save(&mut self, ledger: &Ledger) -> Result<()> {
        write_records(&self.ledger_path(), ledger.records())?;
        let state = SessionState {
            current_budget: ledger.current_budget(),
            remaining_budget: ledger.remaining_budget(),
            updated_at: Utc::now(),
        };
        let path = self.session_path();
        fs::write(&path, serde_json::to_string_pretty(&state)?)
            .with_context(|| format!("Write {}", path.display()))?;
        debug!(records = ledger.len(), "ledger saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.ledger_path().display().to_string()
    }
}

/// Session-scoped store: starts empty and never writes anything out.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore;

impl MemoryStore {
    pub fn new() -> Self {
        Self
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Ledger> {
        Ok(Ledger::new())
    }

    fn save(&mut self, _ledger: &Ledger) -> Result<()> {
        Ok(())
    }

    fn describe(&self) -> String {
        "(in-memory)".to_string()
    }
}

/// Read a record table. A missing file is an empty table.
pub fn read_records(path: &Path) -> Result<Vec<TransactionRecord>> {
    let mut rdr = match ReaderBuilder::new().has_headers(true).from_path(path) {
        Ok(r) => r,
        Err(e) if is_not_found(&e) => {
            debug!(path = %path.display(), "no ledger table yet");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e).with_context(|| format!("Open CSV {}", path.display())),
    };
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<TransactionRecord>().enumerate() {
        let r = row.with_context(|| format!("{}: bad row {}", path.display(), i + 1))?;
        out.push(r);
    }
    Ok(out)
}

/// Overwrite `path` with the full table, header row first.
pub fn write_records(path: &Path, records: &[TransactionRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Create CSV {}", path.display()))?;
    wtr.write_record(CSV_HEADER)?;
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_session(path: &Path) -> Result<Option<SessionState>> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("Read {}", path.display())),
    };
    let state = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid session file {}", path.display()))?;
    Ok(Some(state))
}

fn is_not_found(e: &csv::Error) -> bool {
    matches!(e.kind(), csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound)
}

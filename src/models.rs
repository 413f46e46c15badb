// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged day. Field names on disk follow the original Indonesian table header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Hari")]
    pub day: u32,
    #[serde(rename = "Budget Harian")]
    pub daily_budget: i64,
    #[serde(rename = "Pengeluaran")]
    pub expense: u64,
    #[serde(rename = "Pemasukan")]
    pub income: u64,
    #[serde(rename = "Catatan", default)]
    pub note: Option<String>,
}

/// Running figures persisted beside the record table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_budget: i64,
    pub remaining_budget: i64,
    pub updated_at: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_budget: 0,
            remaining_budget: 0,
            updated_at: Utc::now(),
        }
    }
}

/// Serialisation shape for `--json` output and JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct RecordRow {
    pub day: u32,
    pub daily_budget: i64,
    pub expense: u64,
    pub income: u64,
    pub note: Option<String>,
}

impl From<&TransactionRecord> for RecordRow {
    fn from(r: &TransactionRecord) -> Self {
        Self {
            day: r.day,
            daily_budget: r.daily_budget,
            expense: r.expense,
            income: r.income,
            note: r.note.clone(),
        }
    }
}

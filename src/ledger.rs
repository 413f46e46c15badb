// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The budget ledger: running budget figures plus an append/overwrite log of
//! daily records.
//!
//! Every mutation either succeeds completely or leaves the ledger untouched.
//! Records are kept in insertion order and `day` is always `1..=len`.

use std::collections::HashMap;

use tracing::debug;

use crate::error::LedgerError;
use crate::models::TransactionRecord;

/// Daily budget values accepted by the budget selector.
pub const BUDGET_OPTIONS: [u64; 5] = [50_000, 55_000, 60_000, 65_000, 70_000];

/// Replacement values for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEdit {
    pub daily_budget: i64,
    pub expense: u64,
    pub income: u64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    current_budget: i64,
    remaining_budget: i64,
    records: Vec<TransactionRecord>,
    index: HashMap<u32, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from stored figures and records. Records must be
    /// numbered `1..=N` in order.
    pub fn from_parts(
        current_budget: i64,
        remaining_budget: i64,
        records: Vec<TransactionRecord>,
    ) -> Result<Self, LedgerError> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, r) in records.iter().enumerate() {
            let expected = day_for_position(pos)?;
            if r.day != expected {
                return Err(LedgerError::DaySequence {
                    expected,
                    found: r.day,
                });
            }
            index.insert(r.day, pos);
        }
        Ok(Self {
            current_budget,
            remaining_budget,
            records,
            index,
        })
    }

    pub fn current_budget(&self) -> i64 {
        self.current_budget
    }

    pub fn remaining_budget(&self) -> i64 {
        self.remaining_budget
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn record(&self, day: u32) -> Option<&TransactionRecord> {
        self.index.get(&day).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Start a new day: the leftover from the last expense rolls into the new
    /// allotment and the carry-over is consumed.
    pub fn set_initial_budget(&mut self, daily_budget: u64) -> Result<i64, LedgerError> {
        let next = to_signed(daily_budget)?
            .checked_add(self.remaining_budget)
            .ok_or(LedgerError::Overflow)?;
        self.current_budget = next;
        self.remaining_budget = 0;
        debug!(daily_budget, current = next, "initial budget set");
        Ok(next)
    }

    /// Add income to the running budget without writing a record.
    pub fn log_income(&mut self, amount: u64) -> Result<i64, LedgerError> {
        let next = self
            .current_budget
            .checked_add(to_signed(amount)?)
            .ok_or(LedgerError::Overflow)?;
        self.current_budget = next;
        debug!(amount, current = next, "income logged");
        Ok(next)
    }

    /// Record an expense. `stamped_income` is copied into the record as-is and
    /// is not applied to the running budget; income reaches the budget only
    /// through [`Ledger::log_income`].
    pub fn log_expense(
        &mut self,
        expense: u64,
        stamped_income: u64,
    ) -> Result<&TransactionRecord, LedgerError> {
        let next = self
            .current_budget
            .checked_sub(to_signed(expense)?)
            .ok_or(LedgerError::Overflow)?;
        let record = self.next_record(next, expense, stamped_income, None)?;
        self.current_budget = next;
        self.remaining_budget = next;
        debug!(expense, current = next, "expense logged");
        Ok(self.push(record))
    }

    /// Apply income and expense together and record the resulting budget.
    pub fn log_transaction(
        &mut self,
        income: u64,
        expense: u64,
        note: Option<String>,
    ) -> Result<&TransactionRecord, LedgerError> {
        if income == 0 && expense == 0 {
            return Err(LedgerError::NothingToLog);
        }
        let delta = i64::try_from(i128::from(income) - i128::from(expense))
            .map_err(|_| LedgerError::Overflow)?;
        let next = self
            .current_budget
            .checked_add(delta)
            .ok_or(LedgerError::Overflow)?;
        let record = self.next_record(next, expense, income, note)?;
        self.current_budget = next;
        self.remaining_budget = next;
        debug!(income, expense, current = next, "transaction logged");
        Ok(self.push(record))
    }

    /// Overwrite one record in place. Running figures and other records are
    /// left as they are.
    pub fn edit_record(
        &mut self,
        day: u32,
        edit: RecordEdit,
    ) -> Result<&TransactionRecord, LedgerError> {
        let pos = *self.index.get(&day).ok_or(LedgerError::UnknownDay(day))?;
        let record = &mut self.records[pos];
        record.daily_budget = edit.daily_budget;
        record.expense = edit.expense;
        record.income = edit.income;
        record.note = normalize_note(edit.note);
        debug!(day, "record edited");
        Ok(&*record)
    }

    fn next_record(
        &self,
        daily_budget: i64,
        expense: u64,
        income: u64,
        note: Option<String>,
    ) -> Result<TransactionRecord, LedgerError> {
        Ok(TransactionRecord {
            day: day_for_position(self.records.len())?,
            daily_budget,
            expense,
            income,
            note: normalize_note(note),
        })
    }

    fn push(&mut self, record: TransactionRecord) -> &TransactionRecord {
        let pos = self.records.len();
        self.index.insert(record.day, pos);
        self.records.push(record);
        &self.records[pos]
    }
}

fn day_for_position(pos: usize) -> Result<u32, LedgerError> {
    u32::try_from(pos + 1).map_err(|_| LedgerError::Overflow)
}

fn to_signed(amount: u64) -> Result<i64, LedgerError> {
    i64::try_from(amount).map_err(|_| LedgerError::Overflow)
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

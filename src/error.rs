// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures raised by ledger operations and by hydrating a ledger from storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Nothing to log: income and expense are both zero")]
    NothingToLog,
    #[error("Day {0} not found")]
    UnknownDay(u32),
    #[error("Day out of sequence: expected {expected}, found {found}")]
    DaySequence { expected: u32, found: u32 },
    #[error("Amount overflows the running budget")]
    Overflow,
}

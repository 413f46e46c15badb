// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::store::LedgerStore;

/// One interactive session: the ledger being worked on and the store it is
/// committed to after each mutation.
pub struct Session {
    ledger: Ledger,
    store: Box<dyn LedgerStore>,
}

impl Session {
    /// Hydrate a session from `store`.
    pub fn open(store: Box<dyn LedgerStore>) -> Result<Self> {
        let ledger = store.load()?;
        Ok(Self { ledger, store })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Write the whole ledger back to the store.
    pub fn commit(&mut self) -> Result<()> {
        self.store.save(&self.ledger)
    }

    pub fn location(&self) -> String {
        self.store.describe()
    }
}

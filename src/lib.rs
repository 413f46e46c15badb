// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod chart;
pub mod cli;
pub mod commands;
pub mod error;
pub mod ledger;
pub mod models;
pub mod session;
pub mod store;
pub mod utils;

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn amount_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_parser(value_parser!(u64))
        .default_value("0")
        .help(help)
}

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

/// Subcommands available both on the command line and inside `shell`.
fn ledger_commands() -> Vec<Command> {
    vec![
        Command::new("budget")
            .about("Set today's budget; yesterday's remainder is added on top")
            .arg(
                Arg::new("amount")
                    .required(true)
                    .value_parser(value_parser!(u64))
                    .help("One of 50000, 55000, 60000, 65000, 70000"),
            ),
        Command::new("income")
            .about("Add income to the running budget without writing a record")
            .arg(
                Arg::new("amount")
                    .required(true)
                    .value_parser(value_parser!(u64)),
            ),
        Command::new("expense")
            .about("Record an expense for the next day")
            .arg(
                Arg::new("amount")
                    .required(true)
                    .value_parser(value_parser!(u64)),
            )
            .arg(amount_arg(
                "income",
                "Income figure stamped into the record (not added to the budget)",
            )),
        Command::new("log")
            .about("Record income and expense together for the next day")
            .arg(amount_arg("income", "Income amount"))
            .arg(amount_arg("expense", "Expense amount"))
            .arg(Arg::new("note").long("note").help("Free-form note")),
        Command::new("edit")
            .about("Correct a past record; running budget is not recomputed")
            .arg(
                Arg::new("day")
                    .long("day")
                    .required(true)
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                Arg::new("budget")
                    .long("budget")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("expense")
                    .long("expense")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("income")
                    .long("income")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("note")
                    .long("note")
                    .help("Replacement note; pass an empty string to clear"),
            ),
        json_args(Command::new("table").about("Show all records")),
        Command::new("chart")
            .about("Draw budget, expense and income per day as an SVG file")
            .arg(
                Arg::new("out")
                    .long("out")
                    .value_parser(value_parser!(PathBuf))
                    .default_value("chart.svg"),
            )
            .arg(
                Arg::new("width")
                    .long("width")
                    .value_parser(value_parser!(u32).range(200..))
                    .default_value("1000"),
            )
            .arg(
                Arg::new("height")
                    .long("height")
                    .value_parser(value_parser!(u32).range(150..))
                    .default_value("500"),
            )
            .arg(
                Arg::new("income-bars")
                    .long("income-bars")
                    .action(ArgAction::SetTrue)
                    .help("Draw income as bars instead of a line"),
            ),
        Command::new("status")
            .about("Show current and remaining budget")
            .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        Command::new("export")
            .about("Write the record table to a file")
            .arg(
                Arg::new("format")
                    .long("format")
                    .required(true)
                    .help("csv|json"),
            )
            .arg(Arg::new("out").long("out").required(true)),
        Command::new("path").about("Print the ledger file location"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("dailyledger")
        .version(clap::crate_version!())
        .about("Daily budget, expense and income tracker")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .env("DAILYLEDGER_DIR")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding ledger.csv and session.json"),
        )
        .arg(
            Arg::new("memory")
                .long("memory")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Keep the ledger in memory only (useful with `shell`)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(ledger_commands())
        .subcommand(Command::new("shell").about("Run commands interactively in one session"))
}

/// Command tree used to parse lines typed inside `shell`.
pub fn build_shell_cli() -> Command {
    Command::new("dailyledger")
        .no_binary_name(true)
        .disable_version_flag(true)
        .subcommand_required(true)
        .subcommands(ledger_commands())
        .subcommand(Command::new("quit").alias("exit").about("Leave the shell"))
}

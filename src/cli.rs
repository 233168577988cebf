// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON Lines instead of a table"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tillbook")
        .about("Daily sales and expenditure ledger for a small retail business")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the local store and print its path"))
        .subcommand(
            Command::new("session")
                .about("Manage the active user session")
                .subcommand(
                    Command::new("login")
                        .about("Store the active user")
                        .arg(
                            Arg::new("username")
                                .long("username")
                                .required(true)
                                .help("User name"),
                        )
                        .arg(
                            Arg::new("role")
                                .long("role")
                                .default_value("staff")
                                .help("Role; 'admin' unlocks edit and delete"),
                        ),
                )
                .subcommand(Command::new("logout").about("Clear the active user"))
                .subcommand(Command::new("whoami").about("Show the active user and role")),
        )
        .subcommand(
            Command::new("record")
                .about("Add, list, edit, and delete daily records")
                .subcommand(
                    Command::new("add")
                        .about("Record one day's sales and expenditure")
                        .arg(
                            Arg::new("sales")
                                .long("sales")
                                .required(true)
                                .help("Sales amount, must be positive"),
                        )
                        .arg(
                            Arg::new("expenditure")
                                .long("expenditure")
                                .help("Expenditure amount, defaults to 0"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Entry date YYYY-MM-DD, defaults to today"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List records in ledger order")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM")),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Replace a record's amounts (admin only)")
                        .arg(Arg::new("id").long("id").required(true).help("Record id"))
                        .arg(
                            Arg::new("sales")
                                .long("sales")
                                .required(true)
                                .help("New sales amount"),
                        )
                        .arg(
                            Arg::new("expenditure")
                                .long("expenditure")
                                .help("New expenditure amount, defaults to 0"),
                        ),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a record (admin only)")
                        .arg(Arg::new("id").long("id").required(true).help("Record id")),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboard KPIs, weekly and monthly aggregates")
                .subcommand(json_flags(
                    Command::new("kpis")
                        .about("Total sales, expense and profit for one month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .required(true)
                                .help("Month YYYY-MM"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("weekly").about("Sales and expenditure per ISO week"),
                ))
                .subcommand(Command::new("months").about("Distinct months in encounter order"))
                .subcommand(json_flags(
                    Command::new("chart").about("Chart dataset: month labels with sales/profit"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export the ledger to a file")
                .subcommand(
                    Command::new("records")
                        .about("Export all records")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv|text|json"),
                        )
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .required(true)
                                .help("Output file path"),
                        ),
                ),
        )
        .subcommand(Command::new("doctor").about("Audit the stored ledger for inconsistencies"))
}

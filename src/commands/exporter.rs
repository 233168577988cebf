// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use anyhow::{Result, bail};
use rusqlite::Connection;
use std::fmt::Write as _;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("records", sub)) => export_records(conn, sub),
        _ => Ok(()),
    }
}

fn export_records(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let records = store::load_records(conn)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["Date", "Sales", "Expenditure", "Profit"])?;
            for r in &records {
                wtr.write_record([
                    r.date.to_string(),
                    r.sales.to_string(),
                    r.expenditure.to_string(),
                    r.profit.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "text" => {
            let mut doc = String::from("Tillbook Daily Records\n");
            for r in &records {
                writeln!(
                    doc,
                    "{} | Sales: {} | Expenditure: {} | Profit: {}",
                    r.date, r.sales, r.expenditure, r.profit
                )?;
            }
            std::fs::write(out, doc)?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&records)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|text|json)", fmt);
        }
    }
    println!("Exported {} records to {}", records.len(), out);
    Ok(())
}

// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::Record;
use crate::store;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table, today};
use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("delete", sub)) => delete(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let sales = parse_decimal(sub.get_one::<String>("sales").unwrap())?;
    let expenditure = match sub.get_one::<String>("expenditure") {
        Some(s) => parse_decimal(s)?,
        None => Decimal::ZERO,
    };
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };

    let mut ledger = Ledger::from_records(store::load_records(conn)?);
    let record = ledger.append(date, sales, expenditure)?;
    store::save_records(conn, ledger.records())?;

    println!(
        "Recorded {} on {}: sales {}, expenditure {}, profit {}",
        record.id, record.date, record.sales, record.expenditure, record.profit
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.to_string(),
                    r.sales.to_string(),
                    r.expenditure.to_string(),
                    r.profit.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Sales", "Expenditure", "Profit"], rows)
        );
    }
    Ok(())
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Record>> {
    let records = store::load_records(conn)?;
    Ok(match sub.get_one::<String>("month") {
        Some(month) => records.into_iter().filter(|r| &r.month == month).collect(),
        None => records,
    })
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    require_admin(conn)?;
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    let sales = parse_decimal(sub.get_one::<String>("sales").unwrap())?;
    let expenditure = match sub.get_one::<String>("expenditure") {
        Some(s) => parse_decimal(s)?,
        None => Decimal::ZERO,
    };

    let mut ledger = Ledger::from_records(store::load_records(conn)?);
    let record = ledger.update_amounts(id, sales, expenditure)?;
    store::save_records(conn, ledger.records())?;

    println!(
        "Updated {}: sales {}, expenditure {}, profit {}",
        record.id, record.sales, record.expenditure, record.profit
    );
    Ok(())
}

fn delete(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    require_admin(conn)?;
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;

    let mut ledger = Ledger::from_records(store::load_records(conn)?);
    let record = ledger.remove(id)?;
    store::save_records(conn, ledger.records())?;

    println!("Deleted record {} ({})", record.id, record.date);
    Ok(())
}

fn parse_id(s: &str) -> Result<Uuid> {
    s.parse::<Uuid>()
        .with_context(|| format!("Invalid record id '{}'", s))
}

// Presentation-layer gate only; the ledger itself carries no roles.
fn require_admin(conn: &Connection) -> Result<()> {
    match store::load_session(conn)? {
        Some(s) if s.is_admin() => Ok(()),
        Some(s) => bail!("Role '{}' may not modify records; log in as admin", s.role),
        None => bail!("Not logged in; log in as admin to modify records"),
    }
}

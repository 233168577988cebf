// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::{ChartData, MonthSummary, WeekBucket};
use crate::store;
use crate::utils::{maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("kpis", sub)) => kpis(conn, sub)?,
        Some(("weekly", sub)) => weekly(conn, sub)?,
        Some(("months", _)) => months(conn)?,
        Some(("chart", sub)) => chart(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn month_kpis(conn: &Connection, month: &str) -> Result<MonthSummary> {
    let ledger = Ledger::from_records(store::load_records(conn)?);
    Ok(ledger.month_summary(month))
}

pub fn weekly_rows(conn: &Connection) -> Result<Vec<WeekBucket>> {
    let ledger = Ledger::from_records(store::load_records(conn)?);
    Ok(ledger.group_by_week())
}

pub fn chart_dataset(conn: &Connection) -> Result<ChartData> {
    let ledger = Ledger::from_records(store::load_records(conn)?);
    Ok(ledger.chart_data())
}

fn kpis(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let summary = month_kpis(conn, &month)?;
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![vec![
            month,
            summary.total_sales.to_string(),
            summary.total_expense.to_string(),
            summary.profit.to_string(),
        ]];
        println!(
            "{}",
            pretty_table(&["Month", "Total Sales", "Total Expense", "Profit"], rows)
        );
    }
    Ok(())
}

fn weekly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let weeks = weekly_rows(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &weeks)? {
        let rows: Vec<Vec<String>> = weeks
            .iter()
            .map(|w| {
                vec![
                    w.week_start.to_string(),
                    w.week_end().to_string(),
                    w.sales.to_string(),
                    w.expenditure.to_string(),
                    w.profit().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Week Start", "Week End", "Sales", "Expenditure", "Profit"],
                rows,
            )
        );
    }
    Ok(())
}

fn months(conn: &Connection) -> Result<()> {
    let ledger = Ledger::from_records(store::load_records(conn)?);
    let rows: Vec<Vec<String>> = ledger.months().into_iter().map(|m| vec![m]).collect();
    println!("{}", pretty_table(&["Month"], rows));
    Ok(())
}

fn chart(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = chart_dataset(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .labels
            .iter()
            .zip(data.sales.iter().zip(data.profit.iter()))
            .map(|(label, (sales, profit))| {
                vec![label.clone(), sales.to_string(), profit.to_string()]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Sales", "Profit"], rows));
    }
    Ok(())
}

// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tillbook::models::Record;
use tillbook::{cli, commands::reports, store};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE store(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    conn
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

fn seed(conn: &Connection) {
    let records = vec![
        Record::new(d(2024, 3, 10), dec(100), dec(40)),
        Record::new(d(2024, 3, 20), dec(50), dec(10)),
        Record::new(d(2024, 4, 1), dec(20), dec(5)),
    ];
    store::save_records(conn, &records).unwrap();
}

#[test]
fn kpis_sum_only_the_requested_month() {
    let conn = setup();
    seed(&conn);

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["tillbook", "report", "kpis", "--month", "2024-03"]);
    let month = if let Some(("report", report_m)) = matches.subcommand() {
        if let Some(("kpis", kpis_m)) = report_m.subcommand() {
            kpis_m.get_one::<String>("month").unwrap().clone()
        } else {
            panic!("no kpis subcommand");
        }
    } else {
        panic!("no report subcommand");
    };

    let summary = reports::month_kpis(&conn, &month).unwrap();
    assert_eq!(summary.total_sales, dec(150));
    assert_eq!(summary.total_expense, dec(50));
    assert_eq!(summary.profit, dec(100));
}

#[test]
fn kpis_for_an_unrecorded_month_are_zero() {
    let conn = setup();
    seed(&conn);

    let summary = reports::month_kpis(&conn, "2024-05").unwrap();
    assert_eq!(summary.total_sales, dec(0));
    assert_eq!(summary.total_expense, dec(0));
    assert_eq!(summary.profit, dec(0));
}

#[test]
fn weekly_rows_bucket_a_month_boundary_week() {
    let conn = setup();
    let records = vec![
        Record::new(d(2024, 1, 29), dec(10), dec(1)),
        Record::new(d(2024, 2, 2), dec(20), dec(2)),
        Record::new(d(2024, 2, 4), dec(30), dec(3)),
    ];
    store::save_records(&conn, &records).unwrap();

    let weeks = reports::weekly_rows(&conn).unwrap();
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].week_start, d(2024, 1, 29));
    assert_eq!(weeks[0].week_end(), d(2024, 2, 4));
    assert_eq!(weeks[0].sales, dec(60));
    assert_eq!(weeks[0].expenditure, dec(6));
}

#[test]
fn chart_dataset_has_parallel_series_in_encounter_order() {
    let conn = setup();
    seed(&conn);

    let chart = reports::chart_dataset(&conn).unwrap();
    assert_eq!(chart.labels, vec!["2024-03", "2024-04"]);
    assert_eq!(chart.sales, vec![dec(150), dec(20)]);
    assert_eq!(chart.profit, vec![dec(100), dec(15)]);
}

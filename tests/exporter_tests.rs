// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tillbook::models::Record;
use tillbook::{cli, commands::exporter, store};
use tempfile::tempdir;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE store(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    conn
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn seed(conn: &Connection) -> Vec<Record> {
    let records = vec![
        Record::new(d(2024, 3, 15), Decimal::from(100), Decimal::from(40)),
        Record::new(d(2024, 3, 16), Decimal::from(50), Decimal::from(10)),
    ];
    store::save_records(conn, &records).unwrap();
    records
}

fn run_export(conn: &Connection, format: &str, out: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "tillbook", "export", "records", "--format", format, "--out", out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn csv_export_matches_the_fixed_header_and_row_shape() {
    let conn = setup();
    seed(&conn);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("records.csv");
    run_export(&conn, "csv", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        contents,
        "Date,Sales,Expenditure,Profit\n\
         2024-03-15,100,40,60\n\
         2024-03-16,50,10,40\n"
    );
}

#[test]
fn text_export_writes_one_line_per_record() {
    let conn = setup();
    seed(&conn);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("records.txt");
    run_export(&conn, "text", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        contents,
        "Tillbook Daily Records\n\
         2024-03-15 | Sales: 100 | Expenditure: 40 | Profit: 60\n\
         2024-03-16 | Sales: 50 | Expenditure: 10 | Profit: 40\n"
    );
}

#[test]
fn json_export_parses_back_to_the_same_records() {
    let conn = setup();
    let records = seed(&conn);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("records.json");
    run_export(&conn, "json", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: Vec<Record> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, records);
}

#[test]
fn export_rejects_unknown_format() {
    let conn = setup();
    seed(&conn);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("records.xml");
    assert!(run_export(&conn, "xml", &out_path.to_string_lossy()).is_err());
    assert!(!out_path.exists());
}

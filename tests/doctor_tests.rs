// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tillbook::commands::doctor;
use tillbook::models::Record;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn audit_passes_on_ledger_built_records() {
    let records = vec![
        Record::new(d(2024, 3, 15), Decimal::from(100), Decimal::from(40)),
        Record::new(d(2024, 4, 1), Decimal::from(20), Decimal::ZERO),
    ];
    assert!(doctor::audit(&records).is_empty());
}

#[test]
fn audit_flags_a_tampered_profit() {
    let mut record = Record::new(d(2024, 3, 15), Decimal::from(100), Decimal::from(40));
    record.profit = Decimal::from(99);

    let rows = doctor::audit(&[record]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "profit_mismatch");
}

#[test]
fn audit_flags_a_tampered_month() {
    let mut record = Record::new(d(2024, 3, 15), Decimal::from(100), Decimal::ZERO);
    record.month = "2024-04".into();

    let rows = doctor::audit(&[record]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "month_mismatch");
}

#[test]
fn audit_flags_out_of_band_amounts() {
    // Record::new does not validate; only the ledger does. A blob written
    // around the ledger can carry amounts append would have rejected.
    let zero_sales = Record::new(d(2024, 3, 15), Decimal::ZERO, Decimal::ZERO);
    let negative_exp = Record::new(d(2024, 3, 16), Decimal::from(10), Decimal::from(-2));

    let rows = doctor::audit(&[zero_sales, negative_exp]);
    let issues: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert!(issues.contains(&"nonpositive_sales"));
    assert!(issues.contains(&"negative_expenditure"));
}

#[test]
fn audit_flags_duplicate_ids() {
    let record = Record::new(d(2024, 3, 15), Decimal::from(10), Decimal::ZERO);
    let rows = doctor::audit(&[record.clone(), record]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "duplicate_id");
}

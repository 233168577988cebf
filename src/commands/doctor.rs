// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Record;
use crate::store;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle(conn: &Connection) -> Result<()> {
    let records = store::load_records(conn)?;
    let rows = audit(&records);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Check every stored record against the derivation invariants. The blob is
/// written only through the ledger, so any hit means out-of-band editing.
pub fn audit(records: &[Record]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut seen = HashSet::new();

    for r in records {
        if !seen.insert(r.id) {
            rows.push(vec!["duplicate_id".into(), r.id.to_string()]);
        }
        if r.profit != r.sales - r.expenditure {
            rows.push(vec![
                "profit_mismatch".into(),
                format!("{} {}: {} != {} - {}", r.id, r.date, r.profit, r.sales, r.expenditure),
            ]);
        }
        if r.month != r.date.format("%Y-%m").to_string() {
            rows.push(vec![
                "month_mismatch".into(),
                format!("{} {}: month '{}'", r.id, r.date, r.month),
            ]);
        }
        if r.sales <= Decimal::ZERO {
            rows.push(vec![
                "nonpositive_sales".into(),
                format!("{} {}: {}", r.id, r.date, r.sales),
            ]);
        }
        if r.expenditure < Decimal::ZERO {
            rows.push(vec![
                "negative_expenditure".into(),
                format!("{} {}: {}", r.id, r.date, r.expenditure),
            ]);
        }
    }
    rows
}

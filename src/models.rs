// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One daily sales/expenditure entry. Profit and month are derived once at
/// creation and stored redundantly; the only mutation path recomputes profit
/// and the date never changes, so `profit == sales - expenditure` and
/// `month == YYYY-MM of date` hold for every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub date: NaiveDate,
    pub sales: Decimal,
    pub expenditure: Decimal,
    pub profit: Decimal,
    pub month: String,
}

impl Record {
    pub fn new(date: NaiveDate, sales: Decimal, expenditure: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            sales,
            expenditure,
            profit: sales - expenditure,
            month: date.format("%Y-%m").to_string(),
        }
    }
}

/// Active user blob under the `loggedInUser` store key. The role gates
/// edit/delete at the command layer only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Month aggregate for charting: sales and profit only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub month: String,
    pub sales: Decimal,
    pub profit: Decimal,
}

/// Week aggregate keyed by its Monday. End date and profit are derived on
/// read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub sales: Decimal,
    pub expenditure: Decimal,
}

impl WeekBucket {
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + Days::new(6)
    }

    pub fn profit(&self) -> Decimal {
        self.sales - self.expenditure
    }
}

/// KPI totals for a single month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub total_sales: Decimal,
    pub total_expense: Decimal,
    pub profit: Decimal,
}

/// Dataset shape consumed by an external charting frontend: labels with
/// parallel numeric sequences, in month encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub sales: Vec<Decimal>,
    pub profit: Vec<Decimal>,
}

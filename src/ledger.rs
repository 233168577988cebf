// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::{ChartData, MonthBucket, MonthSummary, Record, WeekBucket};

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Ordered collection of daily records. Pure in-memory aggregation; callers
/// own loading from and saving to the store around every mutation.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record for `date`. Sales must be strictly positive and
    /// expenditure non-negative; profit and month are derived here, once.
    pub fn append(
        &mut self,
        date: NaiveDate,
        sales: Decimal,
        expenditure: Decimal,
    ) -> Result<Record, LedgerError> {
        check_amounts(sales, expenditure)?;
        let record = Record::new(date, sales, expenditure);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Remove the record at a zero-based position. Every later record shifts
    /// down one position, so positional handles must be re-fetched after any
    /// mutation; prefer [`Ledger::remove`] for stable identity.
    pub fn remove_at(&mut self, index: usize) -> Result<Record, LedgerError> {
        if index >= self.records.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    pub fn remove(&mut self, id: Uuid) -> Result<Record, LedgerError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(LedgerError::RecordNotFound(id))?;
        Ok(self.records.remove(pos))
    }

    /// Replace a record's amounts, recomputing profit. Date and month are
    /// fixed at creation and never change.
    pub fn update_amounts(
        &mut self,
        id: Uuid,
        sales: Decimal,
        expenditure: Decimal,
    ) -> Result<Record, LedgerError> {
        check_amounts(sales, expenditure)?;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(LedgerError::RecordNotFound(id))?;
        record.sales = sales;
        record.expenditure = expenditure;
        record.profit = sales - expenditure;
        Ok(record.clone())
    }

    /// Group records by calendar month in first-appearance order. Only sales
    /// and profit are accumulated at month granularity; expenditure totals
    /// come from [`Ledger::month_summary`].
    pub fn group_by_month(&self) -> Vec<MonthBucket> {
        let mut buckets: Vec<MonthBucket> = Vec::new();
        for r in &self.records {
            match buckets.iter_mut().find(|b| b.month == r.month) {
                Some(b) => {
                    b.sales += r.sales;
                    b.profit += r.profit;
                }
                None => buckets.push(MonthBucket {
                    month: r.month.clone(),
                    sales: r.sales,
                    profit: r.profit,
                }),
            }
        }
        buckets
    }

    /// Group records by ISO week (Monday start) in first-appearance order.
    pub fn group_by_week(&self) -> Vec<WeekBucket> {
        let mut buckets: Vec<WeekBucket> = Vec::new();
        for r in &self.records {
            let start = week_start(r.date);
            match buckets.iter_mut().find(|b| b.week_start == start) {
                Some(b) => {
                    b.sales += r.sales;
                    b.expenditure += r.expenditure;
                }
                None => buckets.push(WeekBucket {
                    week_start: start,
                    sales: r.sales,
                    expenditure: r.expenditure,
                }),
            }
        }
        buckets
    }

    /// KPI totals for one month key, exact string match. An unknown key sums
    /// an empty subset and yields zeros; there is no all-months wildcard.
    pub fn month_summary(&self, month: &str) -> MonthSummary {
        let mut total_sales = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        for r in self.records.iter().filter(|r| r.month == month) {
            total_sales += r.sales;
            total_expense += r.expenditure;
        }
        MonthSummary {
            total_sales,
            total_expense,
            profit: total_sales - total_expense,
        }
    }

    /// Distinct months in first-appearance order.
    pub fn months(&self) -> Vec<String> {
        let mut months: Vec<String> = Vec::new();
        for r in &self.records {
            if !months.iter().any(|m| m == &r.month) {
                months.push(r.month.clone());
            }
        }
        months
    }

    /// Parallel label/sales/profit sequences for an external charting
    /// frontend, in month encounter order.
    pub fn chart_data(&self) -> ChartData {
        let buckets = self.group_by_month();
        ChartData {
            labels: buckets.iter().map(|b| b.month.clone()).collect(),
            sales: buckets.iter().map(|b| b.sales).collect(),
            profit: buckets.iter().map(|b| b.profit).collect(),
        }
    }
}

fn check_amounts(sales: Decimal, expenditure: Decimal) -> Result<(), LedgerError> {
    if sales <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(format!(
            "sales must be positive, got {}",
            sales
        )));
    }
    if expenditure < Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(format!(
            "expenditure cannot be negative, got {}",
            expenditure
        )));
    }
    Ok(())
}

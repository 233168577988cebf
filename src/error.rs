// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Index {index} out of range for ledger of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),
}

// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Truth table value types
//!
//! A [`TruthTable`] is a derived, stateless artifact: generation lives in
//! `logi-engine`, lesson content consumes the rows.

use crate::LogicLevel;
use serde::{Deserialize, Serialize};

/// One input combination and its computed output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthTableRow {
    pub inputs: Vec<LogicLevel>,
    pub output: LogicLevel,
}

/// A complete truth table for one gate kind.
///
/// Rows cover every input combination exactly once, in ascending binary
/// order with the first input label as the most significant bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthTable {
    /// Ordered input labels ("A", "B", ...)
    pub inputs: Vec<String>,
    /// Output label, conventionally "Y"
    pub output: String,
    pub rows: Vec<TruthTableRow>,
}

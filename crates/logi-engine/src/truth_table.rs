// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Exhaustive truth table generation

use crate::functions::eval_gate_kind;
use logi_structures::{GateKind, LogicLevel, TruthTable, TruthTableRow};

/// Generate the complete truth table for a gate kind.
///
/// For arity `n` this produces exactly `2^n` rows in ascending order of the
/// input vector read as an n-bit binary number (first input label = most
/// significant bit). Inputs are labeled "A", "B", ... and the output "Y".
/// Deterministic and total, so callers may memoize the result.
pub fn generate_truth_table(kind: GateKind) -> TruthTable {
    let input_count = kind.input_count();
    let input_labels = (0..input_count)
        .map(|i| ((b'A' + i as u8) as char).to_string())
        .collect();

    let mut rows = Vec::with_capacity(1 << input_count);
    for value in 0..(1usize << input_count) {
        let bits: Vec<bool> = (0..input_count)
            .rev()
            .map(|bit| (value >> bit) & 1 == 1)
            .collect();

        rows.push(TruthTableRow {
            inputs: bits.iter().copied().map(LogicLevel::from_bool).collect(),
            output: LogicLevel::from_bool(eval_gate_kind(kind, &bits)),
        });
    }

    TruthTable {
        inputs: input_labels,
        output: "Y".to_string(),
        rows,
    }
}

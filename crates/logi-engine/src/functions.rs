// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Gate function table and the absorbing evaluator
//!
//! Two layers, deliberately separate:
//! - [`eval_gate_kind`] is the pure boolean function table. It assumes a
//!   fully determined input vector of the right arity.
//! - [`evaluate`] wraps it with the three-valued policy: any `Unknown`
//!   input absorbs to an `Unknown` output, and malformed input degrades to
//!   `Unknown` instead of failing - one bad gate must never abort a
//!   simulation.

use logi_structures::{GateKind, LogicLevel};
use tracing::error;

/// Compute a gate kind's boolean function.
///
/// The input slice must be exactly `kind.input_count()` long; callers are
/// responsible for arity and value-domain checks ([`evaluate`] performs
/// both before dispatching here).
pub fn eval_gate_kind(kind: GateKind, inputs: &[bool]) -> bool {
    debug_assert_eq!(inputs.len(), kind.input_count());

    match kind {
        GateKind::And => inputs.iter().all(|bit| *bit),
        GateKind::Or => inputs.iter().any(|bit| *bit),
        GateKind::Not => !inputs[0],
        GateKind::Nand => !inputs.iter().all(|bit| *bit),
        GateKind::Nor => !inputs.iter().any(|bit| *bit),
        GateKind::Xor => inputs.iter().filter(|bit| **bit).count() % 2 == 1,
        GateKind::Xnor => inputs.iter().filter(|bit| **bit).count() % 2 == 0,
        GateKind::Buffer => inputs[0],
    }
}

/// Evaluate a gate over three-valued inputs.
///
/// `Unknown` is absorbing: if any input is `Unknown` the output is
/// `Unknown` without consulting the function table. An input vector whose
/// length does not match the kind's arity also yields `Unknown` (logged,
/// never raised) - the validator is the place where that mismatch becomes
/// a diagnostic.
pub fn evaluate(kind: GateKind, inputs: &[LogicLevel]) -> LogicLevel {
    let mut bits = Vec::with_capacity(inputs.len());
    for level in inputs {
        match level.to_bool() {
            Some(bit) => bits.push(bit),
            None => return LogicLevel::Unknown,
        }
    }

    if bits.len() != kind.input_count() {
        error!(
            gate_kind = %kind,
            expected = kind.input_count(),
            got = bits.len(),
            "input vector arity mismatch, degrading output to Unknown"
        );
        return LogicLevel::Unknown;
    }

    LogicLevel::from_bool(eval_gate_kind(kind, &bits))
}

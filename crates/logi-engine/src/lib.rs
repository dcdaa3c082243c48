// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Logi Simulation Engine
//!
//! ALL circuit computation in one place:
//! - **Functions**: the gate function table and the absorbing evaluator
//! - **Propagation**: iterative fixed-point settling of a whole circuit
//! - **Graph**: feedback-loop detection and unconnected-input reporting
//! - **Truth tables**: exhaustive enumeration per gate kind
//! - **Validation**: structural checking with accumulated diagnostics
//!
//! Everything is a pure transform over `logi-structures` values: no call
//! mutates its argument, no call blocks, and no call can run unbounded
//! (the propagation pass ceiling caps worst-case work). Independent
//! invocations are safe to run in parallel since no state is shared.

pub mod functions;
pub mod graph;
pub mod propagation;
pub mod truth_table;
pub mod validation;

// Re-export everything for convenience
pub use functions::{eval_gate_kind, evaluate};
pub use graph::{find_unconnected_inputs, has_feedback_loop, UnconnectedInput};
pub use propagation::{settle_circuit, settle_circuit_with, SettleReport, DEFAULT_MAX_PASSES};
pub use truth_table::generate_truth_table;
pub use validation::{
    sanitize_label, validate_circuit, validate_circuit_name, validate_circuit_with_limits,
    validate_gate, validate_position, validate_wire, CircuitLimits, ValidationReport,
};

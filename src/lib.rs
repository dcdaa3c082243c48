// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Logi - Interactive Digital Logic Education Engine
//!
//! Logi teaches digital logic by simulating small combinational circuits.
//! This umbrella crate re-exports the whole engine:
//!
//! - [`logi_structures`]: gates, wires, pins, circuits, and pure editing
//!   and layout processors over them
//! - [`logi_engine`]: the gate function table, the fixed-point signal
//!   propagation engine, graph analysis, truth tables, and the validator
//! - [`logi_config`]: TOML configuration with environment/CLI overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use logi::prelude::*;
//!
//! // Drop an AND gate on the canvas, drive both inputs high, settle.
//! let mut circuit = create_empty_circuit("Demo");
//! circuit = add_gate(&circuit, create_gate(GateKind::And, Position::new(40.0, 40.0), None));
//! circuit.gates[0].inputs = vec![LogicLevel::High, LogicLevel::High];
//!
//! let (settled, report) = settle_circuit(&circuit);
//! assert!(report.converged);
//! assert_eq!(settled.gates[0].output, LogicLevel::High);
//! ```
//!
//! Rendering, persistence, and lesson content are separate layers: they
//! consume these types and functions but the core never calls out to them.

pub use logi_config as config;
pub use logi_engine as engine;
pub use logi_structures as structures;

use logi_config::LogiConfig;
use logi_engine::{
    settle_circuit_with, validate_circuit_with_limits, CircuitLimits, SettleReport,
    ValidationReport,
};
use logi_structures::Circuit;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settle a circuit using the configured pass ceiling.
pub fn settle_circuit_with_config(
    circuit: &Circuit,
    config: &LogiConfig,
) -> (Circuit, SettleReport) {
    settle_circuit_with(circuit, config.simulation.max_passes)
}

/// Validate a circuit using the configured structural ceilings.
pub fn validate_circuit_with_config(circuit: &Circuit, config: &LogiConfig) -> ValidationReport {
    let limits = CircuitLimits {
        max_gates: config.limits.max_gates,
        max_wires: config.limits.max_wires,
    };
    validate_circuit_with_limits(circuit, &limits)
}

/// Everything a typical caller needs, in one import.
pub mod prelude {
    pub use crate::{settle_circuit_with_config, validate_circuit_with_config, VERSION};
    pub use logi_config::{load_config, validate_config, LogiConfig};
    pub use logi_engine::{
        evaluate, find_unconnected_inputs, generate_truth_table, has_feedback_loop,
        settle_circuit, settle_circuit_with, validate_circuit, validate_circuit_with_limits,
        CircuitLimits, SettleReport, ValidationReport,
    };
    pub use logi_structures::circuit::{
        add_gate, add_wire, center_circuit, circuit_bounds, clone_circuit, create_empty_circuit,
        create_gate, create_wire, find_connected_gates, find_nearest_gate, generate_id,
        remove_gate, remove_wire, scale_circuit, snap_to_grid, update_gate_position, wire_path,
        WirePathStyle,
    };
    pub use logi_structures::{
        Circuit, Gate, GateKind, LogiJSON, LogicLevel, Pin, Position, TruthTable, Wire,
    };
}

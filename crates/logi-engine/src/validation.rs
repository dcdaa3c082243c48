// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Circuit validation
//!
//! Structural and semantic checking with accumulated diagnostics. Checks
//! append to shared error/warning lists instead of failing fast, so one
//! report carries everything wrong with a circuit at once. Errors make a
//! circuit invalid; warnings are advisory and never block use.
//!
//! Validation is the single source of truth for structural integrity:
//! construction in `logi-structures` is deliberately unchecked so editors
//! can hold transiently invalid circuits.

use crate::graph::{find_unconnected_inputs, has_feedback_loop};
use ahash::AHashSet;
use logi_structures::{Circuit, Gate, Position, Wire};
use serde::{Deserialize, Serialize};

/// Default ceiling on gates per circuit.
pub const DEFAULT_MAX_GATES: usize = 50;
/// Default ceiling on wires per circuit.
pub const DEFAULT_MAX_WIRES: usize = 100;

/// Structural ceilings applied by [`validate_circuit_with_limits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitLimits {
    pub max_gates: usize,
    pub max_wires: usize,
}

impl Default for CircuitLimits {
    fn default() -> Self {
        Self {
            max_gates: DEFAULT_MAX_GATES,
            max_wires: DEFAULT_MAX_WIRES,
        }
    }
}

/// Accumulated validation diagnostics.
///
/// Produced fresh per validation call, never stored. `is_valid` depends on
/// errors alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True iff no errors were collected. Warnings never affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn absorb(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validate a complete circuit against the default limits.
pub fn validate_circuit(circuit: &Circuit) -> ValidationReport {
    validate_circuit_with_limits(circuit, &CircuitLimits::default())
}

/// Validate a complete circuit.
///
/// Composes the per-entity checks, duplicate-id detection, and the advisory
/// graph analyses into one report.
pub fn validate_circuit_with_limits(circuit: &Circuit, limits: &CircuitLimits) -> ValidationReport {
    let mut report = ValidationReport::default();

    // Structural ceilings
    if circuit.gates.len() > limits.max_gates {
        report.errors.push(format!(
            "Too many gates: {}/{}",
            circuit.gates.len(),
            limits.max_gates
        ));
    }
    if circuit.wires.len() > limits.max_wires {
        report.errors.push(format!(
            "Too many wires: {}/{}",
            circuit.wires.len(),
            limits.max_wires
        ));
    }

    for gate in &circuit.gates {
        report.absorb(validate_gate(gate));
    }
    for wire in &circuit.wires {
        report.absorb(validate_wire(wire, &circuit.gates));
    }

    if let Some(duplicates) = duplicate_ids(circuit.gates.iter().map(|gate| gate.id.as_str())) {
        report
            .errors
            .push(format!("Duplicate gate IDs: {}", duplicates.join(", ")));
    }
    if let Some(duplicates) = duplicate_ids(circuit.wires.iter().map(|wire| wire.id.as_str())) {
        report
            .errors
            .push(format!("Duplicate wire IDs: {}", duplicates.join(", ")));
    }

    // Advisory checks - a floating input or a feedback loop is usable, just
    // worth pointing out.
    let unconnected = find_unconnected_inputs(circuit);
    if !unconnected.is_empty() {
        report
            .warnings
            .push(format!("{} unconnected inputs found", unconnected.len()));
    }
    if has_feedback_loop(circuit) {
        report
            .warnings
            .push("Circuit contains feedback loops".to_string());
    }

    report
}

/// Validate a single gate.
///
/// The value domain of inputs and output needs no checking here: the type
/// system already restricts them to the three logic levels.
pub fn validate_gate(gate: &Gate) -> ValidationReport {
    let mut report = ValidationReport::default();

    if gate.id.trim().is_empty() {
        report.errors.push("Gate ID is required".to_string());
    }

    let position = validate_position(gate.position);
    report.errors.extend(
        position
            .errors
            .into_iter()
            .map(|message| format!("Gate position: {}", message)),
    );

    let expected = gate.kind.input_count();
    if gate.inputs.len() != expected {
        report.errors.push(format!(
            "Invalid input count for {}: expected {}, got {}",
            gate.kind,
            expected,
            gate.inputs.len()
        ));
    }

    report
}

/// Validate a wire against the gates of its circuit.
pub fn validate_wire(wire: &Wire, gates: &[Gate]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if wire.id.trim().is_empty() {
        report.errors.push("Wire ID is required".to_string());
    }

    let source = gates.iter().find(|gate| gate.id == wire.from.gate_id);
    match source {
        None => report
            .errors
            .push(format!("Source gate not found: {}", wire.from.gate_id)),
        Some(_) if wire.from.port != 0 => report.errors.push(format!(
            "Invalid output index: {} (gates have only one output)",
            wire.from.port
        )),
        Some(_) => {}
    }

    let target = gates.iter().find(|gate| gate.id == wire.to.gate_id);
    match target {
        None => report
            .errors
            .push(format!("Target gate not found: {}", wire.to.gate_id)),
        Some(gate) => {
            let expected = gate.kind.input_count();
            if wire.to.port >= expected {
                report.errors.push(format!(
                    "Invalid input index: {} ({} gates have {} inputs)",
                    wire.to.port, gate.kind, expected
                ));
            }
        }
    }

    if wire.from.gate_id == wire.to.gate_id {
        report
            .errors
            .push("Wire cannot connect a gate to itself".to_string());
    }

    report
}

/// Validate a canvas position: both coordinates finite and non-negative.
pub fn validate_position(position: Position) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !position.x.is_finite() {
        report
            .errors
            .push("X coordinate must be a finite number".to_string());
    } else if position.x < 0.0 {
        report
            .errors
            .push("X coordinate cannot be negative".to_string());
    }

    if !position.y.is_finite() {
        report
            .errors
            .push("Y coordinate must be a finite number".to_string());
    } else if position.y < 0.0 {
        report
            .errors
            .push("Y coordinate cannot be negative".to_string());
    }

    report
}

/// Validate a user-supplied circuit name.
pub fn validate_circuit_name(name: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    if name.trim().is_empty() {
        report.errors.push("Circuit name is required".to_string());
    }
    if name.chars().count() > 50 {
        report
            .errors
            .push("Circuit name cannot exceed 50 characters".to_string());
    }
    if name
        .chars()
        .any(|c| matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*'))
    {
        report
            .errors
            .push("Circuit name contains invalid characters".to_string());
    }

    report
}

/// Sanitize a user-supplied label: trim, strip angle brackets, cap length.
pub fn sanitize_label(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(100)
        .collect()
}

/// First-seen duplicate values, in order of second appearance.
fn duplicate_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Option<Vec<&'a str>> {
    let mut seen = AHashSet::new();
    let mut duplicates = Vec::new();
    for id in ids {
        if !seen.insert(id) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    if duplicates.is_empty() {
        None
    } else {
        Some(duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logi_structures::circuit::{
        add_gate, add_wire, create_empty_circuit, create_gate, create_wire,
    };
    use logi_structures::{GateKind, LogicLevel};

    #[test]
    fn test_lone_and_gate_is_valid_with_warning() {
        let circuit = add_gate(
            &create_empty_circuit("solo"),
            create_gate(GateKind::And, Position::new(10.0, 10.0), None),
        );

        let report = validate_circuit(&circuit);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("2 unconnected inputs"));
    }

    #[test]
    fn test_out_of_range_input_index_is_an_error() {
        let mut circuit = create_empty_circuit("off-by-one");
        let a = create_gate(GateKind::Not, Position::default(), None);
        let b = create_gate(GateKind::And, Position::default(), None);
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        circuit = add_gate(&circuit, a);
        circuit = add_gate(&circuit, b);
        // Destination index equals the AND gate's arity: one past the end.
        circuit = add_wire(&circuit, create_wire(a_id, 0, b_id, 2));

        let report = validate_circuit(&circuit);
        assert!(!report.is_valid());
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("Invalid input index: 2")));
    }

    #[test]
    fn test_missing_endpoint_gates_are_errors() {
        let circuit = add_wire(
            &create_empty_circuit("dangling"),
            create_wire("nowhere", 0, "also-nowhere", 0),
        );

        let report = validate_circuit(&circuit);
        assert!(!report.is_valid());
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("Source gate not found: nowhere")));
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("Target gate not found: also-nowhere")));
    }

    #[test]
    fn test_self_loop_wire_is_an_error() {
        let mut circuit = create_empty_circuit("selfie");
        let gate = create_gate(GateKind::Buffer, Position::default(), None);
        let id = gate.id.clone();
        circuit = add_gate(&circuit, gate);
        circuit = add_wire(&circuit, create_wire(id.clone(), 0, id, 0));

        let report = validate_circuit(&circuit);
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("connect a gate to itself")));
    }

    #[test]
    fn test_nonzero_output_index_is_an_error() {
        let mut circuit = create_empty_circuit("two-headed");
        let a = create_gate(GateKind::Not, Position::default(), None);
        let b = create_gate(GateKind::Not, Position::default(), None);
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        circuit = add_gate(&circuit, a);
        circuit = add_gate(&circuit, b);
        circuit = add_wire(&circuit, create_wire(a_id, 1, b_id, 0));

        let report = validate_circuit(&circuit);
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("gates have only one output")));
    }

    #[test]
    fn test_arity_mismatch_is_an_error() {
        let mut gate = create_gate(GateKind::And, Position::default(), None);
        gate.inputs.push(LogicLevel::Unknown); // now 3 inputs on a 2-input kind

        let report = validate_gate(&gate);
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("expected 2, got 3")));
    }

    #[test]
    fn test_position_checks() {
        assert!(validate_position(Position::new(0.0, 0.0)).is_valid());
        assert!(!validate_position(Position::new(-1.0, 0.0)).is_valid());
        assert!(!validate_position(Position::new(f64::NAN, 0.0)).is_valid());
        assert!(!validate_position(Position::new(0.0, f64::INFINITY)).is_valid());
    }

    #[test]
    fn test_duplicate_ids_are_errors() {
        let mut circuit = create_empty_circuit("dupes");
        let mut a = create_gate(GateKind::Not, Position::default(), None);
        a.id = "same".to_string();
        let mut b = create_gate(GateKind::Not, Position::default(), None);
        b.id = "same".to_string();
        circuit = add_gate(&circuit, a);
        circuit = add_gate(&circuit, b);

        let report = validate_circuit(&circuit);
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("Duplicate gate IDs: same")));
    }

    #[test]
    fn test_gate_ceiling_is_an_error() {
        let mut circuit = create_empty_circuit("crowded");
        for _ in 0..3 {
            circuit = add_gate(
                &circuit,
                create_gate(GateKind::Buffer, Position::default(), None),
            );
        }

        let limits = CircuitLimits {
            max_gates: 2,
            max_wires: 100,
        };
        let report = validate_circuit_with_limits(&circuit, &limits);
        assert!(report.errors.iter().any(|error| error.contains("Too many gates: 3/2")));
    }

    #[test]
    fn test_feedback_loop_is_a_warning_not_an_error() {
        let mut circuit = create_empty_circuit("loop");
        let a = create_gate(GateKind::Not, Position::default(), None);
        let b = create_gate(GateKind::Not, Position::default(), None);
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        circuit = add_gate(&circuit, a);
        circuit = add_gate(&circuit, b);
        circuit = add_wire(&circuit, create_wire(a_id.clone(), 0, b_id.clone(), 0));
        circuit = add_wire(&circuit, create_wire(b_id, 0, a_id, 0));

        let report = validate_circuit(&circuit);
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning.contains("feedback loops")));
    }

    #[test]
    fn test_circuit_name_rules() {
        assert!(validate_circuit_name("Half Adder").is_valid());
        assert!(!validate_circuit_name("").is_valid());
        assert!(!validate_circuit_name("   ").is_valid());
        assert!(!validate_circuit_name(&"x".repeat(51)).is_valid());
        assert!(!validate_circuit_name("bad/name").is_valid());
    }

    #[test]
    fn test_sanitize_label() {
        assert_eq!(sanitize_label("  <b>latch</b>  "), "blatch/b");
        assert_eq!(sanitize_label("plain"), "plain");
        assert_eq!(sanitize_label(&"y".repeat(200)).chars().count(), 100);
    }
}

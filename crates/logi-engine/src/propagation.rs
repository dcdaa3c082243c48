// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Signal Propagation Engine
//!
//! Settles a circuit to the fixed point of "every gate's output equals its
//! function applied to its current inputs, and every wire copies its source
//! gate's output into its destination input slot".
//!
//! ## Algorithm
//! Gates are processed in their stored order. Each pass recomputes every
//! gate's output; when an output changes, the new level is pushed through
//! the gate's fan-out wires immediately, so gates later in the SAME pass
//! already observe it. Stored gate order is therefore part of the engine's
//! observable contract: with cycles or diamond-shaped fan-in, intermediate
//! states (never the final state of an acyclic circuit) depend on it.
//!
//! Passes repeat until one of them changes nothing, or the pass ceiling is
//! hit. The ceiling is a non-fatal guard against feedback loops: the engine
//! returns the best-effort state and flags it, and the caller decides
//! whether to accept or re-run. For acyclic wiring, N gate-to-gate hops
//! settle within N passes.

use crate::functions::evaluate;
use ahash::AHashMap;
use logi_structures::Circuit;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Pass ceiling used by [`settle_circuit`].
pub const DEFAULT_MAX_PASSES: usize = 100;

/// Outcome of one settle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettleReport {
    /// Number of full passes executed
    pub passes: usize,
    /// False when the pass ceiling cut the run short (possible feedback loop)
    pub converged: bool,
}

/// Settle a circuit with the default pass ceiling.
pub fn settle_circuit(circuit: &Circuit) -> (Circuit, SettleReport) {
    settle_circuit_with(circuit, DEFAULT_MAX_PASSES)
}

/// Settle a circuit, running at most `max_passes` full passes.
///
/// Never fails: hitting the ceiling produces a warning and a best-effort
/// result with `converged = false`. The input circuit is not mutated; the
/// working buffer is local to this call, so independent invocations can
/// run in parallel.
pub fn settle_circuit_with(circuit: &Circuit, max_passes: usize) -> (Circuit, SettleReport) {
    // Local working buffer; index lookups instead of per-wire linear scans.
    let mut gates = circuit.gates.clone();

    let gate_index: AHashMap<String, usize> = gates
        .iter()
        .enumerate()
        .map(|(index, gate)| (gate.id.clone(), index))
        .collect();

    // Fan-out index: source gate id -> indices of wires leaving it
    let mut fan_out: AHashMap<&str, Vec<usize>> = AHashMap::new();
    for (wire_index, wire) in circuit.wires.iter().enumerate() {
        fan_out
            .entry(wire.from.gate_id.as_str())
            .or_default()
            .push(wire_index);
    }

    let mut passes = 0;
    let mut changed = true;

    while changed && passes < max_passes {
        changed = false;
        passes += 1;

        for index in 0..gates.len() {
            let new_output = evaluate(gates[index].kind, &gates[index].inputs);
            if new_output == gates[index].output {
                continue;
            }

            trace!(
                gate_id = %gates[index].id,
                kind = %gates[index].kind,
                old = %gates[index].output,
                new = %new_output,
                "gate output changed"
            );
            gates[index].output = new_output;
            changed = true;

            // Push the fresh output along every wire sourced at this gate so
            // gates later in this pass see it already.
            if let Some(wire_indices) = fan_out.get(gates[index].id.as_str()) {
                for &wire_index in wire_indices {
                    let wire = &circuit.wires[wire_index];
                    if let Some(&target) = gate_index.get(&wire.to.gate_id) {
                        if let Some(slot) = gates[target].inputs.get_mut(wire.to.port) {
                            *slot = new_output;
                        }
                    }
                }
            }
        }

        debug!(pass = passes, changed, "settle pass complete");
    }

    let converged = !changed;
    if !converged {
        warn!(
            circuit = %circuit.name,
            max_passes,
            "settling reached the pass ceiling - possible feedback loop, returning partial result"
        );
    }

    let mut settled = circuit.clone();
    settled.gates = gates;
    // Wires always mirror their source gate's latest output.
    for wire in &mut settled.wires {
        if let Some(&source) = gate_index.get(&wire.from.gate_id) {
            wire.level = settled.gates[source].output;
        }
    }

    (settled, SettleReport { passes, converged })
}

#[cfg(test)]
mod tests {
    use super::*;
    use logi_structures::circuit::{add_gate, add_wire, create_empty_circuit, create_gate, create_wire};
    use logi_structures::LogicLevel::{High, Low, Unknown};
    use logi_structures::{GateKind, Position};

    /// NOT -> NOT -> NOT chain driven by a forced first input.
    fn inverter_chain() -> Circuit {
        let mut circuit = create_empty_circuit("chain");
        let mut ids = Vec::new();
        for i in 0..3 {
            let gate = create_gate(GateKind::Not, Position::new(i as f64 * 100.0, 0.0), None);
            ids.push(gate.id.clone());
            circuit = add_gate(&circuit, gate);
        }
        circuit = add_wire(&circuit, create_wire(ids[0].clone(), 0, ids[1].clone(), 0));
        circuit = add_wire(&circuit, create_wire(ids[1].clone(), 0, ids[2].clone(), 0));
        circuit.gates[0].inputs[0] = Low;
        circuit
    }

    #[test]
    fn test_acyclic_chain_settles() {
        let (settled, report) = settle_circuit(&inverter_chain());
        assert!(report.converged);
        assert_eq!(settled.gates[0].output, High);
        assert_eq!(settled.gates[1].output, Low);
        assert_eq!(settled.gates[2].output, High);
    }

    #[test]
    fn test_wires_mirror_source_outputs() {
        let (settled, _) = settle_circuit(&inverter_chain());
        assert_eq!(settled.wires[0].level, settled.gates[0].output);
        assert_eq!(settled.wires[1].level, settled.gates[1].output);
    }

    #[test]
    fn test_settle_is_idempotent() {
        let (settled, _) = settle_circuit(&inverter_chain());
        let (again, report) = settle_circuit(&settled);
        assert_eq!(settled, again);
        assert!(report.converged);
        // A true fixed point settles without any output changing.
        assert_eq!(report.passes, 1);
    }

    #[test]
    fn test_unknown_inputs_stay_unknown() {
        let mut circuit = create_empty_circuit("floating");
        circuit = add_gate(
            &circuit,
            create_gate(GateKind::And, Position::default(), None),
        );
        let (settled, report) = settle_circuit(&circuit);
        assert!(report.converged);
        assert_eq!(settled.gates[0].output, Unknown);
    }

    #[test]
    fn test_oscillator_hits_ceiling_without_failing() {
        // NOT feeding a BUFFER feeding the NOT back: an odd number of
        // inversions around the ring, so the levels flip forever once
        // seeded with a determined value.
        let mut circuit = create_empty_circuit("ring");
        let a = create_gate(GateKind::Not, Position::new(0.0, 0.0), None);
        let b = create_gate(GateKind::Buffer, Position::new(100.0, 0.0), None);
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        circuit = add_gate(&circuit, a);
        circuit = add_gate(&circuit, b);
        circuit = add_wire(&circuit, create_wire(a_id.clone(), 0, b_id.clone(), 0));
        circuit = add_wire(&circuit, create_wire(b_id, 0, a_id, 0));
        circuit.gates[0].inputs[0] = Low;

        let (settled, report) = settle_circuit_with(&circuit, 10);
        assert!(!report.converged);
        assert_eq!(report.passes, 10);
        // Best-effort state is still well-formed three-valued data.
        assert!(settled.gates.iter().all(|gate| gate.inputs.len() == 1));
    }

    #[test]
    fn test_changes_visible_within_a_pass() {
        // With the driver stored before its consumer, the whole chain
        // settles in a single changing pass plus one confirming pass.
        let (_, report) = settle_circuit(&inverter_chain());
        assert_eq!(report.passes, 2);
    }
}

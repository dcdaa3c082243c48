// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Structural analysis over the gate-to-gate graph
//!
//! Wires induce a directed graph on gates (source gate -> destination
//! gate). Both analyses here are pure traversals of that graph; neither
//! needs settled outputs.

use ahash::{AHashMap, AHashSet};
use logi_structures::Circuit;
use serde::{Deserialize, Serialize};

/// Whether the circuit's wiring contains a directed cycle.
///
/// Depth-first traversal with a visited set and an on-stack set; a cycle
/// exists when an edge re-enters a node on the current traversal stack.
/// Every gate is tried as a root since the graph may be disconnected.
/// Reports only presence, not membership.
pub fn has_feedback_loop(circuit: &Circuit) -> bool {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for wire in &circuit.wires {
        adjacency
            .entry(wire.from.gate_id.as_str())
            .or_default()
            .push(wire.to.gate_id.as_str());
    }

    const NO_EDGES: &[&str] = &[];
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut on_stack: AHashSet<&str> = AHashSet::new();

    for gate in &circuit.gates {
        if visited.contains(gate.id.as_str()) {
            continue;
        }

        // Explicit stack of (node, next edge index) frames
        let mut stack: Vec<(&str, usize)> = vec![(gate.id.as_str(), 0)];
        visited.insert(gate.id.as_str());
        on_stack.insert(gate.id.as_str());

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let edges = adjacency
                .get(node)
                .map(|targets| targets.as_slice())
                .unwrap_or(NO_EDGES);

            if frame.1 < edges.len() {
                let next = edges[frame.1];
                frame.1 += 1;

                if on_stack.contains(next) {
                    return true;
                }
                if visited.insert(next) {
                    on_stack.insert(next);
                    stack.push((next, 0));
                }
            } else {
                on_stack.remove(node);
                stack.pop();
            }
        }
    }

    false
}

/// An input slot no wire drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnconnectedInput {
    pub gate_id: String,
    pub input_index: usize,
}

/// Collect every (gate, input slot) pair that no wire targets.
///
/// Pure reporting; the validator downgrades these to warnings since a
/// floating input simply evaluates as `Unknown`.
pub fn find_unconnected_inputs(circuit: &Circuit) -> Vec<UnconnectedInput> {
    let mut unconnected = Vec::new();

    for gate in &circuit.gates {
        for input_index in 0..gate.kind.input_count() {
            let driven = circuit
                .wires
                .iter()
                .any(|wire| wire.to.gate_id == gate.id && wire.to.port == input_index);
            if !driven {
                unconnected.push(UnconnectedInput {
                    gate_id: gate.id.clone(),
                    input_index,
                });
            }
        }
    }

    unconnected
}

#[cfg(test)]
mod tests {
    use super::*;
    use logi_structures::circuit::{add_gate, add_wire, create_empty_circuit, create_gate, create_wire};
    use logi_structures::{GateKind, Position};

    fn gate_ids(circuit: &Circuit) -> Vec<String> {
        circuit.gates.iter().map(|gate| gate.id.clone()).collect()
    }

    fn chain(kinds: &[GateKind]) -> Circuit {
        let mut circuit = create_empty_circuit("chain");
        for (i, kind) in kinds.iter().enumerate() {
            circuit = add_gate(
                &circuit,
                create_gate(*kind, Position::new(i as f64 * 100.0, 0.0), None),
            );
        }
        let ids = gate_ids(&circuit);
        for pair in ids.windows(2) {
            circuit = add_wire(&circuit, create_wire(pair[0].clone(), 0, pair[1].clone(), 0));
        }
        circuit
    }

    #[test]
    fn test_two_gate_cycle_is_detected() {
        let mut circuit = chain(&[GateKind::Not, GateKind::Not]);
        let ids = gate_ids(&circuit);
        circuit = add_wire(&circuit, create_wire(ids[1].clone(), 0, ids[0].clone(), 0));
        assert!(has_feedback_loop(&circuit));
    }

    #[test]
    fn test_acyclic_chain_is_clean() {
        let circuit = chain(&[GateKind::Not, GateKind::Buffer, GateKind::Not]);
        assert!(!has_feedback_loop(&circuit));
    }

    #[test]
    fn test_disconnected_component_cycle_is_found() {
        // An isolated clean gate plus a separate 2-cycle elsewhere.
        let mut circuit = chain(&[GateKind::Buffer]);
        let a = create_gate(GateKind::Not, Position::new(0.0, 200.0), None);
        let b = create_gate(GateKind::Not, Position::new(100.0, 200.0), None);
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        circuit = add_gate(&circuit, a);
        circuit = add_gate(&circuit, b);
        circuit = add_wire(&circuit, create_wire(a_id.clone(), 0, b_id.clone(), 0));
        circuit = add_wire(&circuit, create_wire(b_id, 0, a_id, 0));

        assert!(has_feedback_loop(&circuit));
    }

    #[test]
    fn test_diamond_fan_in_is_not_a_cycle() {
        //   a -> b -> d
        //   a -> c -> d
        let mut circuit = create_empty_circuit("diamond");
        let mut ids = Vec::new();
        for kind in [GateKind::Buffer, GateKind::Not, GateKind::Buffer, GateKind::And] {
            let gate = create_gate(kind, Position::default(), None);
            ids.push(gate.id.clone());
            circuit = add_gate(&circuit, gate);
        }
        circuit = add_wire(&circuit, create_wire(ids[0].clone(), 0, ids[1].clone(), 0));
        circuit = add_wire(&circuit, create_wire(ids[0].clone(), 0, ids[2].clone(), 0));
        circuit = add_wire(&circuit, create_wire(ids[1].clone(), 0, ids[3].clone(), 0));
        circuit = add_wire(&circuit, create_wire(ids[2].clone(), 0, ids[3].clone(), 1));

        assert!(!has_feedback_loop(&circuit));
    }

    #[test]
    fn test_unconnected_inputs_reported_per_slot() {
        let circuit = chain(&[GateKind::Not, GateKind::And]);
        let ids = gate_ids(&circuit);

        let unconnected = find_unconnected_inputs(&circuit);
        // NOT's single input is floating; AND's slot 0 is driven by the
        // chain wire, slot 1 floats.
        assert_eq!(unconnected.len(), 2);
        assert!(unconnected.contains(&UnconnectedInput {
            gate_id: ids[0].clone(),
            input_index: 0,
        }));
        assert!(unconnected.contains(&UnconnectedInput {
            gate_id: ids[1].clone(),
            input_index: 1,
        }));
    }

    #[test]
    fn test_fully_wired_circuit_has_no_unconnected_inputs() {
        let mut circuit = chain(&[GateKind::Not, GateKind::Not]);
        let ids = gate_ids(&circuit);
        // Close the loop so every input slot is driven.
        circuit = add_wire(&circuit, create_wire(ids[1].clone(), 0, ids[0].clone(), 0));
        assert!(find_unconnected_inputs(&circuit).is_empty());
    }
}

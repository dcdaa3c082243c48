// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Structural circuit edits
//!
//! Every function here is a pure transform: the argument circuit is never
//! mutated, a new value is returned. Edits perform NO integrity checking -
//! a caller may wire up gates that do not exist yet, and the validator in
//! logi-engine reports on the result. The one exception is [`remove_gate`],
//! which cascades so that removing a gate can never strand wires.

use super::model::{Circuit, Gate, Position, Wire, WireEndpoint};
use crate::{GateKind, LogicLevel};
use uuid::Uuid;

/// Generate a fresh unique id for gates, wires, circuits, and pins.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a gate of the given kind.
///
/// All inputs and the output start at [`LogicLevel::Unknown`]; the input
/// vector length equals `kind.input_count()`, establishing the arity
/// invariant at birth.
pub fn create_gate(kind: GateKind, position: Position, label: Option<String>) -> Gate {
    Gate {
        id: generate_id(),
        kind,
        position,
        inputs: vec![LogicLevel::Unknown; kind.input_count()],
        output: LogicLevel::Unknown,
        label,
    }
}

/// Create a wire from one gate's output port to another gate's input slot.
///
/// The carried level starts at [`LogicLevel::Unknown`]. Endpoint ids are not
/// checked against any circuit.
pub fn create_wire(
    from_gate_id: impl Into<String>,
    from_output_index: usize,
    to_gate_id: impl Into<String>,
    to_input_index: usize,
) -> Wire {
    Wire {
        id: generate_id(),
        from: WireEndpoint::new(from_gate_id, from_output_index),
        to: WireEndpoint::new(to_gate_id, to_input_index),
        level: LogicLevel::Unknown,
        path: None,
    }
}

/// Create an empty circuit with no gates, wires, or pins.
pub fn create_empty_circuit(name: impl Into<String>) -> Circuit {
    let name = name.into();
    Circuit {
        id: generate_id(),
        name: if name.is_empty() {
            "New Circuit".to_string()
        } else {
            name
        },
        gates: Vec::new(),
        wires: Vec::new(),
        inputs: Vec::new(),
        outputs: Vec::new(),
    }
}

/// Append a gate. No duplicate-id checking.
pub fn add_gate(circuit: &Circuit, gate: Gate) -> Circuit {
    let mut next = circuit.clone();
    next.gates.push(gate);
    next
}

/// Append a wire. No duplicate or integrity checking.
pub fn add_wire(circuit: &Circuit, wire: Wire) -> Circuit {
    let mut next = circuit.clone();
    next.wires.push(wire);
    next
}

/// Remove a gate and cascade-remove every wire touching it.
///
/// Post-condition: no remaining wire references the removed gate id on
/// either endpoint, preserving referential integrity.
pub fn remove_gate(circuit: &Circuit, gate_id: &str) -> Circuit {
    let mut next = circuit.clone();
    next.gates.retain(|gate| gate.id != gate_id);
    next.wires
        .retain(|wire| wire.from.gate_id != gate_id && wire.to.gate_id != gate_id);
    next
}

/// Remove a single wire by id.
pub fn remove_wire(circuit: &Circuit, wire_id: &str) -> Circuit {
    let mut next = circuit.clone();
    next.wires.retain(|wire| wire.id != wire_id);
    next
}

/// Move a gate to a new position, identity preserved.
pub fn update_gate_position(circuit: &Circuit, gate_id: &str, position: Position) -> Circuit {
    let mut next = circuit.clone();
    if let Some(gate) = next.gates.iter_mut().find(|gate| gate.id == gate_id) {
        gate.position = position;
    }
    next
}

/// Deep-copy a circuit with every id regenerated.
///
/// The clone lives in a disjoint identity space: circuit, gate, wire, and
/// pin ids are all fresh, so the copy can be mutated independently. Wire
/// endpoints still name the ORIGINAL gate ids and therefore dangle in the
/// clone; the validator reports them.
pub fn clone_circuit(circuit: &Circuit) -> Circuit {
    Circuit {
        id: generate_id(),
        name: format!("{} (Copy)", circuit.name),
        gates: circuit
            .gates
            .iter()
            .map(|gate| Gate {
                id: generate_id(),
                ..gate.clone()
            })
            .collect(),
        wires: circuit
            .wires
            .iter()
            .map(|wire| Wire {
                id: generate_id(),
                ..wire.clone()
            })
            .collect(),
        inputs: circuit
            .inputs
            .iter()
            .map(|pin| {
                let mut pin = pin.clone();
                pin.id = generate_id();
                pin
            })
            .collect(),
        outputs: circuit
            .outputs
            .iter()
            .map(|pin| {
                let mut pin = pin.clone();
                pin.id = generate_id();
                pin
            })
            .collect(),
    }
}

/// Gates adjacent to one gate, split by direction.
#[derive(Debug)]
pub struct ConnectedGates<'a> {
    /// Gates wired into this gate's inputs
    pub inputs: Vec<&'a Gate>,
    /// Gates this gate's output feeds
    pub outputs: Vec<&'a Gate>,
}

/// Find all gates directly wired to the given gate, by linear wire scan.
pub fn find_connected_gates<'a>(circuit: &'a Circuit, gate_id: &str) -> ConnectedGates<'a> {
    let mut inputs = Vec::new();
    let mut outputs = Vec::new();

    for wire in &circuit.wires {
        if wire.to.gate_id == gate_id {
            if let Some(gate) = circuit.find_gate(&wire.from.gate_id) {
                inputs.push(gate);
            }
        }
        if wire.from.gate_id == gate_id {
            if let Some(gate) = circuit.find_gate(&wire.to.gate_id) {
                outputs.push(gate);
            }
        }
    }

    ConnectedGates { inputs, outputs }
}

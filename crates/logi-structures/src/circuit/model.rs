// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Circuit entity definitions.

Pure data definitions - no simulation logic. Signal propagation lives in
logi-engine; structural edits live in the sibling `editing` module.

Referential integrity between wires and gates is deliberately NOT enforced
here. Interactive editors build circuits incrementally and are allowed to
hold inconsistent intermediate states; the validator reports on them.
*/

use crate::{GateKind, LogiDataError, LogiJSON, LogicLevel};
use serde::{Deserialize, Serialize};

/// 2-D canvas position. Layout only - simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single combinational gate instance.
///
/// Created with every input and the output at [`LogicLevel::Unknown`]; the
/// propagation engine rewrites levels, structural edits rewrite the rest.
/// The input vector length must equal `kind.input_count()` (checked by the
/// validator, guaranteed by [`super::editing::create_gate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Unique id within the owning circuit
    pub id: String,
    pub kind: GateKind,
    pub position: Position,
    /// Current input levels, one slot per input port
    pub inputs: Vec<LogicLevel>,
    /// Last computed output level
    pub output: LogicLevel,
    /// Optional user-facing label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One end of a wire: a gate id plus a port index.
///
/// For a source endpoint the port is the output index (always 0, gates are
/// single-output); for a destination endpoint it is the input slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEndpoint {
    pub gate_id: String,
    pub port: usize,
}

impl WireEndpoint {
    pub fn new(gate_id: impl Into<String>, port: usize) -> Self {
        Self {
            gate_id: gate_id.into(),
            port,
        }
    }
}

/// A directed connection carrying one gate's output into one input slot of
/// another gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    /// Unique id within the owning circuit
    pub id: String,
    pub from: WireEndpoint,
    pub to: WireEndpoint,
    /// Mirror of the source gate's last propagated output
    pub level: LogicLevel,
    /// Optional prerendered routing path; simulation ignores it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// External boundary point of a circuit (a named input or output terminal).
///
/// Pins are simulation boundary markers, not gates: the engine does not
/// evaluate them, but layout and serialization treat them like any other
/// positioned entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: String,
    pub label: String,
    pub level: LogicLevel,
    pub position: Position,
}

/// A complete combinational circuit.
///
/// Plain data with no cyclic references at the value level, so any circuit
/// can round-trip through JSON without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub id: String,
    pub name: String,
    pub gates: Vec<Gate>,
    pub wires: Vec<Wire>,
    /// Named external input terminals
    pub inputs: Vec<Pin>,
    /// Named external output terminals
    pub outputs: Vec<Pin>,
}

impl Circuit {
    /// Look up a gate by id.
    pub fn find_gate(&self, gate_id: &str) -> Option<&Gate> {
        self.gates.iter().find(|gate| gate.id == gate_id)
    }

    /// Look up a wire by id.
    pub fn find_wire(&self, wire_id: &str) -> Option<&Wire> {
        self.wires.iter().find(|wire| wire.id == wire_id)
    }

    /// Serialize this circuit into a [`LogiJSON`] value.
    pub fn to_json(&self) -> Result<LogiJSON, LogiDataError> {
        match serde_json::to_value(self) {
            Ok(value) => Ok(LogiJSON::from_json_value(value)),
            Err(e) => Err(LogiDataError::SerializationError(format!(
                "Failed to serialize circuit '{}': {}",
                self.name, e
            ))),
        }
    }

    /// Rebuild a circuit from a [`LogiJSON`] value.
    pub fn from_json(json: &LogiJSON) -> Result<Circuit, LogiDataError> {
        serde_json::from_value(json.borrow_json_value().clone()).map_err(|e| {
            LogiDataError::DeserializationError(format!("Failed to deserialize circuit: {}", e))
        })
    }

    /// Serialize to a JSON string.
    pub fn to_json_string(&self) -> Result<String, LogiDataError> {
        Ok(self.to_json()?.to_string())
    }

    /// Parse from a JSON string.
    pub fn from_json_string(raw: &str) -> Result<Circuit, LogiDataError> {
        Circuit::from_json(&LogiJSON::from_json_string(raw)?)
    }
}

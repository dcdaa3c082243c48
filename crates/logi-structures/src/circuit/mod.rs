// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Circuit Data Model
//!
//! Entity definitions plus pure processors over them:
//! - `model`: the data types themselves (gates, wires, pins, circuits)
//! - `editing`: construction and structural edits, each returning a new value
//! - `geometry`: layout math used by the canvas (never affects simulation)

pub mod editing;
pub mod geometry;
pub mod model;

pub use editing::{
    add_gate, add_wire, clone_circuit, create_empty_circuit, create_gate, create_wire,
    find_connected_gates, generate_id, remove_gate, remove_wire, update_gate_position,
    ConnectedGates,
};
pub use geometry::{
    center_circuit, circuit_bounds, distance, find_nearest_gate, gates_overlap, scale_circuit,
    snap_to_grid, wire_path, CircuitBounds, WirePathStyle, DEFAULT_GRID_SIZE,
};
pub use model::{Circuit, Gate, Pin, Position, Wire, WireEndpoint};

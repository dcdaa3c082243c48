// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Layout math for the circuit canvas
//!
//! Pure geometric computations over positions: bounding boxes, grid
//! snapping, nearest-gate lookup, and SVG wire routing. None of this ever
//! affects simulation results.

use super::model::{Circuit, Gate, Position};
use serde::{Deserialize, Serialize};

/// Default canvas grid pitch in pixels.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Nominal gate footprint used for overlap detection.
const GATE_FOOTPRINT: f64 = 80.0;

/// Axis-aligned bounding box of a circuit's positioned entities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CircuitBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Compute the bounding box over all gates and pins.
///
/// An empty circuit yields a zeroed box at the origin.
pub fn circuit_bounds(circuit: &Circuit) -> CircuitBounds {
    let positions: Vec<Position> = circuit
        .gates
        .iter()
        .map(|gate| gate.position)
        .chain(circuit.inputs.iter().map(|pin| pin.position))
        .chain(circuit.outputs.iter().map(|pin| pin.position))
        .collect();

    if positions.is_empty() {
        return CircuitBounds::default();
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for pos in &positions {
        min_x = min_x.min(pos.x);
        min_y = min_y.min(pos.y);
        max_x = max_x.max(pos.x);
        max_y = max_y.max(pos.y);
    }

    CircuitBounds {
        min_x,
        min_y,
        max_x,
        max_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

fn translate(circuit: &Circuit, dx: f64, dy: f64) -> Circuit {
    let mut next = circuit.clone();
    for gate in &mut next.gates {
        gate.position.x += dx;
        gate.position.y += dy;
    }
    for pin in next.inputs.iter_mut().chain(next.outputs.iter_mut()) {
        pin.position.x += dx;
        pin.position.y += dy;
    }
    next
}

/// Recenter a circuit so its bounding box straddles the origin.
pub fn center_circuit(circuit: &Circuit) -> Circuit {
    let bounds = circuit_bounds(circuit);
    let center_x = bounds.min_x + bounds.width / 2.0;
    let center_y = bounds.min_y + bounds.height / 2.0;
    translate(circuit, -center_x, -center_y)
}

/// Scale every gate and pin position by a factor.
pub fn scale_circuit(circuit: &Circuit, scale: f64) -> Circuit {
    let mut next = circuit.clone();
    for gate in &mut next.gates {
        gate.position.x *= scale;
        gate.position.y *= scale;
    }
    for pin in next.inputs.iter_mut().chain(next.outputs.iter_mut()) {
        pin.position.x *= scale;
        pin.position.y *= scale;
    }
    next
}

/// Snap a position to the nearest grid intersection.
pub fn snap_to_grid(position: Position, grid_size: f64) -> Position {
    Position {
        x: (position.x / grid_size).round() * grid_size,
        y: (position.y / grid_size).round() * grid_size,
    }
}

/// Euclidean distance between two positions.
pub fn distance(a: Position, b: Position) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Find the gate closest to a position, within `max_distance`.
pub fn find_nearest_gate<'a>(
    circuit: &'a Circuit,
    position: Position,
    max_distance: f64,
) -> Option<&'a Gate> {
    let mut nearest: Option<&Gate> = None;
    let mut best = max_distance;

    for gate in &circuit.gates {
        let dist = distance(position, gate.position);
        if dist < best {
            best = dist;
            nearest = Some(gate);
        }
    }

    nearest
}

/// Whether two gates sit close enough to visually collide.
pub fn gates_overlap(a: &Gate, b: &Gate, margin: f64) -> bool {
    distance(a.position, b.position) < GATE_FOOTPRINT + margin
}

/// Wire routing styles supported by the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WirePathStyle {
    /// Direct line between endpoints
    Straight,
    /// Orthogonal routing with one bend at the horizontal midpoint
    Manhattan,
    /// Cubic curve with horizontally offset control points
    #[default]
    Curved,
}

/// Generate an SVG path string for a wire between two points.
pub fn wire_path(start: Position, end: Position, style: WirePathStyle) -> String {
    match style {
        WirePathStyle::Straight => {
            format!("M {} {} L {} {}", start.x, start.y, end.x, end.y)
        }
        WirePathStyle::Manhattan => {
            let mid_x = start.x + (end.x - start.x) / 2.0;
            format!(
                "M {} {} L {} {} L {} {} L {} {}",
                start.x, start.y, mid_x, start.y, mid_x, end.y, end.x, end.y
            )
        }
        WirePathStyle::Curved => {
            let delta_x = end.x - start.x;
            let control_x = start.x + delta_x * 0.5;
            format!(
                "M {} {} C {} {} {} {} {} {}",
                start.x, start.y, control_x, start.y, control_x, end.y, end.x, end.y
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::editing::{add_gate, create_empty_circuit, create_gate};
    use crate::GateKind;

    fn positioned_circuit() -> Circuit {
        let mut circuit = create_empty_circuit("layout");
        circuit = add_gate(
            &circuit,
            create_gate(GateKind::And, Position::new(20.0, 40.0), None),
        );
        circuit = add_gate(
            &circuit,
            create_gate(GateKind::Or, Position::new(120.0, 140.0), None),
        );
        circuit
    }

    #[test]
    fn test_bounds_of_empty_circuit() {
        let circuit = create_empty_circuit("empty");
        assert_eq!(circuit_bounds(&circuit), CircuitBounds::default());
    }

    #[test]
    fn test_bounds() {
        let bounds = circuit_bounds(&positioned_circuit());
        assert_eq!(bounds.min_x, 20.0);
        assert_eq!(bounds.min_y, 40.0);
        assert_eq!(bounds.max_x, 120.0);
        assert_eq!(bounds.max_y, 140.0);
        assert_eq!(bounds.width, 100.0);
        assert_eq!(bounds.height, 100.0);
    }

    #[test]
    fn test_center_circuit() {
        let centered = center_circuit(&positioned_circuit());
        let bounds = circuit_bounds(&centered);
        assert_eq!(bounds.min_x, -50.0);
        assert_eq!(bounds.max_x, 50.0);
        assert_eq!(bounds.min_y, -50.0);
        assert_eq!(bounds.max_y, 50.0);
    }

    #[test]
    fn test_scale_circuit() {
        let scaled = scale_circuit(&positioned_circuit(), 2.0);
        assert_eq!(scaled.gates[0].position, Position::new(40.0, 80.0));
        assert_eq!(scaled.gates[1].position, Position::new(240.0, 280.0));
    }

    #[test]
    fn test_snap_to_grid() {
        let snapped = snap_to_grid(Position::new(27.0, 33.0), 20.0);
        assert_eq!(snapped, Position::new(20.0, 40.0));
    }

    #[test]
    fn test_find_nearest_gate_respects_max_distance() {
        let circuit = positioned_circuit();
        let near = find_nearest_gate(&circuit, Position::new(25.0, 45.0), 100.0);
        assert_eq!(near.unwrap().position, Position::new(20.0, 40.0));

        let far = find_nearest_gate(&circuit, Position::new(1000.0, 1000.0), 100.0);
        assert!(far.is_none());
    }

    #[test]
    fn test_wire_path_styles() {
        let start = Position::new(0.0, 0.0);
        let end = Position::new(100.0, 50.0);

        assert_eq!(
            wire_path(start, end, WirePathStyle::Straight),
            "M 0 0 L 100 50"
        );
        assert_eq!(
            wire_path(start, end, WirePathStyle::Manhattan),
            "M 0 0 L 50 0 L 50 50 L 100 50"
        );
        assert_eq!(
            wire_path(start, end, WirePathStyle::Curved),
            "M 0 0 C 50 0 50 50 100 50"
        );
    }

    #[test]
    fn test_gates_overlap() {
        let a = create_gate(GateKind::And, Position::new(0.0, 0.0), None);
        let close = create_gate(GateKind::Or, Position::new(30.0, 0.0), None);
        let far = create_gate(GateKind::Or, Position::new(200.0, 0.0), None);

        assert!(gates_overlap(&a, &close, 10.0));
        assert!(!gates_overlap(&a, &far, 10.0));
    }
}

// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The closed catalog of combinational gate kinds
//!
//! Each kind carries a fixed input count plus the display metadata the
//! lesson layer renders (schematic symbol, name, one-line description).
//! Adding a kind means extending this enum together with the evaluation
//! dispatch in `logi-engine`; the compiler enforces exhaustiveness at both
//! sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a combinational logic gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateKind {
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
    Buffer,
}

impl GateKind {
    /// Every gate kind, in catalog order.
    pub const ALL: [GateKind; 8] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xor,
        GateKind::Xnor,
        GateKind::Buffer,
    ];

    /// Number of inputs this kind requires.
    ///
    /// This is a structural invariant: a gate instance's input vector must
    /// always have exactly this length.
    pub fn input_count(&self) -> usize {
        match self {
            GateKind::Not | GateKind::Buffer => 1,
            GateKind::And
            | GateKind::Or
            | GateKind::Nand
            | GateKind::Nor
            | GateKind::Xor
            | GateKind::Xnor => 2,
        }
    }

    /// Schematic symbol shown on the gate body.
    pub fn symbol(&self) -> &'static str {
        match self {
            GateKind::And => "&",
            GateKind::Or => "\u{2265}1",
            GateKind::Not => "\u{00ac}",
            GateKind::Nand => "\u{22bc}",
            GateKind::Nor => "\u{22bd}",
            GateKind::Xor => "\u{2295}",
            GateKind::Xnor => "\u{2299}",
            GateKind::Buffer => "\u{25b7}",
        }
    }

    /// Human-readable gate name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GateKind::And => "AND Gate",
            GateKind::Or => "OR Gate",
            GateKind::Not => "NOT Gate",
            GateKind::Nand => "NAND Gate",
            GateKind::Nor => "NOR Gate",
            GateKind::Xor => "XOR Gate",
            GateKind::Xnor => "XNOR Gate",
            GateKind::Buffer => "Buffer",
        }
    }

    /// One-line behavioral description used by lesson content.
    pub fn description(&self) -> &'static str {
        match self {
            GateKind::And => "Output is high only when all inputs are high",
            GateKind::Or => "Output is high when at least one input is high",
            GateKind::Not => "Output is the inverse of the input",
            GateKind::Nand => "Output is low only when all inputs are high",
            GateKind::Nor => "Output is high only when all inputs are low",
            GateKind::Xor => "Output is high when inputs are different",
            GateKind::Xnor => "Output is high when inputs are the same",
            GateKind::Buffer => "Output equals input (amplifies signal)",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
            GateKind::Xnor => "XNOR",
            GateKind::Buffer => "BUFFER",
        };
        write!(f, "{}", name)
    }
}

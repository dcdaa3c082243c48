//! The core crate for Logi. Defines the most common data structures used throughout
//!
//! Everything here is plain data plus pure processors: building a circuit,
//! editing it, and laying it out never touches simulation state. The
//! simulation itself lives in `logi-engine`.

pub mod circuit;
mod error;
pub mod gate_kind;
pub mod logic_level;
mod logi_json;
pub mod truth_table;

pub use circuit::{Circuit, CircuitBounds, ConnectedGates, Gate, Pin, Position, Wire, WireEndpoint, WirePathStyle};
pub use error::LogiDataError;
pub use gate_kind::GateKind;
pub use logi_json::LogiJSON;
pub use logic_level::LogicLevel;
pub use truth_table::{TruthTable, TruthTableRow};

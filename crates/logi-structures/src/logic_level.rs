// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Three-valued signal levels

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single signal level.
///
/// Every signal in a circuit is `Low`, `High`, or `Unknown`. `Unknown`
/// represents an unset or indeterminate signal and is absorbing under gate
/// evaluation: any gate with an `Unknown` input produces an `Unknown` output,
/// regardless of its kind. This is how uninitialized or disconnected circuits
/// stay visibly indeterminate instead of defaulting to a logic level.
///
/// Serialized as `0`, `1`, or `"X"` so that stored circuits stay compact and
/// human-readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogicLevel {
    /// Logic 0
    Low,
    /// Logic 1
    High,
    /// Unset or indeterminate
    #[default]
    Unknown,
}

impl LogicLevel {
    /// True when the level is a determined `Low` or `High`.
    pub fn is_known(&self) -> bool {
        !matches!(self, LogicLevel::Unknown)
    }

    /// Convert to a boolean, `None` for `Unknown`.
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            LogicLevel::Low => Some(false),
            LogicLevel::High => Some(true),
            LogicLevel::Unknown => None,
        }
    }

    /// Build a determined level from a boolean.
    pub fn from_bool(value: bool) -> Self {
        if value {
            LogicLevel::High
        } else {
            LogicLevel::Low
        }
    }
}

impl From<bool> for LogicLevel {
    fn from(value: bool) -> Self {
        LogicLevel::from_bool(value)
    }
}

impl fmt::Display for LogicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicLevel::Low => write!(f, "0"),
            LogicLevel::High => write!(f, "1"),
            LogicLevel::Unknown => write!(f, "X"),
        }
    }
}

impl Serialize for LogicLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LogicLevel::Low => serializer.serialize_u8(0),
            LogicLevel::High => serializer.serialize_u8(1),
            LogicLevel::Unknown => serializer.serialize_str("X"),
        }
    }
}

/// Untagged view of the two accepted wire representations.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for LogicLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match LevelRepr::deserialize(deserializer)? {
            LevelRepr::Number(0) => Ok(LogicLevel::Low),
            LevelRepr::Number(1) => Ok(LogicLevel::High),
            LevelRepr::Number(n) => Err(D::Error::custom(format!(
                "invalid logic level: {} (expected 0, 1, or \"X\")",
                n
            ))),
            LevelRepr::Text(s) if s == "X" || s == "x" => Ok(LogicLevel::Unknown),
            LevelRepr::Text(s) => Err(D::Error::custom(format!(
                "invalid logic level: \"{}\" (expected 0, 1, or \"X\")",
                s
            ))),
        }
    }
}

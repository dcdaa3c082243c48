// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `logi_configuration.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LogiConfig {
    pub simulation: SimulationConfig,
    pub limits: LimitsConfig,
    pub canvas: CanvasConfig,
    pub logging: LoggingConfig,
}

/// Signal propagation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Pass ceiling for the fixed-point settle loop. Hitting it is reported
    /// as a possible feedback loop, never as a failure.
    pub max_passes: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { max_passes: 100 }
    }
}

/// Structural ceilings enforced by the validator
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_gates: usize,
    pub max_wires: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_gates: 50,
            max_wires: 100,
        }
    }
}

/// Canvas layout settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Grid pitch in pixels
    pub grid_size: f64,
    /// Snap dropped gates to the grid
    pub snap_to_grid: bool,
    /// Wire routing style: "straight", "curved", or "manhattan"
    pub wire_style: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_size: 20.0,
            snap_to_grid: true,
            wire_style: "curved".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
    pub print_settle_info: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "WARNING".to_string(),
            print_settle_info: false,
        }
    }
}

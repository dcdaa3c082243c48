// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, LogiConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the Logi configuration file
///
/// Search order:
/// 1. `LOGI_CONFIG_PATH` environment variable
/// 2. Current working directory: `./logi_configuration.toml`
/// 3. Parent directories (searches up to 5 levels for a workspace root)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("LOGI_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by LOGI_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join("logi_configuration.toml"));

        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join("logi_configuration.toml"));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Logi configuration file 'logi_configuration.toml' not found in any of these locations:\n{}\n\nSet LOGI_CONFIG_PATH environment variable to specify custom location.",
        search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if the config file cannot be found or read, or contains
/// invalid TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<LogiConfig> {
    let config_file = if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        find_config_file()?
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: LogiConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `LOGI_MAX_PASSES` -> `simulation.max_passes`
/// - `LOGI_MAX_GATES` -> `limits.max_gates`
/// - `LOGI_MAX_WIRES` -> `limits.max_wires`
/// - `LOGI_GRID_SIZE` -> `canvas.grid_size`
/// - `LOGI_WIRE_STYLE` -> `canvas.wire_style`
/// - `LOGI_LOG_LEVEL` -> `logging.log_level`
pub fn apply_environment_overrides(config: &mut LogiConfig) {
    if let Ok(value) = env::var("LOGI_MAX_PASSES") {
        if let Ok(parsed) = value.parse() {
            config.simulation.max_passes = parsed;
        }
    }
    if let Ok(value) = env::var("LOGI_MAX_GATES") {
        if let Ok(parsed) = value.parse() {
            config.limits.max_gates = parsed;
        }
    }
    if let Ok(value) = env::var("LOGI_MAX_WIRES") {
        if let Ok(parsed) = value.parse() {
            config.limits.max_wires = parsed;
        }
    }
    if let Ok(value) = env::var("LOGI_GRID_SIZE") {
        if let Ok(parsed) = value.parse() {
            config.canvas.grid_size = parsed;
        }
    }
    if let Ok(value) = env::var("LOGI_WIRE_STYLE") {
        config.canvas.wire_style = value;
    }
    if let Ok(value) = env::var("LOGI_LOG_LEVEL") {
        config.logging.log_level = value;
    }
}

/// Apply CLI argument overrides to configuration
///
/// Keys use dotted section paths, e.g. `limits.max_gates`.
pub fn apply_cli_overrides(config: &mut LogiConfig, cli_args: &HashMap<String, String>) {
    for (key, value) in cli_args {
        match key.as_str() {
            "simulation.max_passes" => {
                if let Ok(parsed) = value.parse() {
                    config.simulation.max_passes = parsed;
                }
            }
            "limits.max_gates" => {
                if let Ok(parsed) = value.parse() {
                    config.limits.max_gates = parsed;
                }
            }
            "limits.max_wires" => {
                if let Ok(parsed) = value.parse() {
                    config.limits.max_wires = parsed;
                }
            }
            "canvas.grid_size" => {
                if let Ok(parsed) = value.parse() {
                    config.canvas.grid_size = parsed;
                }
            }
            "canvas.snap_to_grid" => {
                if let Ok(parsed) = value.parse() {
                    config.canvas.snap_to_grid = parsed;
                }
            }
            "canvas.wire_style" => config.canvas.wire_style = value.clone(),
            "logging.log_level" => config.logging.log_level = value.clone(),
            _ => {}
        }
    }
}

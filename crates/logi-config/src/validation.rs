//! Configuration validation
//!
//! This module provides validation logic to ensure configuration values are
//! consistent and within valid ranges.

use crate::{ConfigError, ConfigResult, LogiConfig};

const WIRE_STYLES: [&str; 3] = ["straight", "curved", "manhattan"];
const LOG_LEVELS: [&str; 5] = ["ERROR", "WARNING", "INFO", "DEBUG", "TRACE"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks value ranges across every section, accumulating all problems
/// before reporting.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` with details if validation fails
pub fn validate_config(config: &LogiConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    if config.simulation.max_passes == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "simulation.max_passes".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    if config.limits.max_gates == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "limits.max_gates".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if config.limits.max_wires == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "limits.max_wires".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    if !(config.canvas.grid_size.is_finite() && config.canvas.grid_size > 0.0) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "canvas.grid_size".to_string(),
            reason: "must be a positive number".to_string(),
        });
    }
    if !WIRE_STYLES.contains(&config.canvas.wire_style.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "canvas.wire_style".to_string(),
            reason: format!("must be one of: {}", WIRE_STYLES.join(", ")),
        });
    }

    if !LOG_LEVELS.contains(&config.logging.log_level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.log_level".to_string(),
            reason: format!("must be one of: {}", LOG_LEVELS.join(", ")),
        });
    }

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

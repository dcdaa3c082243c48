// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Logi Configuration System
//!
//! Type-safe configuration loader for Logi:
//! - TOML file parsing (`logi_configuration.toml`)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! Every value has a default, so an absent file section (or an absent file,
//! when a path is handed in directly) still yields a working configuration.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_cli_overrides, apply_environment_overrides, find_config_file, load_config};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

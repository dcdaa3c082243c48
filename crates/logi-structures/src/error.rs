use std::error::Error;
use std::fmt::{Display, Formatter};

/// Common error type for Logi data operations.
///
/// Covers serialization, deserialization, and bad-parameter failures in the
/// data layer. Circuit construction itself never errors: an interactive
/// editor is allowed to hold transiently invalid circuits, and the validator
/// in `logi-engine` is the single source of truth for structural problems.
///
/// # Examples
/// ```
/// use logi_structures::LogiDataError;
///
/// fn parse_level(raw: &str) -> Result<u8, LogiDataError> {
///     raw.parse()
///         .map_err(|_| LogiDataError::BadParameters(format!("not a level: {}", raw)))
/// }
///
/// assert!(parse_level("1").is_ok());
/// assert!(parse_level("high").is_err());
/// ```
#[derive(Debug)]
pub enum LogiDataError {
    /// Failed to deserialize text into data structures
    DeserializationError(String),
    /// Failed to serialize data structures into text
    SerializationError(String),
    /// Invalid parameters provided to a function
    BadParameters(String),
}

impl Display for LogiDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogiDataError::DeserializationError(msg) => {
                write!(f, "Failed to Deserialize Circuit Data: {}", msg)
            }
            LogiDataError::SerializationError(msg) => {
                write!(f, "Failed to Serialize Circuit Data: {}", msg)
            }
            LogiDataError::BadParameters(msg) => write!(f, "Bad Parameters: {}", msg),
        }
    }
}

impl Error for LogiDataError {}

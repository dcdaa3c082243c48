use crate::LogiDataError;
use serde_json;

/// A wrapper around serde_json::Value for handling JSON data in Logi.
///
/// Circuits cross the boundary to the rendering and persistence layers as
/// structured JSON; this wrapper keeps parse errors in [`LogiDataError`]
/// instead of leaking serde_json types across the API.
#[derive(Clone, Debug)]
pub struct LogiJSON {
    json: serde_json::Value,
}

impl LogiJSON {
    pub fn new_empty() -> LogiJSON {
        LogiJSON {
            json: serde_json::json!({}),
        }
    }

    pub fn from_json_string(string: &str) -> Result<LogiJSON, LogiDataError> {
        match serde_json::from_str(string) {
            Ok(json_value) => Ok(LogiJSON { json: json_value }),
            Err(e) => Err(LogiDataError::DeserializationError(format!(
                "Failed to parse JSON string: {}",
                e
            ))),
        }
    }

    /// Creates a LogiJSON from an existing serde_json::Value.
    pub fn from_json_value(value: serde_json::Value) -> LogiJSON {
        LogiJSON { json: value }
    }

    /// Returns a reference to the internal JSON value.
    pub fn borrow_json_value(&self) -> &serde_json::Value {
        &self.json
    }

    /// Updates the internal JSON value.
    pub fn update_json_value(&mut self, new_value: serde_json::Value) {
        self.json = new_value;
    }
}

impl std::fmt::Display for LogiJSON {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.json)
    }
}
